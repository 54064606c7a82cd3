/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “TERRA” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! Satellite derived environmental indicators (land surface temperature, vegetation index, productivity,
//! land cover, tree cover and tree suitability) resolved to one representative point per coordinate
//! within a user supplied area of interest.
//!
//! Each indicator is backed by a CSV time series with `longitude`, `latitude`, `date`, `id` columns and one
//! indicator specific value column. Resolving an indicator streams its series, keeps rows that are valid and
//! inside the polygon, and picks for each coordinate the row whose date is nearest to the target date.

use std::{collections::HashMap, fmt, path::{Path,PathBuf}, str::FromStr};
use serde::{Serialize,Deserialize};
use serde_json;
use chrono::{DateTime,Utc};

use terra_common::{define_serde_struct, geo::GeoPoint, config::{config_from_local_file, load_config as load_config_from_path}};

pub mod errors;
use errors::{Result,TerraIndicatorsError};

pub mod validate;
pub mod reduce;
pub mod assemble;
pub mod stats;
pub mod resolver;
pub mod advisory;

pub const CONFIG_ID: &str = "indicators";

/* #region indicator types *************************************************************************************/

/// the closed set of supported indicators
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub enum IndicatorType {
    LST,
    NPP,
    LandCover,
    NDVI,
    TreeCover,
    TreeAnalysis,
}

impl IndicatorType {
    pub const ALL: [IndicatorType; 6] = [
        IndicatorType::LST, IndicatorType::NPP, IndicatorType::LandCover,
        IndicatorType::NDVI, IndicatorType::TreeCover, IndicatorType::TreeAnalysis
    ];

    /// the public tag as used by clients
    pub fn tag (&self)->&'static str {
        match self {
            IndicatorType::LST => "LST",
            IndicatorType::NPP => "NPP",
            IndicatorType::LandCover => "LandCover",
            IndicatorType::NDVI => "NDVI",
            IndicatorType::TreeCover => "TreeCover",
            IndicatorType::TreeAnalysis => "TreeAnalysis",
        }
    }

    /// the name of the value column in the backing data. This is also what we report as feature `type`
    pub fn value_column (&self)->&'static str {
        match self {
            IndicatorType::LST => "LST_Celsius",
            IndicatorType::NPP => "NPP_kgCm2perYear",
            IndicatorType::LandCover => "LandCover_Type",
            IndicatorType::NDVI => "NDVI_Value",
            IndicatorType::TreeCover => "TreeCover_Percent",
            IndicatorType::TreeAnalysis => "suitability_score",
        }
    }

    pub fn default_file (&self)->&'static str {
        match self {
            IndicatorType::LST => "all_LST_data.csv",
            IndicatorType::NPP => "all_NPP_data.csv",
            IndicatorType::LandCover => "all_LandCover_data.csv",
            IndicatorType::NDVI => "all_NDVI_data.csv",
            IndicatorType::TreeCover => "all_TreeCover_data.csv",
            IndicatorType::TreeAnalysis => "tree_analysis.csv",
        }
    }

    /// indicators for which the caller supplied target date is replaced by the current time
    pub fn uses_current_time (&self)->bool {
        matches!( self, IndicatorType::TreeCover | IndicatorType::TreeAnalysis)
    }

    /// categorical indicators keep their raw string value
    pub fn is_categorical (&self)->bool {
        matches!( self, IndicatorType::LandCover)
    }

    /// a value of 0 is a no-data artifact for this indicator
    pub fn rejects_zero (&self)->bool {
        matches!( self, IndicatorType::TreeCover)
    }
}

impl FromStr for IndicatorType {
    type Err = TerraIndicatorsError;

    fn from_str (s: &str)->Result<Self> {
        let tag = s.trim();
        IndicatorType::ALL.iter()
            .find( |it| it.tag() == tag)
            .copied()
            .ok_or_else( || TerraIndicatorsError::UnknownIndicator( s.to_string()))
    }
}

impl fmt::Display for IndicatorType {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/* #endregion indicator types */

/* #region config and catalog **********************************************************************************/

define_serde_struct! {
    pub IndicatorsConfig : Debug, Clone =
        pub data_dir: PathBuf,
        pub files: HashMap<IndicatorType,String> [default]
}

impl IndicatorsConfig {
    pub fn new (data_dir: impl Into<PathBuf>)->Self {
        IndicatorsConfig { data_dir: data_dir.into(), files: HashMap::new() }
    }

    pub fn file_name (&self, indicator: IndicatorType)->&str {
        self.files.get(&indicator).map( |s| s.as_str()).unwrap_or( indicator.default_file())
    }
}

/// load the indicators config from an explicit pathname or, if there is none, from the local config dir
pub fn load_config (pathname: Option<&Path>)->Result<IndicatorsConfig> {
    let config: IndicatorsConfig = match pathname {
        Some(path) => load_config_from_path( path)?,
        None => config_from_local_file( CONFIG_ID)?
    };
    Ok(config)
}

/// where the data for an indicator comes from
#[derive(Debug,Clone,PartialEq)]
pub struct IndicatorSource {
    pub indicator: IndicatorType,
    pub path: PathBuf,
}

impl IndicatorSource {
    #[inline] pub fn value_column (&self)->&'static str { self.indicator.value_column() }
}

/// the immutable indicator -> source table. This is created once and then shared between resolvers
#[derive(Debug,Clone,Default)]
pub struct IndicatorCatalog {
    sources: HashMap<IndicatorType,IndicatorSource>
}

impl IndicatorCatalog {
    /// a catalog that only knows the given sources
    pub fn new (sources: impl IntoIterator<Item=(IndicatorType,PathBuf)>)->Self {
        let sources = sources.into_iter()
            .map( |(indicator,path)| (indicator, IndicatorSource { indicator, path }))
            .collect();
        IndicatorCatalog { sources }
    }

    /// a catalog with entries for all indicators
    pub fn from_config (config: &IndicatorsConfig)->Self {
        Self::new( IndicatorType::ALL.iter().map( |it| (*it, config.data_dir.join( config.file_name(*it)))))
    }

    pub fn source (&self, indicator: IndicatorType)->Result<&IndicatorSource> {
        self.sources.get(&indicator).ok_or_else( || TerraIndicatorsError::MissingSource( indicator.to_string()))
    }

    pub fn len (&self)->usize { self.sources.len() }
}

/* #endregion config and catalog */

/* #region samples *********************************************************************************************/

/// an accepted sample value, which is either numeric or categorical (LandCover)
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(untagged)]
pub enum SampleValue {
    Numeric(f64),
    Category(String),
}

impl SampleValue {
    pub fn as_f64 (&self)->Option<f64> {
        match self {
            SampleValue::Numeric(v) => Some(*v),
            SampleValue::Category(_) => None
        }
    }

    pub fn is_zero (&self)->bool {
        matches!( self, SampleValue::Numeric(v) if *v == 0.0)
    }

    pub fn to_json_value (&self)->serde_json::Value {
        match self {
            SampleValue::Numeric(v) => serde_json::Value::from(*v),
            SampleValue::Category(s) => serde_json::Value::String( s.clone())
        }
    }
}

impl fmt::Display for SampleValue {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            SampleValue::Numeric(v) => write!(f, "{v}"),
            SampleValue::Category(s) => write!(f, "{s:?}")
        }
    }
}

/// a validated row. Samples are never mutated after creation
#[derive(Debug,Clone,PartialEq)]
pub struct Sample {
    pub id: Option<String>,
    pub date: DateTime<Utc>,
    pub raw_date: String, // what we echo in the output, not the parsed date
    pub position: GeoPoint,
    pub value: SampleValue,
}

/* #endregion samples */
