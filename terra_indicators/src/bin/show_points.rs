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

use std::{path::{Path,PathBuf}, sync::Arc};
use anyhow::{anyhow,Result};
use serde_json::Value as JsonValue;
use tracing_subscriber::EnvFilter;

use terra_common::{define_cli, check_cli, fs::filepath_contents_as_string};
use terra_indicators::{
    IndicatorCatalog, IndicatorsConfig, load_config,
    advisory::{advisory_points, advisory_json},
    resolver::PointResolver
};

define_cli! { ARGS [about="resolve indicator points inside a GeoJSON polygon that are nearest to a given date"] =
    config: Option<PathBuf> [help="pathname of indicators config (default is the local 'indicators' config)", long],
    data_dir: Option<PathBuf> [help="directory with indicator data files (overrides config)", long],
    indicator: String [help="indicator type: LST, NPP, LandCover, NDVI, TreeCover or TreeAnalysis", short, long],
    date: String [help="target date, e.g. 2024-01-09 or 2024-01-09T12:00:00Z", short, long, default_value=""],
    advice: bool [help="print flattened points for the advisory service instead of GeoJSON", long],
    stats: bool [help="print resolution statistics", long],
    polygon: PathBuf [help="pathname of GeoJSON file with polygon, Feature or FeatureCollection", short, long]
}

#[tokio::main]
async fn main ()->Result<()> {
    check_cli!(ARGS);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let config = get_config()?;
    let catalog = Arc::new( IndicatorCatalog::from_config( &config));
    let resolver = PointResolver::with_system_clock( catalog);

    let polygon: JsonValue = serde_json::from_str( &filepath_contents_as_string( &ARGS.polygon)?)?;
    let resolution = resolver.resolve( &ARGS.date, polygon, &ARGS.indicator).await?;

    if ARGS.advice {
        let points = advisory_points( &resolution.features);
        println!("{}", advisory_json( &points)?);
    } else {
        println!("{}", resolution.features_json()?);
    }

    if ARGS.stats {
        eprintln!("target date: {}", resolution.target_date);
        eprintln!("{}", serde_json::to_string_pretty( &resolution.stats)?);
    }

    Ok(())
}

fn get_config ()->Result<IndicatorsConfig> {
    let mut config = match (&ARGS.config, &ARGS.data_dir) {
        (Some(path),_) => load_config( Some(path.as_path()))?,
        (None,Some(data_dir)) => IndicatorsConfig::new( data_dir.clone()),
        (None,None) => load_config(None).map_err( |e| anyhow!("no --config or --data-dir given and {e}"))?
    };

    if let Some(data_dir) = &ARGS.data_dir {
        config.data_dir = data_dir.clone();
    }
    Ok(config)
}
