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

//! flattening of resolved features for the advisory narrative service, which only gets to see
//! position and value of each point

use serde::{Serialize,Deserialize};
use serde_json::{self, Value as JsonValue};
use geojson::{FeatureCollection, Value};

use crate::{assemble::VALUE, errors::Result};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AdvisoryPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub value: Option<JsonValue>, // serialized as null if missing
}

/// one AdvisoryPoint per Point feature, in feature order. Features without Point geometry are skipped
pub fn advisory_points (fc: &FeatureCollection)->Vec<AdvisoryPoint> {
    fc.features.iter().filter_map( |f| {
        let geometry = f.geometry.as_ref()?;
        match &geometry.value {
            Value::Point(pos) if pos.len() >= 2 => {
                let value = f.properties.as_ref()
                    .and_then( |props| props.get(VALUE))
                    .filter( |v| !v.is_null())
                    .cloned();
                Some( AdvisoryPoint { latitude: pos[1], longitude: pos[0], value })
            }
            _ => None
        }
    }).collect()
}

pub fn advisory_json (points: &[AdvisoryPoint])->Result<String> {
    Ok( serde_json::to_string( points)?)
}
