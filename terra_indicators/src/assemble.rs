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

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::Value as JsonValue;

use crate::{IndicatorType, reduce::ResolvedPoint};

// feature property names
pub const ID: &str = "id";
pub const DATE: &str = "date";
pub const TYPE: &str = "type";
pub const VALUE: &str = "value";
pub const TIME_DIFF: &str = "timeDiff";

/// stable ascending sort by sample date. Points with the same date keep their relative order
pub fn sort_chronologically (points: &mut [ResolvedPoint]) {
    points.sort_by_key( |p| p.sample.date);
}

/// sort resolved points chronologically and turn them into a FeatureCollection of Points
pub fn assemble (mut points: Vec<ResolvedPoint>, indicator: IndicatorType)->FeatureCollection {
    sort_chronologically( &mut points);
    to_feature_collection( &points, indicator)
}

/// turn already sorted points into a FeatureCollection. No points gives an empty collection
pub fn to_feature_collection (points: &[ResolvedPoint], indicator: IndicatorType)->FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: points.iter().map( |p| point_feature( p, indicator)).collect(),
        foreign_members: None
    }
}

pub fn point_feature (p: &ResolvedPoint, indicator: IndicatorType)->Feature {
    let sample = &p.sample;
    let pos = &sample.position;

    let mut properties = JsonObject::new();
    properties.insert( ID.to_string(), sample.id.as_ref().map_or( JsonValue::Null, |id| JsonValue::String( id.clone())));
    properties.insert( DATE.to_string(), JsonValue::String( sample.raw_date.clone()));
    properties.insert( TYPE.to_string(), JsonValue::String( indicator.value_column().to_string()));
    properties.insert( VALUE.to_string(), sample.value.to_json_value());
    properties.insert( TIME_DIFF.to_string(), JsonValue::from( p.time_diff_ms));

    Feature {
        bbox: None,
        geometry: Some( Geometry::new( Value::Point( vec![pos.longitude_degrees(), pos.latitude_degrees()]))),
        id: None,
        properties: Some(properties),
        foreign_members: None
    }
}
