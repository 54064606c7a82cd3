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

//! the ingestion driver. A resolution goes through these phases:
//! ```text
//!   validating request -> streaming -> reducing -> assembling -> done
//!          |                  |
//!          +----> failed <----+
//! ```
//! Requests fail before anything is streamed if the indicator is unknown, its data source is missing or cannot
//! be opened, the target date does not parse or the polygon is not a (multi)polygon. While streaming we only
//! fail on I/O errors of the data source. Problems with single rows are logged, counted and skipped.

use std::{fs::File, io::Read, sync::Arc};
use chrono::{DateTime,Utc};
use csv::{ReaderBuilder,StringRecord};
use geojson::FeatureCollection;
use serde::Serialize;
use serde_json::{self, Value as JsonValue};
use tracing::{debug,warn};

use terra_common::{
    datetime::{Clock, parse_datetime, ser_short_rfc3339, system_clock},
    fs::path_to_lossy_string,
    geo::AreaOfInterest
};
use crate::{
    IndicatorCatalog, IndicatorSource, IndicatorType,
    assemble::{sort_chronologically, to_feature_collection},
    errors::{Result, TerraIndicatorsError, op_failed},
    reduce::NearestDateReducer,
    stats::ResolutionStats,
    validate::{RowRejection, RowSchema, validate},
};

/// a request that passed validation and is ready to be streamed
#[derive(Debug,Clone)]
pub struct ResolveRequest {
    pub indicator: IndicatorType,
    pub source: IndicatorSource,
    pub target_date: DateTime<Utc>, // the effective one
    pub area: AreaOfInterest,
}

/// the outcome of a successful resolution
#[derive(Debug,Clone,Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Resolution {
    pub indicator: IndicatorType,
    #[serde(serialize_with = "ser_short_rfc3339")]
    pub target_date: DateTime<Utc>,
    pub features: FeatureCollection,
    pub stats: ResolutionStats,
}

impl Resolution {
    pub fn len (&self)->usize { self.features.features.len() }

    pub fn is_empty (&self)->bool { self.features.features.is_empty() }

    /// the GeoJSON we hand out to clients
    pub fn features_json (&self)->Result<String> {
        Ok( serde_json::to_string( &self.features)?)
    }

    pub fn to_json_pretty (&self)->Result<String> {
        Ok( serde_json::to_string_pretty( &self)?)
    }
}

/// resolves indicator points inside of polygons. PointResolvers are cheap to clone and do not have any mutable
/// state, each request streams its own data source
#[derive(Debug,Clone)]
pub struct PointResolver {
    catalog: Arc<IndicatorCatalog>,
    clock: Arc<dyn Clock>,
}

impl PointResolver {
    pub fn new (catalog: Arc<IndicatorCatalog>, clock: Arc<dyn Clock>)->Self {
        PointResolver { catalog, clock }
    }

    pub fn with_system_clock (catalog: Arc<IndicatorCatalog>)->Self {
        Self::new( catalog, system_clock())
    }

    /// validate request parameters without touching the data source.
    /// For indicators that use the current time the `target_date` argument is ignored (even if it is not valid) and
    /// the clock is read once
    pub fn prepare (&self, target_date: &str, polygon: JsonValue, indicator: &str)->Result<ResolveRequest> {
        let indicator: IndicatorType = indicator.parse()?;
        let source = self.catalog.source( indicator)?.clone();

        let target_date = if indicator.uses_current_time() {
            let now = self.clock.now();
            debug!("{indicator} uses current time {now} as target date");
            now
        } else {
            parse_datetime( target_date).ok_or_else( || TerraIndicatorsError::InvalidTargetDate( target_date.to_string()))?
        };

        let area = AreaOfInterest::from_json_value( polygon).map_err( |e| TerraIndicatorsError::InvalidPolygon( e.to_string()))?;

        Ok( ResolveRequest { indicator, source, target_date, area } )
    }

    /// synchronous resolution. Use this from blocking contexts only
    pub fn resolve_blocking (&self, target_date: &str, polygon: JsonValue, indicator: &str)->Result<Resolution> {
        let request = self.prepare( target_date, polygon, indicator)?;
        let file = open_source( &request.source)?;
        resolve_reader( &request, file)
    }

    /// resolve from within async code. Streaming is done in a blocking task, the caller only waits for the result
    pub async fn resolve (&self, target_date: &str, polygon: JsonValue, indicator: &str)->Result<Resolution> {
        let request = self.prepare( target_date, polygon, indicator)?;

        tokio::task::spawn_blocking( move || {
            let file = open_source( &request.source)?;
            resolve_reader( &request, file)
        }).await?
    }
}

/// open the backing file of a source. This is still part of request validation
pub fn open_source (source: &IndicatorSource)->Result<File> {
    let path = &source.path;
    if !path.is_file() {
        return Err( TerraIndicatorsError::MissingSource( format!("{} ({})", source.indicator, path_to_lossy_string(path))))
    }
    File::open(path).map_err( |e| TerraIndicatorsError::SourceUnreadable{ path: path_to_lossy_string(path), source: e })
}

/// stream CSV rows from `reader`, keep the valid ones inside the request polygon and reduce them to the samples
/// nearest to the target date (one per coordinate).
/// Only I/O errors of the reader abort the stream, all row problems are counted in the returned statistics
pub fn resolve_reader<R: Read> (request: &ResolveRequest, reader: R)->Result<Resolution> {
    let indicator = request.indicator;
    let src = path_to_lossy_string( &request.source.path);

    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err( |e| {
        if e.is_io_error() {
            TerraIndicatorsError::StreamError( format!("{src}: {e}"))
        } else {
            op_failed!("unreadable header in {}: {}", src, e)
        }
    })?.clone();

    let schema = RowSchema::from_headers( &headers, indicator);
    let missing = schema.missing_columns();
    if !missing.is_empty() {
        warn!("{indicator} source {src} has no {:?} column(s), no rows will be accepted", missing);
    }

    debug!("streaming {indicator} data from {src} with target date {}", request.target_date);
    let mut stats = ResolutionStats::new();
    let mut reducer = NearestDateReducer::new( request.target_date);
    let mut record = StringRecord::new();

    loop {
        match csv_reader.read_record( &mut record) {
            Ok(true) => {
                stats.rows_read += 1;
                match validate( &schema.record(&record), indicator) {
                    Ok(sample) => {
                        if request.area.contains( &sample.position) {
                            stats.accept( &sample);
                            reducer.add( sample);
                        } else {
                            stats.reject( RowRejection::OutsidePolygon);
                        }
                    }
                    Err(rejection) => stats.reject( rejection)
                }
            }
            Ok(false) => break,
            Err(e) => {
                if e.is_io_error() {
                    return Err( TerraIndicatorsError::StreamError( format!("{src}: {e}")))
                }
                stats.rows_read += 1;
                stats.reject( RowRejection::MalformedRow);
                warn!("skipping malformed {indicator} row: {e}");
            }
        }
    }

    debug!("reducing {} accepted {indicator} samples", reducer.n_samples());
    let distinct_coordinates = reducer.len();
    let mut points = reducer.into_resolved();
    sort_chronologically( &mut points);
    stats.set_resolved( distinct_coordinates, &points);

    let features = to_feature_collection( &points, indicator);
    stats.log_summary( indicator);

    Ok( Resolution { indicator, target_date: request.target_date, features, stats } )
}
