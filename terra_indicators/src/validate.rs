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

//! per-row validation of indicator records.
//!
//! Rows are never errors. Everything that is wrong with a single row turns into a [`RowRejection`] so that
//! the stream can go on and the rejection can be counted.

use std::fmt;
use serde::Serialize;
use csv::StringRecord;
use tracing::{debug,warn};

use terra_common::{datetime::parse_datetime, geo::GeoPoint};
use crate::{IndicatorType, Sample, SampleValue};

pub const LONGITUDE: &str = "longitude";
pub const LATITUDE: &str = "latitude";
pub const DATE: &str = "date";
pub const ID: &str = "id";

/// raw numeric values that mean "no data"
pub const NO_DATA_VALUES: [&str; 3] = ["-", "NULL", "null"];

/// why a row did not make it into the result
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize)]
pub enum RowRejection {
    InvalidCoordinates,
    MissingColumn,
    EmptyValue,
    NoDataValue,
    NonNumericValue,
    ZeroTreeCover,
    InvalidDate,
    MalformedRow,
    OutsidePolygon,
}

impl fmt::Display for RowRejection {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let s = match self {
            RowRejection::InvalidCoordinates => "invalid coordinates",
            RowRejection::MissingColumn => "missing column",
            RowRejection::EmptyValue => "empty value",
            RowRejection::NoDataValue => "no-data value",
            RowRejection::NonNumericValue => "non-numeric value",
            RowRejection::ZeroTreeCover => "zero tree cover",
            RowRejection::InvalidDate => "invalid date",
            RowRejection::MalformedRow => "malformed row",
            RowRejection::OutsidePolygon => "outside polygon",
        };
        f.write_str(s)
    }
}

/// column positions of a CSV header
#[derive(Debug,Clone,PartialEq)]
pub struct RowSchema {
    longitude: Option<usize>,
    latitude: Option<usize>,
    date: Option<usize>,
    id: Option<usize>,
    value: Option<usize>,
    value_column: &'static str,
}

impl RowSchema {
    pub fn from_headers (headers: &StringRecord, indicator: IndicatorType)->Self {
        let value_column = indicator.value_column();
        let pos = |name: &str| headers.iter().position( |h| h.trim() == name);

        RowSchema {
            longitude: pos(LONGITUDE),
            latitude: pos(LATITUDE),
            date: pos(DATE),
            id: pos(ID),
            value: pos(value_column),
            value_column
        }
    }

    /// required columns that are not in the header (id is optional)
    pub fn missing_columns (&self)->Vec<&'static str> {
        let mut missing = Vec::new();
        if self.longitude.is_none() { missing.push(LONGITUDE) }
        if self.latitude.is_none() { missing.push(LATITUDE) }
        if self.date.is_none() { missing.push(DATE) }
        if self.value.is_none() { missing.push(self.value_column) }
        missing
    }

    pub fn record<'a> (&self, rec: &'a StringRecord)->RawRecord<'a> {
        let field = |idx: Option<usize>| idx.and_then( |i| rec.get(i));

        RawRecord {
            longitude: field(self.longitude),
            latitude: field(self.latitude),
            date: field(self.date),
            id: field(self.id),
            value: field(self.value),
        }
    }
}

/// the columns of one row we care about. None means the row does not have this column
#[derive(Debug,Clone,Copy,Default,PartialEq)]
pub struct RawRecord<'a> {
    pub longitude: Option<&'a str>,
    pub latitude: Option<&'a str>,
    pub date: Option<&'a str>,
    pub id: Option<&'a str>,
    pub value: Option<&'a str>,
}

/// check a row and turn it into a [`Sample`] if it is usable for the given indicator.
///
/// Checks are done in this order: coordinates, value, date. Containment is not tested here since it
/// is the most expensive check and only applies to otherwise valid rows.
/// The target date of the request does not affect row validity
pub fn validate (rec: &RawRecord, indicator: IndicatorType)->Result<Sample,RowRejection> {
    let position = parse_position(rec)?;
    let value = parse_value( rec.value, indicator, &position)?;

    let raw_date = rec.date.ok_or( RowRejection::MissingColumn)?;
    let date = parse_datetime( raw_date).ok_or_else( || {
        warn!("invalid date {:?} at {}", raw_date, position);
        RowRejection::InvalidDate
    })?;

    let id = rec.id.filter( |s| !s.is_empty()).map( |s| s.to_string());

    Ok( Sample { id, date, raw_date: raw_date.to_string(), position, value } )
}

fn parse_position (rec: &RawRecord)->Result<GeoPoint,RowRejection> {
    let lon = parse_finite( rec.longitude);
    let lat = parse_finite( rec.latitude);

    match (lon,lat) {
        (Some(lon),Some(lat)) => Ok( GeoPoint::from_lon_lat_degrees( lon, lat)),
        _ => {
            debug!("invalid coordinates {:?},{:?}", rec.longitude, rec.latitude);
            Err( RowRejection::InvalidCoordinates)
        }
    }
}

fn parse_finite (s: Option<&str>)->Option<f64> {
    s.and_then( |s| s.trim().parse::<f64>().ok()).filter( |v| v.is_finite())
}

fn parse_value (raw: Option<&str>, indicator: IndicatorType, position: &GeoPoint)->Result<SampleValue,RowRejection> {
    let raw = raw.ok_or( RowRejection::MissingColumn)?;

    if indicator.is_categorical() {
        if raw.trim().is_empty() {
            debug!("empty {} value at {}", indicator, position);
            Err( RowRejection::EmptyValue)
        } else {
            Ok( SampleValue::Category( raw.to_string()))
        }

    } else {
        let s = raw.trim();
        if s.is_empty() {
            debug!("empty {} value at {}", indicator, position);
            return Err( RowRejection::EmptyValue)
        }
        if NO_DATA_VALUES.contains(&s) {
            debug!("no-data {} value {:?} at {}", indicator, s, position);
            return Err( RowRejection::NoDataValue)
        }

        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                if v == 0.0 && indicator.rejects_zero() {
                    warn!("ignoring zero {} value at {}", indicator, position);
                    Err( RowRejection::ZeroTreeCover)
                } else {
                    Ok( SampleValue::Numeric(v))
                }
            }
            _ => {
                warn!("invalid {} value {:?} at {}", indicator, raw, position);
                Err( RowRejection::NonNumericValue)
            }
        }
    }
}
