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

use std::fmt;
use std::sync::Arc;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serializer;

/* #region clocks ***********************************************************************************************/

/// the source of "now". Everything that would otherwise call `Utc::now()` directly should get a `Clock` so that
/// tests (and replays) can run with a fixed instant
pub trait Clock: Send + Sync + fmt::Debug {
    fn now (&self)->DateTime<Utc>;
}

/// wall clock
#[derive(Debug,Clone,Copy,Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now (&self)->DateTime<Utc> { Utc::now() }
}

/// a clock that is stopped at a given instant
#[derive(Debug,Clone,Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new (date: DateTime<Utc>)->Self { FixedClock(date) }
}

impl Clock for FixedClock {
    fn now (&self)->DateTime<Utc> { self.0 }
}

pub fn system_clock ()->Arc<dyn Clock> { Arc::new(SystemClock) }

/* #endregion clocks */

/// absolute distance between two instants in milliseconds
#[inline]
pub fn abs_millis_between (a: &DateTime<Utc>, b: &DateTime<Utc>)->i64 {
    (*a - *b).num_milliseconds().abs()
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    nd.and_time(NaiveTime::MIN).and_utc()
}

//--- support for serde

pub fn ser_short_rfc3339<S: Serializer> (dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{}", dt.format("%Y-%m-%dT%H:%M:%SZ"));
    s.serialize_str(&dfm)
}

//--- misc string format parsing

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// parse ISO-8601 style date/time specs into a DateTime<Utc>
/// 
/// Accepted are (in this order):
///   - RFC 3339 / ISO 8601 with offset or 'Z' (e.g. "2024-01-09T12:00:00+02:00")
///   - date and time without offset, 'T' or space separated, optional fractional seconds - interpreted as UTC
///   - plain dates "YYYY-MM-DD" - UTC midnight
/// 
/// Leading/trailing whitespace is ignored. Returns None for anything else
pub fn parse_datetime (s: &str)->Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() { return None }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.to_utc())
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%+") {
        return Some(dt.to_utc())
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc())
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(naive_utc_date_to_utc_datetime)
}
