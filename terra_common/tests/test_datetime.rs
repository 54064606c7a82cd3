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

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use terra_common::datetime::*;

fn utc (y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32)->DateTime<Utc> {
    Utc.with_ymd_and_hms( y, m, d, hh, mm, ss).unwrap()
}

#[test]
fn test_parse_datetime() {
    assert_eq!( parse_datetime("2024-01-09"), Some( utc(2024,1,9, 0,0,0)));
    assert_eq!( parse_datetime(" 2024-01-09 "), Some( utc(2024,1,9, 0,0,0)));
    assert_eq!( parse_datetime("2024-01-09T12:30:00Z"), Some( utc(2024,1,9, 12,30,0)));
    assert_eq!( parse_datetime("2024-01-09T12:30:00+02:00"), Some( utc(2024,1,9, 10,30,0)));
    assert_eq!( parse_datetime("2024-01-09T12:30:00"), Some( utc(2024,1,9, 12,30,0)));
    assert_eq!( parse_datetime("2024-01-09 12:30"), Some( utc(2024,1,9, 12,30,0)));

    let dt = parse_datetime("2024-01-09T12:30:00.250Z").unwrap();
    assert_eq!( dt.timestamp_millis(), utc(2024,1,9, 12,30,0).timestamp_millis() + 250);
}

#[test]
fn test_parse_invalid() {
    assert_eq!( parse_datetime(""), None);
    assert_eq!( parse_datetime("   "), None);
    assert_eq!( parse_datetime("not a date"), None);
    assert_eq!( parse_datetime("2024-13-01"), None);
    assert_eq!( parse_datetime("2024-02-30"), None);
}

#[test]
fn test_abs_millis() {
    let a = utc(2024,1,9, 0,0,0);
    let b = utc(2024,1,10, 0,0,0);
    assert_eq!( abs_millis_between(&a,&b), 86_400_000);
    assert_eq!( abs_millis_between(&b,&a), 86_400_000);
    assert_eq!( abs_millis_between(&a,&a), 0);
}

#[test]
fn test_clocks() {
    let date = utc(2025,10,4, 8,0,0);
    let clock = FixedClock::new(date);
    assert_eq!( clock.now(), date);
    assert_eq!( clock.now(), clock.now());

    let before = Utc::now();
    let now = SystemClock.now();
    assert!( now >= before);
}

#[derive(Serialize)]
struct Stamped {
    #[serde(serialize_with = "ser_short_rfc3339")]
    date: DateTime<Utc>
}

#[test]
fn test_ser_short_rfc3339() {
    let s = serde_json::to_string( &Stamped { date: utc(2025,1,1, 0,0,0) }).unwrap();
    println!("{s}");
    assert_eq!( s, r#"{"date":"2025-01-01T00:00:00Z"}"#);

    // what we write has to parse back
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    let dt = DateTime::parse_from_rfc3339( v["date"].as_str().unwrap()).unwrap();
    assert_eq!( dt.to_utc(), utc(2025,1,1, 0,0,0));
}

#[test]
fn test_naive_date_is_utc_midnight() {
    let nd = chrono::NaiveDate::from_ymd_opt( 2024, 1, 9).unwrap();
    assert_eq!( naive_utc_date_to_utc_datetime(nd), utc(2024,1,9, 0,0,0));
}
