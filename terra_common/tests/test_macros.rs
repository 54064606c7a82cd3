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

use std::path::PathBuf;
use terra_common::define_cli;

// run with "cargo test --test test_macros -- --nocapture"

define_cli! { ARGS [about="macro test program"] =
    verbose: bool [help="run verbose", short, long],
    date: String [help="target date", short, long, default_value="2024-01-09"],
    polygon: PathBuf [help="pathname of polygon file", short, long]
}

#[test]
fn test_define_cli_long_options() {
    let opts = CliOpts::try_parse_from( ["prog", "--verbose", "--polygon", "area.geojson"]).unwrap();
    assert!( opts.verbose);
    assert_eq!( opts.date, "2024-01-09");
    assert_eq!( opts.polygon, PathBuf::from("area.geojson"));
}

#[test]
fn test_define_cli_short_options() {
    let opts = CliOpts::try_parse_from( ["prog", "-d", "2024-02-01", "-p", "area.geojson"]).unwrap();
    assert!( !opts.verbose);
    assert_eq!( opts.date, "2024-02-01");
    assert_eq!( opts.polygon, PathBuf::from("area.geojson"));
}

#[test]
fn test_define_cli_polygon_is_not_positional() {
    assert!( CliOpts::try_parse_from( ["prog", "area.geojson"]).is_err());
    assert!( CliOpts::try_parse_from( ["prog"]).is_err()); // polygon is required
}
