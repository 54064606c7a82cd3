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

use std::{collections::HashMap, path::PathBuf};
use serde::{Serialize,Deserialize};
use terra_common::{config::*, define_serde_struct, errors::TerraCommonError};

define_serde_struct! {
    TestConfig : Debug, PartialEq =
        data_dir: PathBuf,
        files: HashMap<String,String> [default],
        retries: u32 [default]
}

#[test]
fn test_config_from_str() {
    let input = r#"
        TestConfig(
            data_dir: "datas",
            files: { "LST": "lst.csv" },
        )
    "#;

    let config: TestConfig = config_from_str(input).unwrap();
    println!("config: {config:?}");

    assert_eq!( config.data_dir, PathBuf::from("datas"));
    assert_eq!( config.files.get("LST").map(|s| s.as_str()), Some("lst.csv"));
    assert_eq!( config.retries, 0);
}

#[test]
fn test_config_errors() {
    let res: Result<TestConfig,_> = config_from_str("TestConfig( data_dir: 42 )");
    assert!( matches!( res, Err(TerraCommonError::ConfigParseError(_))));

    let res: Result<TestConfig,_> = load_config("tests/no_such_config.ron");
    assert!( matches!( res, Err(TerraCommonError::ConfigFileNotFound(_))));
}

#[test]
fn test_local_config_path() {
    let path = local_config_path("indicators");
    assert!( path.ends_with("config/indicators.ron"));
}
