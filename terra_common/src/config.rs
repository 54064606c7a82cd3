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

//! RON configuration lookup.
//!
//! Config files are either given by explicit pathname ([`load_config`]) or looked up by id in the local
//! config dir ([`config_from_local_file`]), which is `$TERRA_LOCAL/config/<id>.ron` or `./local/config/<id>.ron`
//! if `TERRA_LOCAL` is not set.

use std::path::{Path,PathBuf};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{Result,TerraCommonError};
use crate::fs::{filepath_contents_as_string, path_to_lossy_string};

pub const LOCAL_ENV_VAR: &str = "TERRA_LOCAL";

/// load a RON config from an explicit pathname
pub fn load_config <C: DeserializeOwned> (pathname: impl AsRef<Path>)->Result<C> {
    let path = pathname.as_ref();
    if path.is_file() {
        debug!("loading config {:?}", path);
        let contents = filepath_contents_as_string( &path)?;
        config_from_str( &contents)
    } else {
        Err( TerraCommonError::ConfigFileNotFound( path_to_lossy_string(path)) )
    }
}

/// RON config lookup through TERRA_LOCAL env var or ./local directory as a fallback. The config pathname is constructed
/// from «local-root»/config/«id».ron
pub fn config_from_local_file <C: DeserializeOwned> (id: &str)->Result<C> {
    load_config( local_config_path(id))
}

pub fn config_from_str <C: DeserializeOwned> (input: &str)->Result<C> {
    ron::from_str::<C>(input).map_err(|e| TerraCommonError::ConfigParseError(format!("{e}")))
}

pub fn local_config_path (id: &str)->PathBuf {
    let mut path = PathBuf::from( get_local_dir());
    path.push("config");
    path.push( format!("{id}.ron"));
    path
}

fn get_local_dir ()->String { 
    match std::env::var(LOCAL_ENV_VAR) {
        Ok(local_root) if !local_root.is_empty() => local_root,
        _ => "./local".to_string()
    }
}
