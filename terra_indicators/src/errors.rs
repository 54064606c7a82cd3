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

use thiserror::Error;
use terra_common::errors::TerraCommonError;

pub type Result<T> = std::result::Result<T, TerraIndicatorsError>;

#[derive(Error,Debug)]
pub enum TerraIndicatorsError {

    //--- request errors (nothing streamed yet)

    #[error("unknown indicator type: {0}")]
    UnknownIndicator(String),

    #[error("no data source for indicator {0}")]
    MissingSource(String),

    #[error("invalid target date: {0:?}")]
    InvalidTargetDate(String),

    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("cannot open data source {path}: {source}")]
    SourceUnreadable { path: String, source: std::io::Error },

    //--- stream errors (backing store failed while reading)

    #[error("stream error: {0}")]
    StreamError(String),

    //--- others

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("task error: {0}")]
    TaskError( #[from] tokio::task::JoinError),

    #[error("operation failed: {0}")]
    OpFailed(String),
}

impl TerraIndicatorsError {
    /// bad input, detected before any row was read
    pub fn is_request_error (&self)->bool {
        use TerraIndicatorsError::*;
        matches!( self, UnknownIndicator(_) | MissingSource(_) | InvalidTargetDate(_) | InvalidPolygon(_) | SourceUnreadable{..})
    }

    /// backing store became unavailable while streaming
    pub fn is_stream_error (&self)->bool {
        matches!( self, TerraIndicatorsError::StreamError(_))
    }
}

impl From<TerraCommonError> for TerraIndicatorsError {
    fn from (e: TerraCommonError)->Self {
        match e {
            TerraCommonError::ConfigFileNotFound(_) | TerraCommonError::ConfigParseError(_) => TerraIndicatorsError::ConfigError( e.to_string()),
            TerraCommonError::UnsupportedGeometry(_) | TerraCommonError::GeoJsonError(_) => TerraIndicatorsError::InvalidPolygon( e.to_string()),
            TerraCommonError::JsonError(e) => TerraIndicatorsError::JsonError(e),
            other => TerraIndicatorsError::OpFailed( other.to_string())
        }
    }
}

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        TerraIndicatorsError::OpFailed( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
