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

use std::fs::{self,File};
use std::io::{self,Read,ErrorKind};
use std::path::{Path,PathBuf};

use crate::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn path_to_lossy_string (path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().into_owned()
}

/// open a file that has to exist as a regular file (directories and dangling links are rejected)
pub fn existing_file_from_path <P: AsRef<Path>> (path: P)-> Result<File> {
    let path = path.as_ref();
    if path.is_file() {
        File::open(path)
    } else {
        Err(io_error!(ErrorKind::NotFound, "not a regular file {:?}", path))
    }
}

pub fn file_contents_as_string (file: &mut fs::File) -> Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let mut file = existing_file_from_path(path)?;
    file_contents_as_string( &mut file)
}
