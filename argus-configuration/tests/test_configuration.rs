// Copyright 2025 The kmesh Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use argus_configuration::{deserialize_yaml, HttpCaptureConfig};
use std::path::PathBuf;

#[test]
fn empty_config() {
    let config: HttpCaptureConfig = deserialize_yaml(&PathBuf::from("tests/capture_empty.yaml")).unwrap();
    assert_eq!(config, HttpCaptureConfig::default());
}

#[test]
fn basic_config() {
    let config: HttpCaptureConfig = deserialize_yaml(&PathBuf::from("tests/capture_basic.yaml")).unwrap();
    assert_eq!(config.request_headers, vec!["accept", "user-agent"]);
    assert_eq!(config.response_headers, vec!["content-type"]);
    assert!(!config.is_library_enabled("wire-h1"));
    assert!(config.is_library_enabled("hyper"));
}

#[test]
fn bad_config() {
    let result: Result<HttpCaptureConfig, _> = deserialize_yaml(&PathBuf::from("tests/capture_bad.yaml"));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("request_headers"));
}

#[test]
fn missing_config_file() {
    let result: Result<HttpCaptureConfig, _> = deserialize_yaml(&PathBuf::from("tests/no_such_file.yaml"));
    assert!(result.is_err());
}
