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

use compact_str::CompactString;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fs::File, path::Path};
use tracing::debug;

/// Capture settings for HTTP client instrumentation.
///
/// Header names are matched by the adapter's own lookup rules (HTTP header
/// names are case-insensitive in every supported library), so entries here
/// can be written in any case.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(deny_unknown_fields, default)]
pub struct HttpCaptureConfig {
    /// Request headers recorded as attributes when a call is intercepted.
    pub request_headers: Vec<CompactString>,
    /// Response headers recorded as attributes when a call completes.
    pub response_headers: Vec<CompactString>,
    /// Library keys whose adapters are skipped at setup time.
    pub disabled_libraries: Vec<CompactString>,
}

impl HttpCaptureConfig {
    pub fn is_library_enabled(&self, library: &str) -> bool {
        !self.disabled_libraries.iter().any(|disabled| disabled == library)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error at `{path}`: {source}")]
    Yaml { path: String, source: serde_yaml::Error },
}

pub fn deserialize_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let file = File::open(path)?;
    let deserializer = serde_yaml::Deserializer::from_reader(file);
    let value = serde_path_to_error::deserialize(deserializer)
        .map_err(|err| ConfigError::Yaml { path: err.path().to_string(), source: err.into_inner() })?;
    debug!("loaded capture configuration from {}", path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_captures_nothing() {
        let config = HttpCaptureConfig::default();
        assert!(config.request_headers.is_empty());
        assert!(config.response_headers.is_empty());
        assert!(config.is_library_enabled("hyper"));
    }

    #[test]
    fn disabled_library_lookup() {
        let config: HttpCaptureConfig = serde_yaml::from_str("disabled_libraries: [wire-h1]").unwrap();
        assert!(!config.is_library_enabled("wire-h1"));
        assert!(config.is_library_enabled("hyper"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<HttpCaptureConfig, _> = serde_yaml::from_str("capture_everything: true");
        assert!(result.is_err());
    }

    #[test]
    fn full_config_round_trips() {
        let config = HttpCaptureConfig {
            request_headers: vec!["accept".into(), "user-agent".into()],
            response_headers: vec!["content-type".into()],
            disabled_libraries: vec![],
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: HttpCaptureConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
