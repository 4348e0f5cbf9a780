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

pub mod hyper_v1;
pub mod wire_h1;

use std::{path::Path, sync::OnceLock};

use argus_configuration::{deserialize_yaml, HttpCaptureConfig};
use argus_error::Context;
use argus_extract::{ExtractorRegistry, RegistryError};
use http::HeaderMap;
use tracing::{info, warn};

/// Registers every built-in adapter the capture configuration leaves
/// enabled. Called once at instrumentation setup.
pub fn register_builtin(registry: &ExtractorRegistry, config: &HttpCaptureConfig) -> Result<(), RegistryError> {
    let key = hyper_v1::library_key();
    if config.is_library_enabled(key.library()) {
        registry.register(key, hyper_v1::HyperAttributes)?;
    }
    let key = wire_h1::library_key();
    if config.is_library_enabled(key.library()) {
        registry.register(key, wire_h1::WireAttributes)?;
    }
    info!("registered {} http client adapters", registry.supported_libraries().len());
    Ok(())
}

/// Loads a capture configuration from a YAML file and registers the enabled
/// adapters in one step.
pub fn setup_from_config(registry: &ExtractorRegistry, path: &Path) -> argus_extract::Result<HttpCaptureConfig> {
    let config: HttpCaptureConfig = deserialize_yaml(path).with_context_msg("failed to load capture config")?;
    register_builtin(registry, &config)?;
    Ok(config)
}

static GLOBAL_REGISTRY: OnceLock<ExtractorRegistry> = OnceLock::new();

/// Process-wide registry carrying the default adapter set.
pub fn global_registry() -> &'static ExtractorRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let registry = ExtractorRegistry::new();
        if let Err(err) = register_builtin(&registry, &HttpCaptureConfig::default()) {
            warn!("built-in adapter registration failed: {err}");
        }
        registry
    })
}

pub(crate) fn header_values(headers: &HeaderMap, name: &str) -> Vec<String> {
    headers.get_all(name).iter().filter_map(|value| value.to_str().ok()).map(str::to_owned).collect()
}
