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

use std::{
    any::Any,
    collections::HashMap,
    fmt::{self, Display},
    sync::{Arc, RwLock},
};

use compact_str::CompactString;
use tracing::debug;

use crate::extractor::HttpClientAttributes;

/// Identity of a supported client library: name plus the version range the
/// adapter was written against, e.g. `hyper/1.x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryKey(pub CompactString, pub CompactString);

impl LibraryKey {
    pub fn new(library: impl Into<CompactString>, versions: impl Into<CompactString>) -> Self {
        LibraryKey(library.into(), versions.into())
    }

    pub fn library(&self) -> &str {
        &self.0
    }
}

impl Display for LibraryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("adapter for `{0}` is already registered")]
    AlreadyRegistered(LibraryKey),
    #[error("no adapter registered for `{0}`")]
    NotRegistered(LibraryKey),
    #[error("extractor registry lock poisoned")]
    Poisoned,
}

/// Lookup table from library identity to its attribute extractor.
///
/// Adapters register here once at setup; the instrumenter resolves the
/// extractor for an intercepted library a single time and reuses it for
/// every call. Entries are stored type-erased because each adapter has its
/// own request/response handle types; `resolve` downcasts back to the
/// concrete extractor.
pub struct ExtractorRegistry {
    adapters: RwLock<HashMap<LibraryKey, Arc<dyn Any + Send + Sync>>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self { adapters: RwLock::new(HashMap::new()) }
    }

    pub fn register<A>(&self, key: LibraryKey, extractor: A) -> Result<(), RegistryError>
    where
        A: HttpClientAttributes + 'static,
    {
        let mut adapters = self.adapters.write().map_err(|_| RegistryError::Poisoned)?;
        if adapters.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered(key));
        }
        adapters.insert(key.clone(), Arc::new(extractor));
        debug!("registered http client adapter for {key}");
        Ok(())
    }

    pub fn resolve<A>(&self, key: &LibraryKey) -> Option<Arc<A>>
    where
        A: HttpClientAttributes + 'static,
    {
        let adapters = self.adapters.read().ok()?;
        adapters.get(key).cloned().and_then(|extractor| extractor.downcast::<A>().ok())
    }

    pub fn is_supported(&self, key: &LibraryKey) -> bool {
        self.adapters.read().map(|adapters| adapters.contains_key(key)).unwrap_or(false)
    }

    pub fn unregister(&self, key: &LibraryKey) -> Result<(), RegistryError> {
        let mut adapters = self.adapters.write().map_err(|_| RegistryError::Poisoned)?;
        if adapters.remove(key).is_none() {
            return Err(RegistryError::NotRegistered(key.clone()));
        }
        debug!("unregistered http client adapter for {key}");
        Ok(())
    }

    pub fn supported_libraries(&self) -> Vec<LibraryKey> {
        let mut keys: Vec<LibraryKey> =
            self.adapters.read().map(|adapters| adapters.keys().cloned().collect()).unwrap_or_default();
        keys.sort();
        keys
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    struct NullExtractor;

    impl HttpClientAttributes for NullExtractor {
        type Request = ();
        type Response = ();

        fn method(&self, _request: &()) -> CompactString {
            CompactString::const_new("GET")
        }

        fn url(&self, _request: &()) -> String {
            "/".to_owned()
        }

        fn request_header(&self, _request: &(), _name: &str) -> Vec<String> {
            Vec::new()
        }

        fn status_code(&self, _request: &(), _response: &()) -> Option<u16> {
            None
        }

        fn response_header(&self, _request: &(), _response: &(), _name: &str) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn empty_registry() {
        let registry = ExtractorRegistry::new();
        assert!(registry.supported_libraries().is_empty());
        assert!(!registry.is_supported(&LibraryKey::new("hyper", "1.x")));
    }

    #[test]
    fn register_and_resolve() {
        let registry = ExtractorRegistry::new();
        registry.register(LibraryKey::new("null", "0.x"), NullExtractor).unwrap();

        let extractor = registry.resolve::<NullExtractor>(&LibraryKey::new("null", "0.x")).unwrap();
        assert_eq!(extractor.method(&()), "GET");
    }

    #[test]
    fn resolve_with_wrong_type_is_none() {
        struct OtherExtractor;
        impl HttpClientAttributes for OtherExtractor {
            type Request = ();
            type Response = ();
            fn method(&self, _request: &()) -> CompactString {
                CompactString::const_new("PUT")
            }
            fn url(&self, _request: &()) -> String {
                String::new()
            }
            fn request_header(&self, _request: &(), _name: &str) -> Vec<String> {
                Vec::new()
            }
            fn status_code(&self, _request: &(), _response: &()) -> Option<u16> {
                None
            }
            fn response_header(&self, _request: &(), _response: &(), _name: &str) -> Vec<String> {
                Vec::new()
            }
        }

        let registry = ExtractorRegistry::new();
        registry.register(LibraryKey::new("null", "0.x"), NullExtractor).unwrap();
        assert!(registry.resolve::<OtherExtractor>(&LibraryKey::new("null", "0.x")).is_none());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = ExtractorRegistry::new();
        registry.register(LibraryKey::new("null", "0.x"), NullExtractor).unwrap();
        let err = registry.register(LibraryKey::new("null", "0.x"), NullExtractor).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn unregister_removes_the_adapter() {
        let registry = ExtractorRegistry::new();
        let key = LibraryKey::new("null", "0.x");
        registry.register(key.clone(), NullExtractor).unwrap();
        assert!(registry.is_supported(&key));

        registry.unregister(&key).unwrap();
        assert!(!registry.is_supported(&key));
        assert!(registry.unregister(&key).is_err());
    }

    #[test]
    fn supported_libraries_are_sorted() {
        let registry = ExtractorRegistry::new();
        registry.register(LibraryKey::new("wire-h1", "1.x"), NullExtractor).unwrap();
        registry.register(LibraryKey::new("hyper", "1.x"), NullExtractor).unwrap();

        let keys = registry.supported_libraries();
        assert_eq!(keys, vec![LibraryKey::new("hyper", "1.x"), LibraryKey::new("wire-h1", "1.x")]);
    }

    #[test]
    fn registration_is_thread_safe() {
        use std::thread;

        let registry = Arc::new(ExtractorRegistry::new());
        let mut handles = vec![];

        for i in 0..10 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                let key = LibraryKey::new(format!("lib-{i}"), "1.x");
                registry.register(key.clone(), NullExtractor).unwrap();
                assert!(registry.is_supported(&key));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.supported_libraries().len(), 10);
    }
}
