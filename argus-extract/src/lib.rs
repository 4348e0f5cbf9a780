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

pub mod attributes;
pub mod collector;
pub mod extractor;
pub mod registry;
pub mod url;

pub type Error = argus_error::Error;
pub type Result<T> = ::core::result::Result<T, Error>;

pub use extractor::{HttpClientAttributes, HttpFlavor};
pub use registry::{ExtractorRegistry, LibraryKey, RegistryError};
pub use url::{reconstruct_url, HostConfig, Scheme};
