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

use argus_extract::{reconstruct_url, HostConfig, HttpClientAttributes, HttpFlavor, LibraryKey, Scheme};
use compact_str::{CompactString, ToCompactString};
use http::{header, request, response, HeaderMap, Version};

use crate::header_values;

pub const LIBRARY: &str = "hyper";
pub const VERSIONS: &str = "1.x";

pub fn library_key() -> LibraryKey {
    LibraryKey::new(LIBRARY, VERSIONS)
}

/// Attribute extractor for clients built on the `http` crate types (hyper
/// 1.x and the stacks layered on it). The interception shim hands over the
/// body-less halves of the exchange, so handles here are `Parts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HyperAttributes;

impl HttpClientAttributes for HyperAttributes {
    type Request = request::Parts;
    type Response = response::Parts;

    fn method(&self, request: &request::Parts) -> CompactString {
        request.method.as_str().to_compact_string()
    }

    fn url(&self, request: &request::Parts) -> String {
        let uri = &request.uri;
        let host = uri.authority().map(|authority| {
            let scheme = uri.scheme().map(scheme_of);
            let port = authority.port_u16().unwrap_or_else(|| scheme.as_ref().map_or(0, |s| s.default_port));
            HostConfig { scheme, host: authority.host().into(), port }
        });
        reconstruct_url(host.as_ref(), uri.path(), uri.query())
    }

    fn request_header(&self, request: &request::Parts, name: &str) -> Vec<String> {
        header_values(&request.headers, name)
    }

    fn request_content_length(&self, request: &request::Parts, _response: Option<&response::Parts>) -> Option<u64> {
        content_length(&request.headers)
    }

    fn status_code(&self, _request: &request::Parts, response: &response::Parts) -> Option<u16> {
        Some(response.status.as_u16())
    }

    fn flavor(&self, request: &request::Parts, _response: Option<&response::Parts>) -> Option<HttpFlavor> {
        match request.version {
            Version::HTTP_10 => Some(HttpFlavor::Http10),
            Version::HTTP_11 => Some(HttpFlavor::Http11),
            _ => None,
        }
    }

    fn response_header(&self, _request: &request::Parts, response: &response::Parts, name: &str) -> Vec<String> {
        header_values(&response.headers, name)
    }

    fn response_content_length(&self, _request: &request::Parts, response: &response::Parts) -> Option<u64> {
        content_length(&response.headers)
    }
}

fn scheme_of(scheme: &http::uri::Scheme) -> Scheme {
    if *scheme == http::uri::Scheme::HTTP {
        Scheme::http()
    } else if *scheme == http::uri::Scheme::HTTPS {
        Scheme::https()
    } else {
        // no registered default, so any explicit port stays visible
        Scheme { name: scheme.as_str().into(), default_port: 0 }
    }
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers.get(header::CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}
