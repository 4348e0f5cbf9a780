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

use argus_extract::{reconstruct_url, HostConfig, HttpClientAttributes, HttpFlavor, LibraryKey};
use compact_str::CompactString;
use http::HeaderMap;

use crate::header_values;

pub const LIBRARY: &str = "wire-h1";
pub const VERSIONS: &str = "1.x";

pub fn library_key() -> LibraryKey {
    LibraryKey::new(LIBRARY, VERSIONS)
}

/// Outgoing call as seen at the connection-pool layer: the request line is
/// held apart from the host configuration the pool dialed, and the URL has
/// to be put back together from the pieces.
#[derive(Debug, Clone)]
pub struct WireRequest {
    method: CompactString,
    path: String,
    query: Option<String>,
    host: Option<HostConfig>,
    headers: HeaderMap,
    framing: Framing,
}

/// What the shim learned about the request framing. Only requests that went
/// through the pool's own h1 framer carry the 1.1-vs-1.0 bit; replayed or
/// hand-rolled requests are opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    Framed { http11: bool },
    Opaque,
}

impl WireRequest {
    pub fn new(method: impl Into<CompactString>, path: impl Into<String>) -> Self {
        WireRequest {
            method: method.into(),
            path: path.into(),
            query: None,
            host: None,
            headers: HeaderMap::new(),
            framing: Framing::Opaque,
        }
    }

    /// Query string exactly as the library holds it — an empty string is a
    /// present query, not a missing one.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_host(mut self, host: HostConfig) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

/// Reply as seen at the pool layer. A call that died before the status line
/// arrived has no status at all.
#[derive(Debug, Clone, Default)]
pub struct WireResponse {
    status: Option<StatusLine>,
    headers: HeaderMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u16,
}

impl WireResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, code: u16) -> Self {
        self.status = Some(StatusLine { code });
        self
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

/// Attribute extractor for wire-level HTTP/1.x pool clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireAttributes;

impl HttpClientAttributes for WireAttributes {
    type Request = WireRequest;
    type Response = WireResponse;

    fn method(&self, request: &WireRequest) -> CompactString {
        request.method.clone()
    }

    fn url(&self, request: &WireRequest) -> String {
        reconstruct_url(request.host.as_ref(), &request.path, request.query.as_deref())
    }

    fn request_header(&self, request: &WireRequest, name: &str) -> Vec<String> {
        header_values(&request.headers, name)
    }

    fn status_code(&self, _request: &WireRequest, response: &WireResponse) -> Option<u16> {
        response.status.map(|line| line.code)
    }

    fn flavor(&self, request: &WireRequest, _response: Option<&WireResponse>) -> Option<HttpFlavor> {
        match request.framing {
            Framing::Framed { http11: true } => Some(HttpFlavor::Http11),
            Framing::Framed { http11: false } => Some(HttpFlavor::Http10),
            Framing::Opaque => None,
        }
    }

    fn response_header(&self, _request: &WireRequest, response: &WireResponse, name: &str) -> Vec<String> {
        header_values(&response.headers, name)
    }
}
