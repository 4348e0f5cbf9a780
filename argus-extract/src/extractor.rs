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

use std::fmt::{self, Display};

use compact_str::CompactString;

/// HTTP/1.x protocol flavor as reported by a request handle.
///
/// The set is deliberately closed: libraries that speak anything else (or
/// cannot report a version at all) surface `None` from
/// [`HttpClientAttributes::flavor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpFlavor {
    Http10,
    Http11,
}

impl HttpFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpFlavor::Http10 => "1.0",
            HttpFlavor::Http11 => "1.1",
        }
    }
}

impl Display for HttpFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-side mapping from a client library's request/response handles to
/// semantic HTTP attributes.
///
/// One implementation exists per supported library and version range; all of
/// them feed the same collection pipeline. Implementations are stateless and
/// never mutate the handles — every operation is a pure read, safe to call
/// concurrently and in any order.
///
/// A field the underlying library does not expose is reported as `None` (or
/// an empty vector for header lookups), never as an error. The response
/// handle is absent for calls that failed before a response was received, so
/// every response-dependent operation takes it as an `Option` or is only
/// invoked once a response exists.
pub trait HttpClientAttributes: Send + Sync {
    type Request;
    type Response;

    /// Raw method token exactly as the library carries it.
    fn method(&self, request: &Self::Request) -> CompactString;

    /// Full or relative request URL, assembled without a URL parser.
    fn url(&self, request: &Self::Request) -> String;

    /// All values of the named request header, empty when absent.
    fn request_header(&self, request: &Self::Request, name: &str) -> Vec<String>;

    fn request_content_length(&self, _request: &Self::Request, _response: Option<&Self::Response>) -> Option<u64> {
        None
    }

    fn request_content_length_uncompressed(
        &self,
        _request: &Self::Request,
        _response: Option<&Self::Response>,
    ) -> Option<u64> {
        None
    }

    /// Numeric status code, `None` when the response carries no status line.
    fn status_code(&self, request: &Self::Request, response: &Self::Response) -> Option<u16>;

    /// Protocol flavor, `None` when the request handle cannot report it.
    fn flavor(&self, _request: &Self::Request, _response: Option<&Self::Response>) -> Option<HttpFlavor> {
        None
    }

    /// All values of the named response header, empty when absent.
    fn response_header(&self, request: &Self::Request, response: &Self::Response, name: &str) -> Vec<String>;

    fn response_content_length(&self, _request: &Self::Request, _response: &Self::Response) -> Option<u64> {
        None
    }

    fn response_content_length_uncompressed(
        &self,
        _request: &Self::Request,
        _response: &Self::Response,
    ) -> Option<u64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavor_strings_follow_semconv() {
        assert_eq!(HttpFlavor::Http10.as_str(), "1.0");
        assert_eq!(HttpFlavor::Http11.to_string(), "1.1");
    }
}
