// SPDX-FileCopyrightText: © 2025 kmesh authors
// SPDX-License-Identifier: Apache-2.0
//
// Copyright 2025 kmesh authors
//
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

pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
pub const HTTP_FLAVOR: &str = "http.flavor";
pub const HTTP_REQUEST_CONTENT_LENGTH: &str = "http.request_content_length";
pub const HTTP_REQUEST_CONTENT_LENGTH_UNCOMPRESSED: &str = "http.request_content_length_uncompressed";
pub const HTTP_RESPONSE_CONTENT_LENGTH: &str = "http.response_content_length";
pub const HTTP_RESPONSE_CONTENT_LENGTH_UNCOMPRESSED: &str = "http.response_content_length_uncompressed";
pub const URL_FULL: &str = "url.full";

const HTTP_REQUEST_HEADER_PREFIX: &str = "http.request.header.";
const HTTP_RESPONSE_HEADER_PREFIX: &str = "http.response.header.";

/// Attribute key for a captured request header, `http.request.header.<name>`
/// with the name lowercased and dashes folded to underscores.
pub fn request_header_key(name: &str) -> String {
    header_key(HTTP_REQUEST_HEADER_PREFIX, name)
}

/// Attribute key for a captured response header, `http.response.header.<name>`.
pub fn response_header_key(name: &str) -> String {
    header_key(HTTP_RESPONSE_HEADER_PREFIX, name)
}

fn header_key(prefix: &str, name: &str) -> String {
    let mut key = String::with_capacity(prefix.len() + name.len());
    key.push_str(prefix);
    for c in name.chars() {
        match c {
            '-' => key.push('_'),
            _ => key.extend(c.to_lowercase()),
        }
    }
    key
}
