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

/// A protocol scheme together with its registered default port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    pub name: CompactString,
    pub default_port: u16,
}

impl Scheme {
    pub fn http() -> Self {
        Scheme { name: CompactString::const_new("http"), default_port: 80 }
    }

    pub fn https() -> Self {
        Scheme { name: CompactString::const_new("https"), default_port: 443 }
    }
}

/// Scheme/host/port bundle a client library keeps separate from the request
/// line. Libraries that only ever see a relative path have no host
/// configuration at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub scheme: Option<Scheme>,
    pub host: CompactString,
    pub port: u16,
}

/// Assembles the request URL by plain concatenation, mirroring what the
/// client library itself would send, instead of building a structured URL
/// value and serializing it back (which re-normalizes and allocates twice).
///
/// Without a host configuration, or with one that carries no scheme, the
/// result is the relative form. The port is printed only when it differs
/// from the scheme's registered default. A `Some("")` query keeps its bare
/// `?` — the distinction between an absent and an empty query is the
/// library's, not ours to collapse.
pub fn reconstruct_url(host: Option<&HostConfig>, path: &str, query: Option<&str>) -> String {
    let Some(config) = host else {
        return relative_url(path, query);
    };
    let Some(scheme) = config.scheme.as_ref() else {
        return relative_url(path, query);
    };

    let mut buffer = itoa::Buffer::new();
    let port = if config.port == scheme.default_port { "" } else { buffer.format(config.port) };

    let mut url = String::with_capacity(
        scheme.name.len()
            + 3
            + config.host.len()
            + if port.is_empty() { 0 } else { port.len() + 1 }
            + path.len()
            + query.map_or(0, |q| q.len() + 1),
    );
    url.push_str(&scheme.name);
    url.push_str("://");
    url.push_str(&config.host);
    if !port.is_empty() {
        url.push(':');
        url.push_str(port);
    }
    url.push_str(path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}

fn relative_url(path: &str, query: Option<&str>) -> String {
    match query {
        None => path.to_owned(),
        Some(query) => {
            let mut url = String::with_capacity(path.len() + query.len() + 1);
            url.push_str(path);
            url.push('?');
            url.push_str(query);
            url
        },
    }
}
