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

use argus_configuration::HttpCaptureConfig;
use opentelemetry::{Array, KeyValue, StringValue, Value};

use crate::{attributes::*, extractor::HttpClientAttributes};

/// Request-side attributes, captured immediately before the intercepted call
/// is dispatched. The response side is passed as absent so adapters whose
/// content-length accessors live on the exchange can still degrade cleanly.
pub fn on_start<A>(extractor: &A, config: &HttpCaptureConfig, request: &A::Request) -> Vec<KeyValue>
where
    A: HttpClientAttributes,
{
    let mut attributes = Vec::with_capacity(4 + config.request_headers.len());
    attributes.push(KeyValue::new(HTTP_REQUEST_METHOD, extractor.method(request).to_string()));
    attributes.push(KeyValue::new(URL_FULL, extractor.url(request)));

    if let Some(length) = extractor.request_content_length(request, None) {
        attributes.push(KeyValue::new(HTTP_REQUEST_CONTENT_LENGTH, clamp_to_i64(length)));
    }
    if let Some(length) = extractor.request_content_length_uncompressed(request, None) {
        attributes.push(KeyValue::new(HTTP_REQUEST_CONTENT_LENGTH_UNCOMPRESSED, clamp_to_i64(length)));
    }

    for name in &config.request_headers {
        let values = extractor.request_header(request, name);
        if !values.is_empty() {
            attributes.push(KeyValue::new(request_header_key(name), header_value(values)));
        }
    }

    attributes
}

/// Response-side attributes, captured after the call completed or failed.
/// With no response every response-dependent attribute is simply absent.
pub fn on_end<A>(
    extractor: &A,
    config: &HttpCaptureConfig,
    request: &A::Request,
    response: Option<&A::Response>,
) -> Vec<KeyValue>
where
    A: HttpClientAttributes,
{
    let mut attributes = Vec::new();

    if let Some(flavor) = extractor.flavor(request, response) {
        attributes.push(KeyValue::new(HTTP_FLAVOR, flavor.as_str()));
    }

    let Some(response) = response else {
        return attributes;
    };

    if let Some(code) = extractor.status_code(request, response) {
        attributes.push(KeyValue::new(HTTP_RESPONSE_STATUS_CODE, i64::from(code)));
    }
    if let Some(length) = extractor.response_content_length(request, response) {
        attributes.push(KeyValue::new(HTTP_RESPONSE_CONTENT_LENGTH, clamp_to_i64(length)));
    }
    if let Some(length) = extractor.response_content_length_uncompressed(request, response) {
        attributes.push(KeyValue::new(HTTP_RESPONSE_CONTENT_LENGTH_UNCOMPRESSED, clamp_to_i64(length)));
    }

    for name in &config.response_headers {
        let values = extractor.response_header(request, response, name);
        if !values.is_empty() {
            attributes.push(KeyValue::new(response_header_key(name), header_value(values)));
        }
    }

    attributes
}

fn header_value(values: Vec<String>) -> Value {
    Value::Array(Array::String(values.into_iter().map(StringValue::from).collect()))
}

fn clamp_to_i64(length: u64) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}
