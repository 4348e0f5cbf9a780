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

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;

/// An error wrapped with a human-readable message, keeping the original
/// error reachable through `source()`.
#[derive(Debug)]
pub struct ContextError {
    message: String,
    source: Error,
}

impl Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

pub trait Context<T> {
    fn with_context_msg(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context_msg(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|err| Box::new(ContextError { message: message.into(), source: Box::new(err) }) as Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn context_message_prefixes_source() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        let err = result.with_context_msg("failed to open capture config").unwrap_err();
        assert_eq!(err.to_string(), "failed to open capture config: no such file");
    }

    #[test]
    fn source_chain_is_preserved() {
        let result: std::result::Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::Other, "inner"));
        let err = result.with_context_msg("outer").unwrap_err();
        assert!(err.source().is_some());
    }
}
