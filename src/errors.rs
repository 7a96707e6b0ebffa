// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

#[derive(Error, Clone, Debug)]
pub enum Error {
    #[error("Not a valid pairing instantiation: {0}")]
    InvalidParameters(String),
    #[error("Stored field does not decode to a valid element: {0}")]
    MalformedElement(String),
    #[error("Required field is missing from the record: {0}")]
    MissingField(String),
    #[error("Key could not be loaded: {0}")]
    KeyUnavailable(String),
    #[error("I/O failure: {0}")]
    Io(String),
}
