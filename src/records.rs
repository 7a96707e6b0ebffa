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

use std::fs;
use std::path::Path;

use crate::errors::Error;

/// A flat `key=value` property record, one field per line.
///
/// Group elements and raw byte fields are stored hex-encoded so the record
/// stays printable; the encoding is reversible byte-for-byte. Blank lines and
/// `#` comments are ignored when parsing; a line without `=` is rejected.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PropertySet {
    entries: Vec<(String, String)>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn set_text(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
    }

    pub fn set_bytes(&mut self, key: &str, value: &[u8]) {
        self.set_text(key, &hex::encode(value));
    }

    pub fn get_text(&self, key: &str) -> Result<&str, Error> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| Error::MissingField(key.to_owned()))
    }

    pub fn get_bytes(&self, key: &str) -> Result<Vec<u8>, Error> {
        hex::decode(self.get_text(key)?).map_err(|_| Error::MalformedElement(key.to_owned()))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut entries = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| Error::MalformedElement(format!("property line: {line}")))?;
            entries.push((key.trim().to_owned(), value.trim().to_owned()));
        }
        Ok(Self { entries })
    }

    /// Writes the record in one shot: the full text is rendered first, so a
    /// failed store never leaves a half-written record behind.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        Self::parse(&text)
    }
}
