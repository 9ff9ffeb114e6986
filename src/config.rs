//! Loader configuration.

use crate::encoding::Encoding;

/// How an input file is read before its rows reach the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Field separator, a single byte.
    pub delimiter: u8,

    /// Encodings tried in order; the first one that decodes the whole file is used.
    pub encodings: Vec<Encoding>,
}

impl LoaderConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_encodings(mut self, encodings: impl Into<Vec<Encoding>>) -> Self {
        self.encodings = encodings.into();
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encodings: vec![Encoding::Utf8, Encoding::Latin1],
        }
    }
}
