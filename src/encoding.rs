use std::{fmt, str};

/// A text decoding attempted on the raw bytes of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Strict UTF-8, fails on any invalid sequence.
    Utf8,
    /// ISO-8859-1, maps every byte to the code point of the same value and never fails.
    Latin1,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => str::from_utf8(bytes).ok().map(str::to_owned),
            Encoding::Latin1 => Some(bytes.iter().copied().map(char::from).collect()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes `bytes` with the first encoding in `encodings` that accepts them.
pub fn decode_first(bytes: &[u8], encodings: &[Encoding]) -> Option<(Encoding, String)> {
    encodings.iter().find_map(|&encoding| {
        let text = encoding.decode(bytes);
        if text.is_none() {
            tracing::warn!(%encoding, "failed to decode, trying next encoding");
        }
        text.map(|text| (encoding, text))
    })
}
