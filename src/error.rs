use std::{io, path::PathBuf};

use thiserror::Error;

use crate::encoding::Encoding;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No such file {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("Could not decode {path:?} with any of {tried:?}")]
    DataUnreadable { path: PathBuf, tried: Vec<Encoding> },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed query list: {0}")]
    Query(#[from] csv::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No such Station {name:?} in the graph")]
    UnknownStation { name: String },
}
