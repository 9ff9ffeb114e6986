//! Reading a connection file from disk into a [`Graph`].

use std::{
    fs,
    io::{self, Cursor},
    path::Path,
};

use csv::{ReaderBuilder, StringRecord};

use crate::{
    config::LoaderConfig,
    encoding::decode_first,
    error::LoadError,
    graph::Graph,
    record,
};

/// Reads `path` and builds the graph from every valid row.
///
/// An input without any valid row yields an empty graph rather than an error.
pub fn build_graph(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let rows = read_rows(path, config)?;
    let graph: Graph = record::connections(rows).collect();

    if graph.is_empty() {
        tracing::warn!(?path, "graph is empty after processing data");
    } else {
        tracing::info!(
            stations = graph.station_count(),
            connections = graph.connection_count(),
            edges = graph.edge_count(),
            "graph built"
        );
    }

    Ok(graph)
}

/// Decodes the whole file with the first workable encoding and splits it into rows.
pub fn read_rows(path: &Path, config: &LoaderConfig) -> Result<Vec<StringRecord>, LoadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_owned(),
        },
        _ => LoadError::Io {
            path: path.to_owned(),
            source,
        },
    })?;

    let (encoding, text) =
        decode_first(&bytes, &config.encodings).ok_or_else(|| LoadError::DataUnreadable {
            path: path.to_owned(),
            tried: config.encodings.clone(),
        })?;
    tracing::info!(?path, %encoding, "reading connections");

    let rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter)
        .from_reader(Cursor::new(text))
        .into_records()
        .filter_map(|row| {
            row.map_err(|error| tracing::warn!(%error, "skipping unreadable row"))
                .ok()
        })
        .collect();

    Ok(rows)
}
