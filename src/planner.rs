use crate::{graph::Graph, path, path::Route, search};

/// Fastest route between two named stations.
///
/// Unknown stations and unreachable destinations both give [`Route::none`].
pub fn find_shortest_path(graph: &Graph, start: &str, end: &str) -> Route {
    if !graph.contains(end) {
        return Route::none();
    }

    match search::shortest_paths(graph, start) {
        Ok(paths) => path::reconstruct(graph, &paths, end),
        Err(error) => {
            tracing::debug!(%error, "query is unanswerable");
            Route::none()
        }
    }
}
