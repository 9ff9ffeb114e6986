use itertools::Itertools;

use crate::{graph::Graph, record::Distance, search::ShortestPaths};

/// An ordered stop sequence from source to destination and its total travel time.
///
/// An empty route with zero cost means no path exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub stations: Vec<String>,
    pub total: Distance,
}

impl Route {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        !self.stations.is_empty()
    }

    pub fn stop_count(&self) -> usize {
        self.stations.len()
    }

    /// Sum of the graph's edge weights along the route, `None` if a hop is not an edge.
    pub fn edge_sum(&self, graph: &Graph) -> Option<Distance> {
        self.stations
            .iter()
            .tuple_windows()
            .map(|(from, to)| graph.weight(from, to).map(Distance::from))
            .sum()
    }
}

/// Walks predecessor links back from `destination` to the source of `paths`.
///
/// Tables computed for a different graph give [`Route::none`].
pub fn reconstruct(graph: &Graph, paths: &ShortestPaths, destination: &str) -> Route {
    if paths.len() != graph.station_count() {
        return Route::none();
    }
    let Some(destination) = graph.id(destination) else {
        return Route::none();
    };
    let Some(total) = paths.distance(destination) else {
        return Route::none();
    };

    let mut chain = vec![destination];
    let mut current = destination;

    while current != paths.source() {
        // A consistent chain visits each station at most once.
        if chain.len() > graph.station_count() {
            return Route::none();
        }
        let Some(previous) = paths.predecessor(current) else {
            return Route::none();
        };
        chain.push(previous);
        current = previous;
    }

    let stations = chain
        .into_iter()
        .rev()
        .map(|id| graph.name(id).map(str::to_owned))
        .collect::<Option<Vec<_>>>();

    match stations {
        Some(stations) => Route { stations, total },
        None => Route::none(),
    }
}
