use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    error::SearchError,
    graph::{Graph, StationId},
    record::Distance,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct State {
    cost: Distance,
    station: StationId,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distance and predecessor tables for a single source.
///
/// `None` in `distances` stands for an unreachable station. Owned by one query and
/// dropped with it; the graph itself is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub(crate) source: StationId,
    pub(crate) distances: Vec<Option<Distance>>,
    pub(crate) predecessors: Vec<Option<StationId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Number of stations the tables were computed for.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance(&self, station: StationId) -> Option<Distance> {
        self.distances.get(station).copied().flatten()
    }

    pub fn predecessor(&self, station: StationId) -> Option<StationId> {
        self.predecessors.get(station).copied().flatten()
    }

    pub fn is_reachable(&self, station: StationId) -> bool {
        self.distance(station).is_some()
    }
}

/// Dijkstra's algorithm from `source` over the whole graph.
///
/// The heap has no decrease-key, so improved stations are pushed again and the
/// outdated entries are discarded when popped.
pub fn shortest_paths(graph: &Graph, source: &str) -> Result<ShortestPaths, SearchError> {
    let source = graph.id(source).ok_or_else(|| SearchError::UnknownStation {
        name: source.trim().to_owned(),
    })?;

    let mut distances: Vec<Option<Distance>> = vec![None; graph.station_count()];
    let mut predecessors: Vec<Option<StationId>> = vec![None; graph.station_count()];
    let mut heap = BinaryHeap::new();

    distances[source] = Some(0);
    heap.push(State {
        cost: 0,
        station: source,
    });

    let mut settled = 0usize;
    let mut stale = 0usize;

    while let Some(State { cost, station }) = heap.pop() {
        if distances[station].is_some_and(|best| cost > best) {
            stale += 1;
            continue;
        }

        settled += 1;
        tracing::trace!(station = graph.name(station).unwrap_or_default(), %cost, "settled");

        for (next, weight) in graph.neighbor_ids(station) {
            let next_cost = cost + Distance::from(weight);

            if distances[next].map_or(true, |best| next_cost < best) {
                distances[next] = Some(next_cost);
                predecessors[next] = Some(station);
                heap.push(State {
                    cost: next_cost,
                    station: next,
                });
            }
        }
    }

    tracing::debug!(
        source = graph.name(source).unwrap_or_default(),
        settled,
        stale,
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Connection, Time};

    fn graph(edges: &[(&str, &str, Time)]) -> Graph {
        edges
            .iter()
            .map(|&(from, to, time)| Connection::new(from, to, time))
            .collect()
    }

    fn distance(graph: &Graph, paths: &ShortestPaths, name: &str) -> Option<Distance> {
        paths.distance(graph.id(name).unwrap())
    }

    #[test]
    fn prefers_cheaper_indirect_route() {
        let graph = graph(&[("A", "B", 5), ("B", "C", 3), ("A", "C", 10)]);
        let paths = shortest_paths(&graph, "A").unwrap();

        assert_eq!(distance(&graph, &paths, "A"), Some(0));
        assert_eq!(distance(&graph, &paths, "B"), Some(5));
        assert_eq!(distance(&graph, &paths, "C"), Some(8));
        assert_eq!(paths.predecessor(graph.id("C").unwrap()), graph.id("B"));
        assert_eq!(paths.predecessor(graph.id("A").unwrap()), None);
    }

    #[test]
    fn improved_stations_are_relaxed_again() {
        // D is first reached through the direct edge, then improved twice.
        let graph = graph(&[
            ("S", "D", 100),
            ("S", "X", 1),
            ("X", "D", 50),
            ("X", "Y", 1),
            ("Y", "D", 1),
            ("D", "E", 1),
        ]);
        let paths = shortest_paths(&graph, "S").unwrap();

        assert_eq!(distance(&graph, &paths, "D"), Some(3));
        assert_eq!(distance(&graph, &paths, "E"), Some(4));
        assert_eq!(paths.predecessor(graph.id("D").unwrap()), graph.id("Y"));
    }

    #[test]
    fn unreachable_stations_stay_infinite() {
        let graph = graph(&[("A", "B", 1), ("C", "D", 1)]);
        let paths = shortest_paths(&graph, "A").unwrap();
        let c = graph.id("C").unwrap();

        assert!(!paths.is_reachable(c));
        assert_eq!(paths.predecessor(c), None);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let graph = graph(&[("A", "B", 1)]);

        assert_eq!(
            shortest_paths(&graph, " Nowhere "),
            Err(SearchError::UnknownStation {
                name: "Nowhere".to_owned()
            })
        );
    }

    #[test]
    fn huge_weights_keep_exact_totals() {
        // Both routes to D exceed u64::MAX; the one through C is 5 minutes cheaper.
        let graph = graph(&[
            ("A", "B", Time::MAX - 1),
            ("B", "D", 10),
            ("A", "C", Time::MAX - 1),
            ("C", "D", 5),
        ]);
        let paths = shortest_paths(&graph, "A").unwrap();

        assert_eq!(
            distance(&graph, &paths, "D"),
            Some(Distance::from(Time::MAX) + 4)
        );
        assert_eq!(paths.predecessor(graph.id("D").unwrap()), graph.id("C"));
    }
}
