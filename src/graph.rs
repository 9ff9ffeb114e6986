use std::collections::HashMap;

use crate::record::{Connection, Time};

/// Dense index of a station, assigned in order of first appearance.
pub type StationId = usize;

/// Undirected weighted transit graph with station names interned to [`StationId`]s.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    names: Vec<String>,
    ids: HashMap<String, StationId>,
    adjacency: Vec<HashMap<StationId, Time>>,
    connections: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds both directions of `connection`, replacing any earlier time for the same pair.
    pub fn insert(&mut self, connection: &Connection) {
        let from = self.intern(&connection.from);
        let to = self.intern(&connection.to);

        self.adjacency[from].insert(to, connection.time);
        self.adjacency[to].insert(from, connection.time);
        self.connections += 1;
    }

    fn intern(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.names.len();
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        self.adjacency.push(HashMap::new());
        id
    }

    pub fn id(&self, name: &str) -> Option<StationId> {
        self.ids.get(name.trim()).copied()
    }

    pub fn name(&self, id: StationId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.id(name).is_some()
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<Time> {
        let to = self.id(to)?;
        self.adjacency[self.id(from)?].get(&to).copied()
    }

    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = (&str, Time)> + '_ {
        self.id(name)
            .into_iter()
            .flat_map(move |id| self.neighbor_ids(id))
            .map(|(id, time)| (self.names[id].as_str(), time))
    }

    pub(crate) fn neighbor_ids(&self, id: StationId) -> impl Iterator<Item = (StationId, Time)> + '_ {
        self.adjacency[id].iter().map(|(&id, &time)| (id, time))
    }

    pub fn stations(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn station_count(&self) -> usize {
        self.names.len()
    }

    /// Number of accepted records, including ones that overwrote an earlier pair.
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    /// Number of distinct undirected station pairs.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(id, neighbors)| neighbors.keys().filter(|&&other| other >= id).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Extend<Connection> for Graph {
    fn extend<I: IntoIterator<Item = Connection>>(&mut self, iter: I) {
        iter.into_iter().for_each(|connection| self.insert(&connection));
    }
}

impl FromIterator<Connection> for Graph {
    fn from_iter<I: IntoIterator<Item = Connection>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}
