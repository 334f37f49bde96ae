use crate::error::Result;
use crate::graph::GraphStore;
use crate::vertex::{Role, VertexId};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::HashMap;

/// Key of the sentinel entry returned when the source actor is unknown.
pub const MISSING_KEY: &str = "null";
/// Value of the sentinel entry returned when the source actor is unknown.
pub const MISSING_VALUE: i32 = -1;

/// Actor name -> number of shared-movie hops from the source actor.
///
/// When the source is not in the graph the mapping is exactly
/// `{"null": -1}`; see [`ActorNumbers::is_missing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActorNumbers {
    numbers: HashMap<String, i32>,
}

impl ActorNumbers {
    pub fn missing() -> Self {
        let mut numbers = HashMap::new();
        numbers.insert(MISSING_KEY.to_string(), MISSING_VALUE);
        Self { numbers }
    }

    pub fn is_missing(&self) -> bool {
        self.numbers.len() == 1 && self.numbers.get(MISSING_KEY) == Some(&MISSING_VALUE)
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.numbers.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.numbers.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_inner(self) -> HashMap<String, i32> {
        self.numbers
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.numbers)?)
    }
}

impl GraphStore {
    /// Layered breadth-first numbering from `source`.
    ///
    /// Frontiers alternate between actors and movies. Only actor layers are
    /// recorded, so the reported hop count is the actor-to-actor distance.
    /// Actors unreachable from `source` are absent from the result.
    pub fn actor_numbers(&self, source: &str) -> ActorNumbers {
        let Some(start) = self.lookup_id(Role::Actor, source) else {
            tracing::debug!(source, "source actor not found");
            return ActorNumbers::missing();
        };

        let mut numbers = HashMap::new();
        let mut visited: FxHashSet<VertexId> = FxHashSet::default();
        let mut actors = vec![start];
        let mut hop = 0;

        while !actors.is_empty() {
            for &id in &actors {
                if let Some(v) = self.vertex(id) {
                    numbers.insert(v.name.clone(), hop);
                }
                visited.insert(id);
            }

            let movies = self.expand(&actors, &visited);
            actors = self.expand(&movies, &visited);
            visited.extend(movies);
            hop += 1;
        }

        tracing::debug!(source, reached = numbers.len(), layers = hop, "actor numbers");
        ActorNumbers { numbers }
    }

    /// Unvisited neighbors of every vertex in `layer`, each listed once, in
    /// first-seen order.
    fn expand(&self, layer: &[VertexId], visited: &FxHashSet<VertexId>) -> Vec<VertexId> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for &id in layer {
            for next in self.neighbors(id) {
                if !visited.contains(&next) && seen.insert(next) {
                    out.push(next);
                }
            }
        }
        out
    }
}
