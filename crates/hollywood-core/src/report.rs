//! Text rendering of a built graph and of actor-number results.

use crate::graph::{GraphStore, Slot};
use crate::traversal::ActorNumbers;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub actors: usize,
    pub movies: usize,
    pub edges: usize,
    pub capacity: usize,
    pub load: f64,
}

impl GraphStats {
    pub fn of(graph: &GraphStore) -> Self {
        Self {
            vertices: graph.vertex_count(),
            actors: graph.actor_count(),
            movies: graph.movie_count(),
            edges: graph.edge_count(),
            capacity: graph.capacity(),
            load: graph.load(),
        }
    }
}

/// One line per table slot: `[index = i]: null` or
/// `[index = i]: Head --> Neighbor --> ...`.
pub fn dump(graph: &GraphStore) -> String {
    let mut out = String::new();
    for (i, slot) in graph.slots().enumerate() {
        match slot {
            Slot::Empty => {
                let _ = writeln!(out, "[index = {i}]: null");
            }
            Slot::Occupied(head) => {
                let _ = write!(out, "[index = {i}]: {}", head.name);
                for name in graph.neighbor_names(head) {
                    let _ = write!(out, " --> {name}");
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Entries ordered by ascending actor number, ties broken by name.
pub fn sorted_entries(numbers: &ActorNumbers) -> Vec<(&str, i32)> {
    let mut entries: Vec<_> = numbers.iter().collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    entries
}

pub fn average(numbers: &ActorNumbers) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    let total: i64 = numbers.iter().map(|(_, n)| n as i64).sum();
    Some(total as f64 / numbers.len() as f64)
}

pub fn summary(numbers: &ActorNumbers) -> String {
    let mut out = String::new();
    for (name, n) in sorted_entries(numbers) {
        let _ = writeln!(out, "{name} : {n}");
    }
    if let Some(avg) = average(numbers) {
        let _ = writeln!(out, "\nThe average \"Actor Number\" above is: {avg:.2}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphStore {
        let mut g = GraphStore::new();
        g.insert_record("Alice", &["M1", "M2"]);
        g.insert_record("Bob", &["M1"]);
        g.insert_record("Carol", &["M2"]);
        g.insert_record("Dave", &["M3"]);
        g.insert_record("Carol", &["M3"]);
        g
    }

    #[test]
    fn dump_lists_every_slot() {
        let g = sample();
        let text = dump(&g);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), g.capacity());
        assert_eq!(
            lines.iter().filter(|l| l.ends_with(": null")).count(),
            g.capacity() - g.vertex_count()
        );
        assert!(lines.iter().any(|l| l.ends_with(": Alice --> M1 --> M2")));
        assert!(lines.iter().any(|l| l.ends_with(": Carol --> M2 --> M3")));
        assert!(lines.iter().any(|l| l.ends_with(": M3 --> Dave --> Carol")));
    }

    #[test]
    fn summary_sorts_by_number_then_name() {
        let numbers = sample().actor_numbers("Alice");
        let entries = sorted_entries(&numbers);
        assert_eq!(
            entries,
            [("Alice", 0), ("Bob", 1), ("Carol", 1), ("Dave", 2)]
        );
        assert_eq!(average(&numbers), Some(1.0));

        let text = summary(&numbers);
        assert!(text.starts_with("Alice : 0\nBob : 1\n"));
        assert!(text.ends_with("The average \"Actor Number\" above is: 1.00\n"));
    }

    #[test]
    fn stats_reflect_counts() {
        let stats = GraphStats::of(&sample());
        assert_eq!(stats.vertices, 7);
        assert_eq!(stats.actors, 4);
        assert_eq!(stats.movies, 3);
        assert_eq!(stats.edges, 12);
        assert!(stats.load < 0.75);
    }

    #[test]
    fn empty_numbers_have_no_average() {
        assert_eq!(average(&ActorNumbers::default()), None);
        assert_eq!(summary(&ActorNumbers::default()), "");
    }
}
