use crate::config::GraphParams;
use crate::error::{HollywoodError, Result};
use crate::graph::GraphStore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Field separator of the actor/movie data files.
pub const FIELD_SEPARATOR: &str = " | ";

/// One line of input: an actor followed by the movies they appear in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub actor: String,
    pub movies: Vec<String>,
}

/// Split a line on `" | "`. Returns `None` for blank lines.
///
/// Trailing empty fields are dropped; empty fields between two separators
/// are kept.
pub fn parse_record(line: &str) -> Option<Record> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }
    let mut fields = line.split(FIELD_SEPARATOR).map(str::to_string);
    let actor = fields.next()?;
    let mut movies: Vec<String> = fields.collect();
    while movies.last().is_some_and(|m| m.is_empty()) {
        movies.pop();
    }
    Some(Record { actor, movies })
}

pub fn load_reader(reader: impl BufRead, params: GraphParams) -> Result<GraphStore> {
    let mut graph = GraphStore::with_params(params)?;
    let mut records = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(record) = parse_record(&line) else {
            tracing::debug!(line = idx + 1, "skipping blank line");
            continue;
        };
        if record.movies.is_empty() {
            return Err(HollywoodError::MalformedRecord {
                line: idx + 1,
                reason: format!("actor '{}' has no movies", record.actor),
            });
        }
        graph.insert_record(&record.actor, &record.movies);
        records += 1;
    }
    tracing::info!(
        records,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        capacity = graph.capacity(),
        "built graph"
    );
    Ok(graph)
}

pub fn load_file(path: impl AsRef<Path>, params: GraphParams) -> Result<GraphStore> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading records");
    let file = File::open(path)?;
    load_reader(BufReader::new(file), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Role;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn parses_pipe_separated_fields() {
        let rec = parse_record("Bergen, Candice | Gandhi (1982) | Starting Over (1979)\r").unwrap();
        assert_eq!(rec.actor, "Bergen, Candice");
        assert_eq!(rec.movies, ["Gandhi (1982)", "Starting Over (1979)"]);
        assert!(parse_record("   ").is_none());
        assert!(parse_record("Solo").unwrap().movies.is_empty());
    }

    #[test]
    fn trailing_separator_adds_no_movie() {
        let rec = parse_record("Alice | M1 | ").unwrap();
        assert_eq!(rec.movies, ["M1"]);
        let rec = parse_record("Alice | M1 |  | \r").unwrap();
        assert_eq!(rec.movies, ["M1"]);
        assert!(parse_record("Solo | ").unwrap().movies.is_empty());
        // empty fields between separators survive
        let rec = parse_record("Alice |  | M2").unwrap();
        assert_eq!(rec.movies, ["", "M2"]);
    }

    #[test]
    fn trailing_separators_do_not_link_unrelated_actors() {
        let input = "Alice | M1 | \nBob | M2 | \n";
        let g = load_reader(Cursor::new(input), GraphParams::default()).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert!(g.lookup(Role::Movie, "").is_none());
        assert_eq!(g.actor_numbers("Alice").get("Bob"), None);

        match load_reader(Cursor::new("Solo | \n"), GraphParams::default()) {
            Err(HollywoodError::MalformedRecord { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn separator_requires_surrounding_spaces() {
        let rec = parse_record("A|B | C").unwrap();
        assert_eq!(rec.actor, "A|B");
        assert_eq!(rec.movies, ["C"]);
    }

    #[test]
    fn loads_records_and_skips_blank_lines() {
        let input = "Alice | M1 | M2\n\nBob | M1\nCarol | M2\n";
        let g = load_reader(Cursor::new(input), GraphParams::default()).unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 8);
        assert!(g.lookup(Role::Movie, "M2").is_some());
    }

    #[test]
    fn record_without_movies_reports_its_line() {
        let input = "Alice | M1\nBob\n";
        match load_reader(Cursor::new(input), GraphParams::default()) {
            Err(HollywoodError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Alice | M1 | M2").unwrap();
        writeln!(file, "Bob | M1").unwrap();
        let g = load_file(file.path(), GraphParams::default()).unwrap();
        assert_eq!(g.actor_numbers("Bob").get("Alice"), Some(1));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("absent.txt"), GraphParams::default());
        assert!(matches!(err, Err(HollywoodError::Io(_))));
    }
}
