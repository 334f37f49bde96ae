use crate::config::GraphParams;
use crate::error::Result;
use crate::vertex::{Role, Vertex, VertexId};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// One position of the slot table, as reported by [`GraphStore::slots`].
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    Empty,
    Occupied(&'a Vertex),
}

/// Bipartite actor/movie graph stored as an open-addressing hash table whose
/// occupied slots are the heads of adjacency chains.
///
/// Vertex payloads live in an arena and never move; the table only holds
/// handles, so growing it re-homes handles without touching any chain.
#[derive(Debug, Clone)]
pub struct GraphStore {
    table: Vec<Option<VertexId>>,
    vertices: Vec<Vertex>,
    edge_count: usize,
    load_factor: f64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::build(GraphParams::default())
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: GraphParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::build(params))
    }

    fn build(params: GraphParams) -> Self {
        Self {
            table: vec![None; params.initial_capacity],
            vertices: Vec::new(),
            edge_count: 0,
            load_factor: params.load_factor,
        }
    }

    /// Ingest one `actor | movie...` record.
    ///
    /// The actor head is placed first, then every movie is either created
    /// (with the actor as its first neighbor) or has the actor appended to
    /// its chain. Each movie occurrence writes one link in each direction.
    /// A record for an actor that is already present extends that actor's
    /// chain instead of replacing it.
    pub fn insert_record<S: AsRef<str>>(&mut self, actor: &str, movies: &[S]) -> VertexId {
        let actor_id = match self.lookup_id(Role::Actor, actor) {
            Some(id) => {
                tracing::debug!(actor, "merging repeated actor record");
                id
            }
            None => self.place_head(Role::Actor, actor),
        };

        for movie in movies {
            let movie = movie.as_ref();
            let movie_id = match self.lookup_id(Role::Movie, movie) {
                Some(id) => id,
                None => self.place_head(Role::Movie, movie),
            };
            self.link(actor_id, movie_id);
            self.link(movie_id, actor_id);
        }
        actor_id
    }

    /// Slot index for `(role, name)`: either the slot holding that vertex or
    /// the empty slot where it would be placed.
    pub fn find_slot(&self, role: Role, name: &str) -> usize {
        probe(&self.table, &self.vertices, role, name)
    }

    pub fn lookup_id(&self, role: Role, name: &str) -> Option<VertexId> {
        self.table[self.find_slot(role, name)]
    }

    pub fn lookup(&self, role: Role, name: &str) -> Option<&Vertex> {
        self.lookup_id(role, name).map(|id| &self.vertices[id.0])
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Neighbor handles of `id` in chain order; empty for unknown handles.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(id.0)
            .map(|v| v.edges.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    pub fn neighbor_names<'a>(&'a self, vertex: &'a Vertex) -> impl Iterator<Item = &'a str> + 'a {
        vertex
            .edges
            .iter()
            .map(move |id| self.vertices[id.0].name.as_str())
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot<'_>> + '_ {
        self.table.iter().map(move |slot| match slot {
            Some(id) => Slot::Occupied(&self.vertices[id.0]),
            None => Slot::Empty,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn actor_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_actor()).count()
    }

    pub fn movie_count(&self) -> usize {
        self.vertex_count() - self.actor_count()
    }

    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Current ratio of head vertices to slots.
    pub fn load(&self) -> f64 {
        self.vertices.len() as f64 / self.table.len() as f64
    }

    fn place_head(&mut self, role: Role, name: &str) -> VertexId {
        let slot = self.find_slot(role, name);
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(name, role));
        self.table[slot] = Some(id);
        while self.load() >= self.load_factor {
            self.grow();
        }
        id
    }

    fn link(&mut self, from: VertexId, to: VertexId) {
        self.vertices[from.0].edges.push(to);
        self.edge_count += 1;
    }

    fn grow(&mut self) {
        let capacity = self.table.len() * 2;
        let mut table = vec![None; capacity];
        for id in self.table.iter().flatten() {
            let head = &self.vertices[id.0];
            let slot = probe(&table, &self.vertices, head.role, &head.name);
            table[slot] = Some(*id);
        }
        tracing::debug!(
            from = self.table.len(),
            to = capacity,
            vertices = self.vertices.len(),
            "grew slot table"
        );
        self.table = table;
    }
}

fn slot_hash(role: Role, name: &str) -> u64 {
    let mut hasher = FxHasher::default();
    role.hash(&mut hasher);
    name.hash(&mut hasher);
    hasher.finish()
}

/// Linear probing from the home slot until an empty slot or the slot holding
/// `(role, name)`. The table always keeps at least one empty slot because the
/// load factor is below 1.
fn probe(table: &[Option<VertexId>], vertices: &[Vertex], role: Role, name: &str) -> usize {
    let len = table.len();
    let mut index = (slot_hash(role, name) % len as u64) as usize;
    while let Some(id) = table[index] {
        if vertices[id.0].matches(role, name) {
            break;
        }
        index = (index + 1) % len;
    }
    index
}
