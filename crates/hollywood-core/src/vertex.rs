use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Actor,
    Movie,
}

/// Handle into the vertex arena of a [`GraphStore`](crate::GraphStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

/// A head vertex: one per unique `(role, name)` pair.
///
/// `edges` is the adjacency chain in insertion order. Entries point at the
/// neighbor's head vertex, so a neighbor appears once per link written, and
/// never as a separate vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub name: String,
    pub role: Role,
    pub edges: Vec<VertexId>,
}

impl Vertex {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            edges: Vec::new(),
        }
    }

    pub fn is_actor(&self) -> bool {
        self.role == Role::Actor
    }

    /// Identity check used by slot probing.
    pub fn matches(&self, role: Role, name: &str) -> bool {
        self.role == role && self.name == name
    }
}
