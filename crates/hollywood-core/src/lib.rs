pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod report;
pub mod traversal;
pub mod vertex;

pub use config::GraphParams;
pub use error::HollywoodError;
pub use graph::{GraphStore, Slot};
pub use loader::{load_file, load_reader, parse_record, Record};
pub use traversal::ActorNumbers;
pub use vertex::{Role, Vertex, VertexId};
