mod converse;
mod health;
mod index;

pub use converse::{AudioArtifact, ConverseResponse, ErrorResponse, converse_handler};
pub use health::health_handler;
pub use index::index_handler;
