pub mod catalog;
pub mod error;
pub mod render;
pub mod scad;

// Re-export commonly used types
pub use catalog::PartCatalog;
pub use error::{MakeError, MakeResult};
pub use render::RenderRequest;
pub use scad::{OpenScad, Renderer};
