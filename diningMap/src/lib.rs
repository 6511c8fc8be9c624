// Main module declarations for the dining map generator

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod map_config;
}

// Location data
pub mod data {
    pub mod location;
    pub mod registry;
}

// Distance estimation shared with the embedded viewer script
pub mod geo {
    pub mod distance;
}

// Map document construction
pub mod render {
    pub mod navigation;
    pub mod tiles;
    pub mod markers;
    pub mod script;
    pub mod artifact;
    pub mod builder;
}

// Writing and opening the generated document
pub mod publish {
    pub mod publisher;
    pub mod viewer;
}

// Console output
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::config::map_config::MapConfig;
pub use crate::data::location::{Coordinates, Location};
pub use crate::data::registry::LocationRegistry;
pub use crate::geo::distance::{distance, walk_minutes};
pub use crate::render::artifact::MapArtifact;
pub use crate::render::builder::build;
pub use crate::publish::publisher::Publisher;
