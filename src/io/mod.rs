/// Command-line interface and batch processing
pub mod cli;
/// Tiling constants and defaults
pub mod configuration;
/// Error types and result aliases
pub mod error;
/// PNG previews of resolved layers
pub mod image;
/// JSON level files
pub mod level;
/// Progress display for batch runs
pub mod progress;
/// Tiling reports for the instantiation layer
pub mod report;
