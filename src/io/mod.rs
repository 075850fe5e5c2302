//! Input/output operations and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Defaults and output-naming constants
pub mod configuration;
/// Error types for extraction operations
pub mod error;
/// Collision-safe sequential index allocation
pub mod index;
/// Batch progress display
pub mod progress;
/// Cropping and persistence of extracted icons
pub mod writer;
