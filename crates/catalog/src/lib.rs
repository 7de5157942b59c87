//! # Catalog Crate
//!
//! This crate owns the flat movie table the recommendation engine consumes.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **parser**: Parse `::`-delimited catalog files into Rust structs
//! - **sample**: Embedded sample catalog for out-of-the-box usage
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load a catalog snapshot, or fall back to the sample data
//! let catalog = Catalog::load_from_file(Path::new("data/movies.dat"))?;
//! println!("Loaded {} movies", catalog.len());
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod sample;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Movie, MovieId};
