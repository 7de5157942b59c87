//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system. Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Structs with public fields
//! - Derive macros for common traits
//! - Option<T> for fields that may be absent

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Unique identifier for a movie, stable across the movie's lifetime
pub type MovieId = u32;

/// Represents a movie in the catalog.
///
/// Records are immutable once loaded; the engine never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    /// Natural lookup key for recommendations. Should be unique within one
    /// catalog snapshot; duplicates resolve to the first row in catalog order.
    pub title: String,
    pub genre: String,
    pub year: u16,
    /// `None` means the director is unknown and is treated as an empty
    /// string wherever a string is needed.
    pub director: Option<String>,
    /// Average rating, e.g. 8.7
    pub rating: f32,
}

impl Movie {
    /// The director as a display/export string, empty when unknown.
    pub fn director_or_empty(&self) -> &str {
        self.director.as_deref().unwrap_or("")
    }
}

/// An ordered catalog snapshot.
///
/// The order of `movies` is significant: it defines row indices for the
/// feature and similarity matrices, and it is the tie-break order for
/// equally-scored recommendations.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Create a catalog from an ordered list of movies.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Borrow the movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Consume the catalog and hand the movies to the engine
    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// An empty catalog is valid but degenerate: every recommendation
    /// lookup against it yields a not-found result.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Validate the snapshot before handing it to the engine.
    ///
    /// - Empty titles are a hard error (the title is the lookup key).
    /// - Duplicate titles are legal but logged: the engine resolves them
    ///   to the first matching row, which is ambiguous for callers.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for movie in &self.movies {
            if movie.title.trim().is_empty() {
                return Err(CatalogError::InvalidValue {
                    field: "title".to_string(),
                    value: format!("(empty, movie id {})", movie.id),
                });
            }
            if !seen.insert(movie.title.as_str()) {
                warn!(
                    "Duplicate title {:?} in catalog; recommendations resolve to the first row",
                    movie.title
                );
            }
        }
        Ok(())
    }
}
