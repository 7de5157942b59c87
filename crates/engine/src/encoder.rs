//! Feature encoding: movie attributes to count vectors.
//!
//! Each movie is flattened into a feature string (genre, year, director,
//! rating joined by single spaces), then counted against a vocabulary built
//! over the whole catalog. This is a deliberately simple bag-of-tokens
//! model: case is kept as-is, tokens are whitespace-separated, and entries
//! are raw term frequencies with no normalization or IDF weighting.
//!
//! Rust concepts you'll learn here:
//! - HashMap entry API for building the vocabulary
//! - Rayon for data-parallel row encoding
//! - Pure functions of immutable input

use catalog::Movie;
use rayon::prelude::*;
use std::collections::HashMap;

/// Build the feature string for one movie.
///
/// Fixed field order: genre, year, director (empty when unknown), rating.
pub fn feature_string(movie: &Movie) -> String {
    format!(
        "{} {} {} {}",
        movie.genre,
        movie.year,
        movie.director_or_empty(),
        movie.rating
    )
}

/// Mapping from distinct token to a stable column index.
///
/// Columns are assigned in first-seen order over the catalog, so the same
/// catalog always yields the same vocabulary on repeated runs.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    columns: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from feature strings in catalog order.
    fn fit<'a>(feature_strings: impl Iterator<Item = &'a str>) -> Self {
        let mut columns = HashMap::new();
        for features in feature_strings {
            for token in features.split_whitespace() {
                let next = columns.len();
                columns.entry(token.to_string()).or_insert(next);
            }
        }
        Self { columns }
    }

    /// Number of distinct tokens (the shared vector dimensionality)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column index for a token, if it occurs anywhere in the catalog
    pub fn column(&self, token: &str) -> Option<usize> {
        self.columns.get(token).copied()
    }
}

/// Dense count matrix: one row per movie, one column per vocabulary token.
///
/// Invariant: every row has width equal to the vocabulary size.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    rows: Vec<Vec<u32>>,
    width: usize,
}

impl FeatureMatrix {
    /// Build a matrix from raw rows. All rows must share one width.
    pub fn from_rows(rows: Vec<Vec<u32>>, width: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { rows, width }
    }

    /// Number of rows (movies)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vocabulary size shared by all rows
    pub fn width(&self) -> usize {
        self.width
    }

    /// Count vector for one movie
    pub fn row(&self, index: usize) -> &[u32] {
        &self.rows[index]
    }
}

/// Encode a catalog snapshot into a vocabulary and count matrix.
///
/// Pure function of the input: no side effects, deterministic output.
/// An empty catalog yields an empty vocabulary and a zero-row matrix.
pub fn encode(movies: &[Movie]) -> (Vocabulary, FeatureMatrix) {
    let features: Vec<String> = movies.iter().map(feature_string).collect();
    let vocabulary = Vocabulary::fit(features.iter().map(String::as_str));

    let width = vocabulary.len();
    let rows: Vec<Vec<u32>> = features
        .par_iter()
        .map(|feature| {
            let mut row = vec![0u32; width];
            for token in feature.split_whitespace() {
                if let Some(column) = vocabulary.column(token) {
                    row[column] += 1;
                }
            }
            row
        })
        .collect();

    (vocabulary, FeatureMatrix::from_rows(rows, width))
}
