//! All-pairs cosine similarity over encoded feature vectors.
//!
//! ## Algorithm
//! `S[i][j] = dot(v_i, v_j) / (||v_i|| * ||v_j||)`, which lands in [0, 1]
//! for non-negative count vectors. Each unordered pair is computed once and
//! mirrored, so `S[i][j] == S[j][i]` holds exactly rather than within
//! floating tolerance. The diagonal is pinned to 1.0.
//!
//! ## Scalability ceiling
//! Building the matrix is O(N^2 * D) time and O(N^2) space (N = catalog
//! size, D = vocabulary size). That is acceptable only because catalogs are
//! assumed small, tens to low thousands of movies. Larger catalogs need a
//! different design, not a bigger allocation here.

use crate::encoder::FeatureMatrix;
use rayon::prelude::*;
use tracing::debug;

/// Maximum similarity score, used for the self-similarity diagonal
pub const SELF_SIMILARITY: f32 = 1.0;

/// Dense, symmetric N×N cosine similarity matrix.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major storage, `scores[i * n + j]`
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build the similarity matrix from an encoded catalog.
    ///
    /// Rows with zero magnitude (a movie whose feature string tokenized to
    /// nothing) get 0.0 against every other row, never NaN; their diagonal
    /// entry is still 1.0 by the self-similarity convention.
    pub fn build(features: &FeatureMatrix) -> Self {
        let n = features.len();
        let norms: Vec<f32> = (0..n)
            .into_par_iter()
            .map(|i| {
                features.row(i)
                    .iter()
                    .map(|&c| (c as f32) * (c as f32))
                    .sum::<f32>()
                    .sqrt()
            })
            .collect();

        // Upper triangle once per unordered pair, in parallel by row
        let upper: Vec<Vec<f32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| pair_score(features.row(i), features.row(j), norms[i], norms[j]))
                    .collect()
            })
            .collect();

        // Assemble: diagonal pinned, triangle mirrored
        let mut scores = vec![0.0f32; n * n];
        for i in 0..n {
            scores[i * n + i] = SELF_SIMILARITY;
            for (offset, &score) in upper[i].iter().enumerate() {
                let j = i + 1 + offset;
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        debug!("Built {}x{} similarity matrix", n, n);
        Self { n, scores }
    }

    /// Number of rows (equals the catalog size)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity score between movies `i` and `j`
    pub fn score(&self, i: usize, j: usize) -> f32 {
        self.scores[i * self.n + j]
    }

    /// Full similarity row for the movie at `index`
    pub fn row(&self, index: usize) -> &[f32] {
        &self.scores[index * self.n..(index + 1) * self.n]
    }
}

/// Cosine similarity for one pair, guarding zero-magnitude vectors.
fn pair_score(a: &[u32], b: &[u32], norm_a: f32, norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(&x, &y)| (x as f32) * (y as f32)).sum();
    dot / (norm_a * norm_b)
}
