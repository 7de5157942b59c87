//! Top-K recommendation over the similarity matrix.
//!
//! The `Recommender` owns a catalog snapshot plus the derived model
//! (vocabulary and similarity matrix). It has two states:
//!
//! - UNINITIALIZED: no model built yet
//! - READY: model built for the current catalog
//!
//! The transition happens on the first `recommend` call or an explicit
//! `prepare`, and is one-directional until `reload` swaps the catalog and
//! resets the state. A stale matrix after a catalog change would be a
//! correctness bug, so invalidation is explicit rather than implicit.

use crate::encoder::{self, Vocabulary};
use crate::similarity::SimilarityMatrix;
use catalog::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;
use tracing::{debug, info};

/// One ranked result, carrying full movie metadata plus its score.
///
/// Serializes as-is into export records; no transformation needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub genre: String,
    pub year: u16,
    /// Empty string when the director is unknown
    pub director: String,
    pub rating: f32,
    /// Cosine similarity to the query movie, in [0, 1]
    pub score: f32,
}

/// Outcome of a recommendation query.
///
/// A tagged type, so callers can never mistake "no such movie" for a real
/// (possibly empty) result list.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome {
    /// The query title exists; ranked results follow (possibly empty)
    Found(Vec<Recommendation>),
    /// No movie with the query title exists in the catalog
    NotFound,
}

impl RecommendOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RecommendOutcome::Found(_))
    }
}

/// Model derived from one catalog snapshot.
#[derive(Debug)]
struct Model {
    vocabulary: Vocabulary,
    similarity: SimilarityMatrix,
}

impl Model {
    fn build(movies: &[Movie]) -> Self {
        let (vocabulary, features) = encoder::encode(movies);
        let similarity = SimilarityMatrix::build(&features);
        info!(
            "Recommendation model ready: {} movies, {} vocabulary tokens",
            movies.len(),
            vocabulary.len()
        );
        Self {
            vocabulary,
            similarity,
        }
    }
}

/// Content-based recommendation engine for one catalog snapshot.
///
/// Queries take `&self`: the model lives in a `OnceLock`, so the lazy
/// UNINITIALIZED -> READY build happens at most once behind a shared
/// reference. A built engine can therefore be shared across concurrent
/// readers (e.g. behind an `Arc`) without locks, as long as no `reload`
/// happens, which needs `&mut` exclusivity.
#[derive(Debug)]
pub struct Recommender {
    movies: Vec<Movie>,
    model: OnceLock<Model>,
}

impl Recommender {
    /// Create an UNINITIALIZED engine over a catalog snapshot.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            model: OnceLock::new(),
        }
    }

    /// Whether the model has been built for the current catalog
    pub fn is_ready(&self) -> bool {
        self.model.get().is_some()
    }

    /// Build the model now. Idempotent: repeated calls reuse cached state.
    pub fn prepare(&self) {
        self.model.get_or_init(|| Model::build(&self.movies));
    }

    /// Replace the catalog and drop the stale model.
    ///
    /// The engine returns to UNINITIALIZED; the next query rebuilds.
    /// Exclusive access here is what keeps readers from ever observing a
    /// partially-rebuilt matrix.
    pub fn reload(&mut self, movies: Vec<Movie>) {
        debug!(
            "Catalog reload: {} -> {} movies, model invalidated",
            self.movies.len(),
            movies.len()
        );
        self.movies = movies;
        self.model = OnceLock::new();
    }

    /// The catalog snapshot, in original order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Vocabulary size of the built model, if READY
    pub fn vocabulary_size(&self) -> Option<usize> {
        self.model.get().map(|m| m.vocabulary.len())
    }

    /// Recommend up to `k` movies most similar to the one titled `title`.
    ///
    /// Lookup is exact and case-sensitive; when two catalog rows share a
    /// title, the first row in catalog order wins. The query movie itself
    /// is excluded by index (never by score, since another movie may
    /// legitimately tie at 1.0). Ties are broken by catalog order via a
    /// stable sort, so identical input always produces identical output.
    ///
    /// `k == 0` yields an empty `Found` list; `k` beyond the catalog size
    /// yields everything available. An unknown title yields `NotFound`.
    pub fn recommend(&self, title: &str, k: usize) -> RecommendOutcome {
        let model = self.model.get_or_init(|| Model::build(&self.movies));

        // First matching row wins on duplicate titles
        let query_index = match self.movies.iter().position(|m| m.title == title) {
            Some(index) => index,
            None => {
                debug!("Title {:?} not in catalog", title);
                return RecommendOutcome::NotFound;
            }
        };

        let scores = model.similarity.row(query_index);
        let mut ranked: Vec<(usize, f32)> = scores
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != query_index)
            .map(|(index, &score)| (index, score))
            .collect();

        // Stable sort: equal scores keep catalog order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(k);

        let recommendations = ranked
            .into_iter()
            .map(|(index, score)| {
                let movie = &self.movies[index];
                Recommendation {
                    title: movie.title.clone(),
                    genre: movie.genre.clone(),
                    year: movie.year,
                    director: movie.director_or_empty().to_string(),
                    rating: movie.rating,
                    score,
                }
            })
            .collect();

        RecommendOutcome::Found(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn movie(id: u32, title: &str, genre: &str, year: u16, director: &str, rating: f32) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genre: genre.to_string(),
            year,
            director: Some(director.to_string()),
            rating,
        }
    }

    fn scenario_catalog() -> Vec<Movie> {
        vec![
            movie(1, "The Matrix", "Sci-Fi", 1999, "Wachowski", 8.7),
            movie(2, "Inception", "Sci-Fi", 2010, "Nolan", 8.8),
            movie(3, "Interstellar", "Sci-Fi", 2014, "Nolan", 8.6),
            movie(4, "The Godfather", "Crime", 1972, "Coppola", 9.2),
        ]
    }

    #[test]
    fn test_state_transition() {
        let engine = Recommender::new(scenario_catalog());
        assert!(!engine.is_ready());

        engine.prepare();
        assert!(engine.is_ready());

        // prepare is idempotent
        engine.prepare();
        assert!(engine.is_ready());
    }

    #[test]
    fn test_lazy_build_on_first_recommend() {
        let engine = Recommender::new(scenario_catalog());
        assert!(!engine.is_ready());

        let outcome = engine.recommend("Inception", 2);
        assert!(outcome.is_found());
        assert!(engine.is_ready());
    }

    #[test]
    fn test_reload_invalidates_model() {
        let mut engine = Recommender::new(scenario_catalog());
        engine.prepare();
        assert!(engine.is_ready());

        engine.reload(vec![movie(9, "Solo Film", "Drama", 2020, "Someone", 7.0)]);
        assert!(!engine.is_ready());

        // Old titles are gone after the reload
        assert_eq!(engine.recommend("Inception", 2), RecommendOutcome::NotFound);
        match engine.recommend("Solo Film", 5) {
            RecommendOutcome::Found(recs) => assert!(recs.is_empty()),
            RecommendOutcome::NotFound => panic!("reloaded title should be found"),
        }
    }

    #[test]
    fn test_not_found_is_distinct_from_empty() {
        let engine = Recommender::new(scenario_catalog());

        assert_eq!(
            engine.recommend("Nonexistent Title", 5),
            RecommendOutcome::NotFound
        );

        // Empty Found, by contrast, still means the title exists
        match engine.recommend("Inception", 0) {
            RecommendOutcome::Found(recs) => assert!(recs.is_empty()),
            RecommendOutcome::NotFound => panic!("k = 0 must not look like a missing title"),
        }
    }

    #[test]
    fn test_query_is_excluded_by_index_not_score() {
        // A duplicate row ties with the query at score 1.0 and must survive
        let mut movies = scenario_catalog();
        movies.push(movie(5, "Inception Clone", "Sci-Fi", 2010, "Nolan", 8.8));
        let engine = Recommender::new(movies);

        match engine.recommend("Inception", 10) {
            RecommendOutcome::Found(recs) => {
                assert!(recs.iter().all(|r| r.title != "Inception"));
                let clone = &recs[0];
                assert_eq!(clone.title, "Inception Clone");
                assert!((clone.score - 1.0).abs() < 1e-6);
            }
            RecommendOutcome::NotFound => panic!("title exists"),
        }
    }

    #[test]
    fn test_duplicate_title_resolves_to_first_row() {
        let movies = vec![
            movie(1, "Twin", "Sci-Fi", 1999, "First", 8.0),
            movie(2, "Other", "Sci-Fi", 1999, "First", 8.0),
            movie(3, "Twin", "Crime", 1972, "Second", 9.0),
        ];
        let engine = Recommender::new(movies);

        match engine.recommend("Twin", 1) {
            RecommendOutcome::Found(recs) => {
                // Query resolved to row 0 (Sci-Fi Twin), so its nearest
                // neighbor is Other, not the Crime Twin
                assert_eq!(recs[0].title, "Other");
            }
            RecommendOutcome::NotFound => panic!("title exists"),
        }
    }

    #[test]
    fn test_queries_work_through_shared_reference() {
        let engine = Recommender::new(scenario_catalog());

        // Queries never need &mut, even for the lazy first build
        fn serve(engine: &Recommender) -> RecommendOutcome {
            engine.recommend("Inception", 2)
        }

        assert!(serve(&engine).is_found());
        assert!(engine.is_ready());
        assert!(serve(&engine).is_found());
    }

    #[test]
    fn test_catalog_accessors() {
        let engine = Recommender::new(Catalog::sample().into_movies());
        assert_eq!(engine.movies().len(), 15);
        assert_eq!(engine.vocabulary_size(), None);

        engine.prepare();
        assert!(engine.vocabulary_size().unwrap() > 0);
    }

    #[test]
    fn test_empty_catalog_yields_not_found() {
        let engine = Recommender::new(Vec::new());
        engine.prepare();
        assert!(engine.is_ready());
        assert_eq!(engine.vocabulary_size(), Some(0));
        assert_eq!(engine.recommend("Anything", 5), RecommendOutcome::NotFound);
    }
}
