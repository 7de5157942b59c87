//! Integration tests for the recommendation engine.
//!
//! These exercise the encoder, similarity builder, and recommender
//! together on small catalogs, covering the ranking scenarios and the
//! structural properties the engine guarantees.

use catalog::{Catalog, Movie};
use engine::{RecommendOutcome, Recommender, SimilarityMatrix, encode};

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

/// The four-movie catalog from the ranking scenarios.
fn scenario_catalog() -> Vec<Movie> {
    vec![
        movie(1, "The Matrix", "Sci-Fi", 1999, "Wachowski", 8.7),
        movie(2, "Inception", "Sci-Fi", 2010, "Nolan", 8.8),
        movie(3, "Interstellar", "Sci-Fi", 2014, "Nolan", 8.6),
        movie(4, "The Godfather", "Crime", 1972, "Coppola", 9.2),
    ]
}

#[test]
fn shared_tokens_rank_above_disjoint_genres() {
    // Scenario A: Interstellar shares Sci-Fi and Nolan with Inception,
    // The Matrix shares Sci-Fi; The Godfather shares nothing and must
    // rank below both.
    let engine = Recommender::new(scenario_catalog());

    let recs = match engine.recommend("Inception", 2) {
        RecommendOutcome::Found(recs) => recs,
        RecommendOutcome::NotFound => panic!("Inception is in the catalog"),
    };

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].title, "Interstellar");
    assert_eq!(recs[1].title, "The Matrix");
    assert!(recs[0].score > recs[1].score);
    assert!(recs.iter().all(|r| r.title != "The Godfather"));
}

#[test]
fn zero_k_returns_empty_not_error() {
    // Scenario B
    let engine = Recommender::new(scenario_catalog());
    match engine.recommend("The Matrix", 0) {
        RecommendOutcome::Found(recs) => assert!(recs.is_empty()),
        RecommendOutcome::NotFound => panic!("title exists, outcome must be Found"),
    }
}

#[test]
fn oversized_k_returns_all_others() {
    // Scenario C: k = 1000 on a 4-movie catalog yields exactly 3 results
    let engine = Recommender::new(scenario_catalog());
    match engine.recommend("Inception", 1000) {
        RecommendOutcome::Found(recs) => {
            assert_eq!(recs.len(), 3);
            assert!(recs.iter().all(|r| r.title != "Inception"));
        }
        RecommendOutcome::NotFound => panic!("title exists"),
    }
}

#[test]
fn singleton_catalog_yields_empty_list() {
    // Scenario D: the only movie is the query movie
    let only = vec![movie(1, "Alone", "Drama", 2020, "Someone", 7.5)];
    let engine = Recommender::new(only);
    match engine.recommend("Alone", 5) {
        RecommendOutcome::Found(recs) => assert!(recs.is_empty()),
        RecommendOutcome::NotFound => panic!("the movie exists"),
    }
}

#[test]
fn unknown_title_is_not_found() {
    let engine = Recommender::new(scenario_catalog());
    assert_eq!(
        engine.recommend("Nonexistent Title", 5),
        RecommendOutcome::NotFound
    );
}

#[test]
fn ranking_is_deterministic_across_runs() {
    let first = {
        let engine = Recommender::new(scenario_catalog());
        engine.recommend("Inception", 3)
    };
    // Fresh engine, same catalog: identical ordered sequence
    let second = {
        let engine = Recommender::new(scenario_catalog());
        engine.recommend("Inception", 3)
    };
    assert_eq!(first, second);

    // Repeated queries against one cached model agree too
    let engine = Recommender::new(scenario_catalog());
    assert_eq!(engine.recommend("Inception", 3), first);
    assert_eq!(engine.recommend("Inception", 3), first);
}

#[test]
fn similarity_matrix_properties_on_sample_catalog() {
    let movies = Catalog::sample().into_movies();
    let (_, features) = encode(&movies);
    let sim = SimilarityMatrix::build(&features);

    assert_eq!(sim.len(), movies.len());
    for i in 0..sim.len() {
        assert_eq!(sim.score(i, i), 1.0);
        for j in 0..sim.len() {
            assert_eq!(sim.score(i, j), sim.score(j, i));
            let score = sim.score(i, j);
            assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
        }
    }
}

#[test]
fn result_length_bounds_hold_for_every_title() {
    let movies = Catalog::sample().into_movies();
    let n = movies.len();
    let titles: Vec<String> = movies.iter().map(|m| m.title.clone()).collect();
    let engine = Recommender::new(movies);

    for title in &titles {
        for k in [0usize, 1, 5, 100] {
            match engine.recommend(title, k) {
                RecommendOutcome::Found(recs) => {
                    assert!(recs.len() <= k);
                    assert!(recs.len() <= n - 1);
                    assert!(recs.iter().all(|r| &r.title != title));
                }
                RecommendOutcome::NotFound => panic!("{title} is in the catalog"),
            }
        }
    }
}

#[test]
fn scores_are_sorted_descending() {
    let engine = Recommender::new(Catalog::sample().into_movies());
    match engine.recommend("Pulp Fiction", 14) {
        RecommendOutcome::Found(recs) => {
            assert!(recs.windows(2).all(|pair| pair[0].score >= pair[1].score));
        }
        RecommendOutcome::NotFound => panic!("title exists"),
    }
}

#[test]
fn prepared_engine_serves_concurrent_readers() {
    // The shared-deployment pattern: one built engine behind an Arc,
    // queried from several threads without locks.
    use std::sync::Arc;
    use std::thread;

    let engine = Recommender::new(scenario_catalog());
    engine.prepare();
    let engine = Arc::new(engine);

    let baseline = engine.recommend("Inception", 3);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.recommend("Inception", 3))
        })
        .collect();

    for handle in handles {
        let outcome = handle.join().expect("reader thread panicked");
        assert_eq!(outcome, baseline);
    }
}

#[test]
fn equal_scores_keep_catalog_order() {
    // Three movies orthogonal to the query all score 0.0 and must come
    // back in catalog order.
    let movies = vec![
        movie(1, "Query", "Sci-Fi", 1999, "Someone", 8.0),
        movie(2, "First Tie", "Crime", 1972, "A", 9.2),
        movie(3, "Second Tie", "Drama", 1994, "B", 9.3),
        movie(4, "Third Tie", "Fantasy", 2001, "C", 8.9),
    ];
    let engine = Recommender::new(movies);
    match engine.recommend("Query", 3) {
        RecommendOutcome::Found(recs) => {
            let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(titles, ["First Tie", "Second Tie", "Third Tie"]);
            assert!(recs.iter().all(|r| r.score == 0.0));
        }
        RecommendOutcome::NotFound => panic!("title exists"),
    }
}
