//! # Engine Crate
//!
//! The content-based similarity core: this is the only crate with real
//! algorithmic content. Everything else in the workspace is I/O glue
//! around it.
//!
//! ## Components
//!
//! - **encoder**: movie attributes -> feature string -> count vectors over
//!   a shared, first-seen-ordered vocabulary
//! - **similarity**: dense, exactly-symmetric all-pairs cosine matrix
//! - **recommender**: deterministic top-K ranking with an explicit
//!   UNINITIALIZED -> READY lifecycle
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use engine::{RecommendOutcome, Recommender};
//!
//! let engine = Recommender::new(Catalog::sample().into_movies());
//! match engine.recommend("Inception", 5) {
//!     RecommendOutcome::Found(recs) => {
//!         for rec in recs {
//!             println!("{} ({:.4})", rec.title, rec.score);
//!         }
//!     }
//!     RecommendOutcome::NotFound => println!("no such movie"),
//! }
//! ```
//!
//! The whole pipeline is synchronous and in-memory; the similarity matrix
//! is rebuilt per catalog snapshot and never persisted.

// Public modules
pub mod encoder;
pub mod recommender;
pub mod similarity;

// Re-export commonly used types
pub use encoder::{FeatureMatrix, Vocabulary, encode, feature_string};
pub use recommender::{RecommendOutcome, Recommendation, Recommender};
pub use similarity::{SELF_SIMILARITY, SimilarityMatrix};
