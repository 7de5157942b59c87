//! # Export Crate
//!
//! Transport glue around the engine: turns result lists into files and
//! ships them to remote object storage. Nothing here touches the
//! similarity computation; the engine's records serialize unchanged.
//!
//! ## Components
//!
//! - **report**: JSON/CSV export of a query's recommendations
//! - **config**: JSON config file for the upload target
//! - **uploader**: S3 upload of exported files

pub mod config;
pub mod report;
pub mod uploader;

// Re-export main types
pub use config::{AppConfig, AwsSettings};
pub use report::{ExportFormat, RecommendationReport};
pub use uploader::ObjectStoreUploader;
