//! Serialization of recommendation results to JSON and CSV files.
//!
//! The engine's result records serialize as-is; this module only decides
//! file naming and on-disk shape.

use anyhow::{Context, Result};
use engine::Recommendation;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output formats for recommendation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Recognize a format from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// MIME type used when uploading the exported file
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// A query's results, packaged for export.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub input_movie: String,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    pub fn new(input_movie: impl Into<String>, recommendations: Vec<Recommendation>) -> Self {
        Self {
            input_movie: input_movie.into(),
            recommendations,
        }
    }

    /// File name derived from the query title, spaces replaced with
    /// underscores: `The_Matrix_recommendations.json`
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!(
            "{}_recommendations.{}",
            self.input_movie.replace(' ', "_"),
            format.extension()
        )
    }

    /// Write the report into `dir` and return the full path.
    pub fn write(&self, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name(format));
        let contents = match format {
            ExportFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")?
            }
            ExportFormat::Csv => self.to_csv(),
        };
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;

        info!("Recommendations exported to {}", path.display());
        Ok(path)
    }

    /// Render the recommendation list as CSV with a header row.
    fn to_csv(&self) -> String {
        let mut out = String::from("title,genre,year,director,rating,score\n");
        for rec in &self.recommendations {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                csv_field(&rec.title),
                csv_field(&rec.genre),
                rec.year,
                csv_field(&rec.director),
                rec.rating,
                rec.score
            );
        }
        out
    }
}

/// Quote a CSV field only when it needs it.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
