//! Parser for catalog data files.
//!
//! File format, one movie per line:
//! `id::title::genre::year::director::rating`
//!
//! The director field may be empty. Blank lines are skipped.
//!
//! Rust concepts you'll learn here:
//! - String parsing and splitting
//! - Error handling with `?` operator
//! - Converting between types (parsing strings to numbers)
//! - Working with file I/O

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Movie};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a file tolerating ISO-8859-1 (Latin-1) encoding.
///
/// Older movie exports are not always UTF-8; Latin-1 is a single-byte
/// encoding where each byte maps directly to a Unicode code point.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content: String = bytes.iter().map(|&b| b as char).collect();
    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Pull the next `::`-separated field or fail with line context.
fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    path: &str,
    line: usize,
    name: &str,
) -> Result<&'a str> {
    parts.next().ok_or_else(|| CatalogError::ParseError {
        path: path.to_string(),
        line,
        reason: format!("Missing {}", name),
    })
}

/// Parse a single catalog line into a Movie.
fn parse_line(line: &str, path: &str, line_no: usize) -> Result<Movie> {
    let mut parts = line.split("::");

    let id = next_field(&mut parts, path, line_no, "id")?;
    let title = next_field(&mut parts, path, line_no, "title")?;
    let genre = next_field(&mut parts, path, line_no, "genre")?;
    let year = next_field(&mut parts, path, line_no, "year")?;
    let director = next_field(&mut parts, path, line_no, "director")?;
    let rating = next_field(&mut parts, path, line_no, "rating")?;

    let numeric = |field: &str, err| CatalogError::ParseError {
        path: path.to_string(),
        line: line_no,
        reason: format!("Invalid {}: {}", field, err),
    };

    Ok(Movie {
        id: id.parse().map_err(|e| numeric("id", format!("{}", e)))?,
        title: title.to_string(),
        genre: genre.to_string(),
        year: year.parse().map_err(|e| numeric("year", format!("{}", e)))?,
        director: if director.is_empty() {
            None
        } else {
            Some(director.to_string())
        },
        rating: rating
            .parse()
            .map_err(|e| numeric("rating", format!("{}", e)))?,
    })
}

/// Parse a whole catalog file, preserving line order.
pub fn parse_catalog(path: &Path) -> Result<Vec<Movie>> {
    let path_str = path.display().to_string();
    let lines = read_lines_latin1(path)?;
    let mut movies = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue; // Skip empty lines
        }
        movies.push(parse_line(trimmed, &path_str, line_no)?);
    }

    Ok(movies)
}

impl Catalog {
    /// Load and validate a catalog snapshot from a data file.
    ///
    /// This is the hard-failure path: an unreadable or malformed file
    /// surfaces before any engine setup is attempted.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let catalog = Catalog::new(parse_catalog(path)?);
        catalog.validate()?;
        Ok(catalog)
    }
}
