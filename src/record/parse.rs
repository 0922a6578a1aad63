//! Dataset parsing and validation
//!
//! Datasets are JSON arrays of movie objects. Field names follow either the
//! crate's own snake/camel case or the keys of the public box-office export
//! (`영화명`, `관객수`, `actor_main_name`, `actor_sub_name`, `coach`, `maker`).
//! A JavaScript data file of the form `const movies = [ ... ];` is accepted
//! too; the array literal is cut out of it.

use super::MovieRecord;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while reading a dataset
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid audience count {value:?} for movie {title:?}")]
    InvalidAudienceCount { title: String, value: String },

    #[error("Movie at index {index} has no title")]
    MissingTitle { index: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RecordResult<T> = Result<T, RecordError>;

/// Audience count as it appears in the wild: a number or `"1,234,567"`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AudienceField {
    Count(u64),
    Text(String),
    Other(serde_json::Value),
}

impl AudienceField {
    fn parse(self, title: &str) -> RecordResult<u64> {
        match self {
            AudienceField::Count(n) => Ok(n),
            AudienceField::Text(text) => {
                let digits: String = text
                    .chars()
                    .filter(|c| *c != ',' && !c.is_whitespace())
                    .collect();
                digits
                    .parse::<u64>()
                    .map_err(|_| RecordError::InvalidAudienceCount {
                        title: title.to_string(),
                        value: text,
                    })
            }
            AudienceField::Other(value) => Err(RecordError::InvalidAudienceCount {
                title: title.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawMovieRecord {
    #[serde(default, alias = "영화명", alias = "movieNm")]
    title: Option<String>,

    #[serde(default, alias = "audienceCount", alias = "관객수", alias = "audiAcc")]
    audience_count: Option<AudienceField>,

    #[serde(default, alias = "mainCast", alias = "actor_main_name")]
    main_cast: Option<Vec<Option<String>>>,

    #[serde(default, alias = "supportingCast", alias = "actor_sub_name")]
    supporting_cast: Option<Vec<Option<String>>>,

    #[serde(default, alias = "coach")]
    director: Option<String>,

    #[serde(default, alias = "maker")]
    producers: Option<Vec<Option<String>>>,
}

/// Null entries and blank names are dropped, a missing list is empty
fn clean_names(names: Option<Vec<Option<String>>>, title: &str, field: &str) -> Vec<String> {
    let names = names.unwrap_or_default();
    let total = names.len();
    let kept: Vec<String> = names
        .into_iter()
        .flatten()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    if kept.len() < total {
        warn!(
            "Movie {:?}: skipped {} null or blank {} entries",
            title,
            total - kept.len(),
            field
        );
    }
    kept
}

impl RawMovieRecord {
    fn validate(self, index: usize) -> RecordResult<MovieRecord> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(RecordError::MissingTitle { index })?;

        let audience_count = match self.audience_count {
            Some(field) => field.parse(&title)?,
            None => {
                debug!("Movie {:?} has no audience count, using 0", title);
                0
            }
        };

        let main_cast = clean_names(self.main_cast, &title, "main cast");
        let supporting_cast = clean_names(self.supporting_cast, &title, "supporting cast");
        let producers = clean_names(self.producers, &title, "producer");
        Ok(MovieRecord {
            title,
            audience_count,
            main_cast,
            supporting_cast,
            director: self
                .director
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            producers,
        })
    }
}

/// Read the movie array, either a bare JSON document or the literal of
/// `const movies = [ ... ];`
///
/// For the script form the deserializer stops at the array's closing
/// bracket, so the `;` and any trailing comments are never looked at.
fn raw_records(text: &str) -> serde_json::Result<Vec<RawMovieRecord>> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed);
    }
    let assigned = trimmed.find('=').map_or(0, |i| i + 1);
    let start = trimmed[assigned..]
        .find('[')
        .map_or(assigned, |i| assigned + i);
    let mut de = serde_json::Deserializer::from_str(&trimmed[start..]);
    Vec::<RawMovieRecord>::deserialize(&mut de)
}

/// Parse a dataset held in memory
pub fn parse_records(text: &str) -> RecordResult<Vec<MovieRecord>> {
    let raw = raw_records(text)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

/// Read and parse a dataset file
pub fn load_records(path: impl AsRef<Path>) -> RecordResult<Vec<MovieRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    info!("Loaded {} movies from {:?}", records.len(), path);
    Ok(records)
}
