//! Movie records, the input of every aggregation
//!
//! Records are immutable once built. They come either from code (the
//! builder methods below) or from a JSON dataset (see [`parse`]).

pub mod parse;

pub use parse::{load_records, parse_records, RecordError, RecordResult};

use serde::Serialize;

/// One movie of the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub title: String,
    pub audience_count: u64,
    pub main_cast: Vec<String>,
    pub supporting_cast: Vec<String>,
    pub director: Option<String>,
    pub producers: Vec<String>,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, audience_count: u64) -> Self {
        MovieRecord {
            title: title.into(),
            audience_count,
            main_cast: Vec::new(),
            supporting_cast: Vec::new(),
            director: None,
            producers: Vec::new(),
        }
    }

    pub fn with_main_cast<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.main_cast = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_supporting_cast<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supporting_cast = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_producers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.producers = names.into_iter().map(Into::into).collect();
        self
    }

    /// Main cast followed by supporting cast, blanks dropped, each name once
    pub fn cast(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.main_cast.len() + self.supporting_cast.len());
        for name in self.main_cast.iter().chain(self.supporting_cast.iter()) {
            let name = name.trim();
            if !name.is_empty() && !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Director name, if present and not blank
    pub fn director_name(&self) -> Option<&str> {
        self.director
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
