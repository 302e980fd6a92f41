//! `Movie`: a record whose fields may each be missing.
//!
//! Unset fields are left out of the JSON form entirely rather than written as
//! `null` or an empty value, and a rating outside 1..=5 is rejected wherever
//! one enters the record.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        let rating = match value {
            1 => Rating::One,
            2 => Rating::Two,
            3 => Rating::Three,
            4 => Rating::Four,
            5 => Rating::Five,
            other => {
                warn!("rejected movie rating {}", other);
                return Err(Error::InvalidRating(other));
            }
        };
        Ok(rating)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequel: Option<String>,
}

impl Movie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_release_year(mut self, year: i64) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets `comments` to an empty list when it is still unset.
    pub fn with_no_comments(mut self) -> Self {
        self.comments.get_or_insert_with(Vec::new);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments
            .get_or_insert_with(Vec::new)
            .push(comment.into());
        self
    }

    pub fn with_sequel(mut self, sequel: impl Into<String>) -> Self {
        self.sequel = Some(sequel.into());
        self
    }

    /// Checked setter for a raw integer rating.
    pub fn set_rating(&mut self, rating: i64) -> Result<()> {
        self.rating = Some(Rating::try_from(rating)?);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            bail!("empty movie document");
        }
        let movie = serde_json::from_str(source)
            .map_err(|err| eyre::eyre!("failed to parse movie document: {}", err))?;
        Ok(movie)
    }
}

/// The tour's literal movie: everything but `sequel` is filled in.
pub fn example_movie() -> Movie {
    Movie::new()
        .with_title("Star Wars: A New Hope")
        .with_release_year(1977)
        .with_rating(Rating::Five)
        .with_no_comments()
}
