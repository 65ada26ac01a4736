use shared::protocol::{MoviePayload, MovieRecord};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Director,
    Year,
    Rating,
}

/// In-progress editable form of a record. Every field is text so the user
/// can type freely; typing never validates, submission does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: String,
    pub rating: String,
}

impl MovieDraft {
    /// Empty form for a new record, or the record's fields rendered as text
    /// for editing.
    pub fn from_record(record: Option<&MovieRecord>) -> Self {
        match record {
            Some(record) => Self {
                title: record.title.clone(),
                director: record.director.clone(),
                year: record.year.to_string(),
                rating: record.rating.to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Director => self.director = value,
            DraftField::Year => self.year = value,
            DraftField::Rating => self.rating = value,
        }
    }

    /// Coerces the draft into a submittable payload. Title, director, and
    /// year are required; a blank or malformed rating falls back to zero
    /// since ratings are optional.
    pub fn validate(&self) -> Result<MoviePayload, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.director.trim().is_empty() {
            return Err(ValidationError::MissingDirector);
        }
        let year = self.year.trim();
        if year.is_empty() {
            return Err(ValidationError::MissingYear);
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidYear)?;
        let rating = self.rating.trim().parse::<i32>().unwrap_or(0);
        Ok(MoviePayload {
            title: self.title.clone(),
            director: self.director.clone(),
            year,
            rating,
        })
    }
}
