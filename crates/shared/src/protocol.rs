use serde::{Deserialize, Serialize};

use crate::domain::MovieId;

/// One element of the `GET /movies` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: i32,
}

/// Body for create and replace requests; the id stays server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: i32,
}
