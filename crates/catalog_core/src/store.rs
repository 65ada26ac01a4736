use std::sync::Arc;

use shared::{
    domain::MovieId,
    protocol::{MoviePayload, MovieRecord},
};
use tracing::{debug, warn};

use crate::{error::CatalogError, remote::CatalogApi};

/// Owns the authoritative in-memory view of the catalog. Every record in the
/// list was confirmed by the service; mutations reconcile by re-fetching,
/// never by patching the list locally.
///
/// All mutating operations take `&mut self`, so no two of them can be in
/// flight against the same store at once.
pub struct CatalogStore {
    api: Arc<dyn CatalogApi>,
    movies: Vec<MovieRecord>,
}

impl CatalogStore {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            movies: Vec::new(),
        }
    }

    /// Records in the order the service last returned them.
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Replaces the whole list with the service's current catalog. On
    /// failure the previous list is kept untouched.
    pub async fn refresh(&mut self) -> Result<(), CatalogError> {
        let movies = match self.api.list().await {
            Ok(movies) => movies,
            Err(err) => {
                warn!("catalog refresh failed: {err}");
                return Err(CatalogError::Load(err.to_string()));
            }
        };
        debug!(count = movies.len(), "catalog refreshed");
        self.movies = movies;
        Ok(())
    }

    /// Persists the payload, replacing `target` when present and creating
    /// otherwise, then re-derives the list from the service. The refresh runs
    /// only after the mutation is acknowledged.
    pub async fn submit(
        &mut self,
        target: Option<MovieId>,
        payload: &MoviePayload,
    ) -> Result<(), CatalogError> {
        let result = match target {
            Some(id) => self.api.update(id, payload).await,
            None => self.api.create(payload).await,
        };
        if let Err(err) = result {
            warn!("catalog save failed: {err}");
            return Err(CatalogError::Save(err.to_string()));
        }
        self.refresh().await
    }

    /// Deletes `id` on the service, then re-derives the list. Callers gate
    /// this behind [`DeleteConfirmation`](crate::session::DeleteConfirmation).
    pub async fn remove(&mut self, id: MovieId) -> Result<(), CatalogError> {
        if let Err(err) = self.api.delete(id).await {
            warn!("catalog delete failed: {err}");
            return Err(CatalogError::Delete(err.to_string()));
        }
        self.refresh().await
    }
}
