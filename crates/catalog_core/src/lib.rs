//! Client core for a remote movie catalog: transport, draft validation, the
//! authoritative in-memory list, and the editing/confirmation state machines.
//! Rendering and input collection belong to the binaries.

pub mod draft;
pub mod error;
pub mod remote;
pub mod session;
pub mod store;

pub use draft::{DraftField, MovieDraft};
pub use error::{CatalogError, ValidationError};
pub use remote::{CatalogApi, RemoteCatalogClient};
pub use session::{DeleteConfirmation, EditingSession, EditorState, SubmitOutcome};
pub use store::CatalogStore;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod lib_tests;
