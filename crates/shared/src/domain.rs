use serde::{Deserialize, Serialize};

/// Catalog identity assigned by the remote service; never minted client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(pub i64);
