use serde::{Deserialize, Serialize};

use super::{ids::RuneTreeId, image::Image};

/// A rune tree (Precision, Domination, ...), not an individual rune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneTree {
    pub id: RuneTreeId,
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    /// Icon path relative to the unversioned image root.
    pub icon: String,
    pub image: Option<Image>,
}
