use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ids::ItemId, image::Image};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Items this one builds into, empty for final-tier items.
    pub into: Vec<ItemId>,
    /// Map id -> availability on that map.
    pub maps: BTreeMap<u32, bool>,
    pub consumed: bool,
    pub tags: Vec<String>,
    pub image: Image,
}

impl Item {
    pub fn is_available_on(&self, map_id: u32) -> bool {
        self.maps.get(&map_id).copied().unwrap_or(false)
    }

    pub fn is_final_tier(&self) -> bool {
        self.into.is_empty()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
