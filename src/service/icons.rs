//! Icon URL templates of the data feed's image CDN.
//!
//! Champion, item and spell images live under a versioned path, rune tree icons
//! under a global one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconUrls {
    base_url: String,
    version: String,
}

impl IconUrls {
    pub fn new(base_url: &str, version: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.to_string(),
        }
    }

    pub fn champion(&self, image: &str) -> String {
        format!("{}/cdn/{}/img/champion/{}", self.base_url, self.version, image)
    }

    pub fn item(&self, image: &str) -> String {
        format!("{}/cdn/{}/img/item/{}", self.base_url, self.version, image)
    }

    pub fn summoner_spell(&self, image: &str) -> String {
        format!("{}/cdn/{}/img/spell/{}", self.base_url, self.version, image)
    }

    pub fn rune_tree(&self, icon_path: &str) -> String {
        format!("{}/cdn/img/{}", self.base_url, icon_path)
    }
}
