use std::fmt;

use json::JsonValue;

use crate::model::image::Image;

pub mod champion;
pub mod item;
pub mod runes;
pub mod summoner;
pub mod versions;

#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
    InvalidJson(json::Error),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidType(field) => write!(f, "Unexpected type or missing field: {}", field),
            ParsingError::InvalidJson(err) => write!(f, "Invalid JSON: {}", err),
        }
    }
}

impl std::error::Error for ParsingError {}

impl From<json::Error> for ParsingError {
    fn from(error: json::Error) -> Self {
        ParsingError::InvalidJson(error)
    }
}

/// Returns the `data` object the champion, item and summoner documents wrap their entries in.
pub(crate) fn data_object(json: &JsonValue) -> Result<&json::object::Object, ParsingError> {
    match &json["data"] {
        JsonValue::Object(data) => Ok(data),
        _ => Err(ParsingError::InvalidType("data".into())),
    }
}

pub(crate) fn parse_string_list(json: &JsonValue, field: &str) -> Result<Vec<String>, ParsingError> {
    if json.is_null() {
        return Ok(Vec::new());
    }
    if !json.is_array() {
        return Err(ParsingError::InvalidType(field.into()));
    }

    json.members()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or(ParsingError::InvalidType(format!("{} entry", field)))
        })
        .collect()
}

pub(crate) fn parse_image(json: &JsonValue) -> Result<Image, ParsingError> {
    if !json.is_object() {
        return Err(ParsingError::InvalidType("image".into()));
    }

    let text = |field: &str| {
        json[field]
            .as_str()
            .map(str::to_string)
            .ok_or(ParsingError::InvalidType(format!("image/{}", field)))
    };
    let number = |field: &str| {
        json[field]
            .as_u32()
            .ok_or(ParsingError::InvalidType(format!("image/{}", field)))
    };

    Ok(Image {
        full: text("full")?,
        group: text("group")?,
        sprite: text("sprite")?,
        h: number("h")?,
        w: number("w")?,
        x: number("x")?,
        y: number("y")?,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const VERSIONS: &str = r#"["14.1.1", "13.24.1", "13.23.1"]"#;

    pub const CHAMPIONS: &str = r#"{
        "type": "champion",
        "version": "14.1.1",
        "data": {
            "Aatrox": {
                "version": "14.1.1",
                "id": "Aatrox",
                "key": "266",
                "name": "Aatrox",
                "title": "the Darkin Blade",
                "image": {"full": "Aatrox.png", "sprite": "champion0.png", "group": "champion", "x": 0, "y": 0, "w": 48, "h": 48},
                "tags": ["Fighter", "Tank"]
            },
            "Ahri": {
                "version": "14.1.1",
                "id": "Ahri",
                "key": "103",
                "name": "Ahri",
                "title": "the Nine-Tailed Fox",
                "image": {"full": "Ahri.png", "sprite": "champion0.png", "group": "champion", "x": 48, "y": 0, "w": 48, "h": 48},
                "tags": ["Mage", "Assassin"]
            }
        }
    }"#;

    pub const ITEMS: &str = r#"{
        "type": "item",
        "version": "14.1.1",
        "data": {
            "1001": {
                "name": "Boots",
                "into": ["3006", "3047"],
                "image": {"full": "1001.png", "sprite": "item0.png", "group": "item", "x": 0, "y": 0, "w": 48, "h": 48},
                "tags": ["Boots"],
                "maps": {"11": true, "12": true, "21": true, "22": false, "30": false}
            },
            "2003": {
                "name": "Health Potion",
                "image": {"full": "2003.png", "sprite": "item0.png", "group": "item", "x": 48, "y": 0, "w": 48, "h": 48},
                "consumed": true,
                "tags": ["Consumable"],
                "maps": {"11": true, "12": true, "30": false}
            },
            "3006": {
                "name": "Berserker's Greaves",
                "from": ["1001", "1042"],
                "image": {"full": "3006.png", "sprite": "item0.png", "group": "item", "x": 96, "y": 0, "w": 48, "h": 48},
                "tags": ["AttackSpeed", "Boots"],
                "maps": {"11": true, "12": true, "30": false}
            },
            "3031": {
                "name": "Infinity Edge",
                "image": {"full": "3031.png", "sprite": "item1.png", "group": "item", "x": 0, "y": 0, "w": 48, "h": 48},
                "tags": ["Damage", "CriticalStrike"],
                "maps": {"11": true, "12": true, "30": true}
            }
        }
    }"#;

    pub const SUMMONER_SPELLS: &str = r#"{
        "type": "summoner",
        "version": "14.1.1",
        "data": {
            "SummonerFlash": {
                "id": "SummonerFlash",
                "name": "Flash",
                "description": "Teleports your champion a short distance toward your cursor's location.",
                "key": "4",
                "modes": ["CLASSIC", "ARAM", "BRAWL"],
                "image": {"full": "SummonerFlash.png", "sprite": "spell0.png", "group": "spell", "x": 0, "y": 0, "w": 48, "h": 48}
            },
            "SummonerSmite": {
                "id": "SummonerSmite",
                "name": "Smite",
                "description": "Deals true damage to target epic, large, or medium monster or enemy minion.",
                "key": "11",
                "modes": ["CLASSIC"],
                "image": {"full": "SummonerSmite.png", "sprite": "spell0.png", "group": "spell", "x": 48, "y": 0, "w": 48, "h": 48}
            }
        }
    }"#;

    pub const RUNE_TREES: &str = r#"[
        {"id": 8100, "key": "Domination", "icon": "perk-images/Styles/7200_Domination.png", "name": "Domination", "slots": []},
        {"id": 8300, "key": "Inspiration", "icon": "perk-images/Styles/7203_Whimsy.png", "name": "Inspiration", "slots": []}
    ]"#;
}
