use std::collections::BTreeMap;

use json::JsonValue;

use crate::model::item::Item;

use super::{data_object, parse_image, parse_string_list, ParsingError};

/// Parses `item.json`. The feed keys items by id without repeating the id in
/// the entry, so the key is copied into each parsed item.
pub fn parse_items(json: &JsonValue) -> Result<Vec<Item>, ParsingError> {
    data_object(json)?
        .iter()
        .map(|(item_id, item_entry)| parse_item_obj(item_id, item_entry))
        .collect()
}

fn parse_item_obj(item_id: &str, obj: &JsonValue) -> Result<Item, ParsingError> {
    if !obj.is_object() {
        return Err(ParsingError::InvalidType("item entry".into()));
    }

    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let into = parse_string_list(&obj["into"], "into")?
        .into_iter()
        .map(Into::into)
        .collect();
    let maps = parse_maps(&obj["maps"])?;
    let consumed = obj["consumed"].as_bool().unwrap_or(false);
    let tags = parse_string_list(&obj["tags"], "tags")?;
    let image = parse_image(&obj["image"])?;

    Ok(Item {
        id: item_id.into(),
        name: name.to_string(),
        into,
        maps,
        consumed,
        tags,
        image,
    })
}

fn parse_maps(json: &JsonValue) -> Result<BTreeMap<u32, bool>, ParsingError> {
    if let JsonValue::Object(maps) = json {
        maps.iter()
            .map(|(map_id, available)| {
                let map_id = map_id
                    .parse::<u32>()
                    .map_err(|_| ParsingError::InvalidType(format!("maps/{}", map_id)))?;
                let available = available
                    .as_bool()
                    .ok_or(ParsingError::InvalidType(format!("maps/{}", map_id)))?;
                Ok((map_id, available))
            })
            .collect()
    } else {
        Err(ParsingError::InvalidType("maps".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::ids::ItemId, service::gameapi::parsing::fixtures};

    #[test]
    fn injects_mapping_key_as_id() {
        let json = json::parse(fixtures::ITEMS).unwrap();
        let items = parse_items(&json).unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1001", "2003", "3006", "3031"]);
    }

    #[test]
    fn optional_fields_default() {
        let json = json::parse(fixtures::ITEMS).unwrap();
        let items = parse_items(&json).unwrap();

        let boots = &items[0];
        assert_eq!(boots.into, vec![ItemId::from("3006"), ItemId::from("3047")]);
        assert!(!boots.consumed);
        assert_eq!(boots.maps.get(&22), Some(&false));

        let potion = &items[1];
        assert!(potion.consumed);
        assert!(potion.into.is_empty());

        let edge = &items[3];
        assert!(edge.is_final_tier());
        assert!(edge.is_available_on(30));
    }

    #[test]
    fn non_numeric_map_id_is_rejected() {
        let json = json::parse(
            r#"{"data": {"3031": {"name": "x", "tags": [], "maps": {"rift": true},
                "image": {"full": "a", "sprite": "b", "group": "c", "x": 0, "y": 0, "w": 1, "h": 1}}}}"#,
        )
        .unwrap();
        assert!(matches!(parse_items(&json), Err(ParsingError::InvalidType(_))));
    }
}
