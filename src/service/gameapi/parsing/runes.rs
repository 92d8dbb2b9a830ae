use json::JsonValue;

use crate::model::rune::RuneTree;

use super::{parse_image, ParsingError};

/// Parses `runesReforged.json`, a bare array of rune trees.
pub fn parse_rune_trees(json: &JsonValue) -> Result<Vec<RuneTree>, ParsingError> {
    if let JsonValue::Array(array) = json {
        array.iter().map(parse_tree_obj).collect()
    } else {
        Err(ParsingError::InvalidType("root".into()))
    }
}

fn parse_tree_obj(obj: &JsonValue) -> Result<RuneTree, ParsingError> {
    if !obj.is_object() {
        return Err(ParsingError::InvalidType("rune tree entry".into()));
    }

    let id = obj["id"].as_i32().ok_or(ParsingError::InvalidType("id".into()))?;
    let key = obj["key"].as_str().ok_or(ParsingError::InvalidType("key".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let icon = obj["icon"].as_str().ok_or(ParsingError::InvalidType("icon".into()))?;
    let description = obj["description"].as_str().map(str::to_string);
    let image = match &obj["image"] {
        JsonValue::Null => None,
        image => Some(parse_image(image)?),
    };

    Ok(RuneTree {
        id: id.into(),
        key: key.to_string(),
        name: name.to_string(),
        description,
        icon: icon.to_string(),
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::ids::RuneTreeId, service::gameapi::parsing::fixtures};

    #[test]
    fn parses_trees_without_image() {
        let json = json::parse(fixtures::RUNE_TREES).unwrap();
        let trees = parse_rune_trees(&json).unwrap();

        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].id, RuneTreeId::from(8100));
        assert_eq!(trees[0].icon, "perk-images/Styles/7200_Domination.png");
        assert!(trees[0].image.is_none());
        assert!(trees[0].description.is_none());
    }

    #[test]
    fn object_root_is_rejected() {
        let json = json::parse(fixtures::CHAMPIONS).unwrap();
        assert!(parse_rune_trees(&json).is_err());
    }
}
