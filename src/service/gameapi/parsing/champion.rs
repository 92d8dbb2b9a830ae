use json::JsonValue;

use crate::model::champion::Champion;

use super::{data_object, parse_image, ParsingError};

pub fn parse_champions(json: &JsonValue) -> Result<Vec<Champion>, ParsingError> {
    data_object(json)?
        .iter()
        .map(|(_, champ_entry)| parse_champ_obj(champ_entry))
        .collect()
}

fn parse_champ_obj(obj: &JsonValue) -> Result<Champion, ParsingError> {
    if !obj.is_object() {
        return Err(ParsingError::InvalidType("champ entry".into()));
    }

    let id = obj["id"].as_str().ok_or(ParsingError::InvalidType("id".into()))?;
    let key = obj["key"].as_str().ok_or(ParsingError::InvalidType("key".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let image = parse_image(&obj["image"])?;

    Ok(Champion {
        id: id.into(),
        key: key.to_string(),
        name: name.to_string(),
        image,
    })
}
