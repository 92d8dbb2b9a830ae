use json::JsonValue;

use crate::model::spell::SummonerSpell;

use super::{data_object, parse_image, parse_string_list, ParsingError};

pub fn parse_summoner_spells(json: &JsonValue) -> Result<Vec<SummonerSpell>, ParsingError> {
    data_object(json)?
        .iter()
        .map(|(key, spell_entry)| parse_spell_obj(key, spell_entry))
        .collect()
}

fn parse_spell_obj(key: &str, obj: &JsonValue) -> Result<SummonerSpell, ParsingError> {
    if !obj.is_object() {
        return Err(ParsingError::InvalidType("spell entry".into()));
    }

    let id = obj["id"].as_str().unwrap_or(key);
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let description = obj["description"].as_str().unwrap_or_default();
    let modes = parse_string_list(&obj["modes"], "modes")?;
    let image = parse_image(&obj["image"])?;

    Ok(SummonerSpell {
        id: id.into(),
        name: name.to_string(),
        description: description.to_string(),
        modes,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::gameapi::parsing::fixtures;

    #[test]
    fn parses_modes() {
        let json = json::parse(fixtures::SUMMONER_SPELLS).unwrap();
        let spells = parse_summoner_spells(&json).unwrap();

        assert_eq!(spells.len(), 2);
        assert!(spells[0].supports_mode("ARAM"));
        assert!(!spells[1].supports_mode("ARAM"));
        assert_eq!(spells[1].image.full, "SummonerSmite.png");
    }
}
