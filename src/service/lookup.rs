use std::{collections::HashMap, fmt};

use crate::model::{
    champion::Champion,
    ids::{ChampionId, ItemId, RuneTreeId, SpellId},
    item::Item,
    rune::RuneTree,
    snapshot::AssetSnapshot,
    spell::SummonerSpell,
};

/// Id based access to the entities of one snapshot.
pub struct LookupService<'a> {
    champs: HashMap<&'a ChampionId, &'a Champion>,
    items: HashMap<&'a ItemId, &'a Item>,
    spells: HashMap<&'a SpellId, &'a SummonerSpell>,
    rune_trees: HashMap<RuneTreeId, &'a RuneTree>,
}

impl<'a> LookupService<'a> {
    pub fn new(snapshot: &'a AssetSnapshot) -> Self {
        Self {
            champs: snapshot.champions.iter().map(|c| (&c.id, c)).collect(),
            items: snapshot.items.iter().map(|i| (&i.id, i)).collect(),
            spells: snapshot.summoner_spells.iter().map(|s| (&s.id, s)).collect(),
            rune_trees: snapshot.runes.iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn get_champion(&self, id: &ChampionId) -> Result<&'a Champion, IdNotFoundError> {
        match self.champs.get(id) {
            Some(champ) => Ok(*champ),
            None => Err(IdNotFoundError::Champ(id.clone())),
        }
    }

    pub fn get_item(&self, id: &ItemId) -> Result<&'a Item, IdNotFoundError> {
        match self.items.get(id) {
            Some(item) => Ok(*item),
            None => Err(IdNotFoundError::Item(id.clone())),
        }
    }

    pub fn get_summoner_spell(&self, id: &SpellId) -> Result<&'a SummonerSpell, IdNotFoundError> {
        match self.spells.get(id) {
            Some(spell) => Ok(*spell),
            None => Err(IdNotFoundError::Spell(id.clone())),
        }
    }

    pub fn get_rune_tree(&self, id: RuneTreeId) -> Result<&'a RuneTree, IdNotFoundError> {
        match self.rune_trees.get(&id) {
            Some(tree) => Ok(*tree),
            None => Err(IdNotFoundError::RuneTree(id)),
        }
    }

    /// Resolves the upgrade targets of an item, skipping ids the snapshot does not know.
    pub fn upgrades_of(&self, item: &Item) -> Vec<&'a Item> {
        item.into.iter().filter_map(|id| self.get_item(id).ok()).collect()
    }
}

#[derive(Debug)]
pub enum IdNotFoundError {
    Champ(ChampionId),
    Item(ItemId),
    Spell(SpellId),
    RuneTree(RuneTreeId),
}

impl fmt::Display for IdNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdNotFoundError::Champ(id) => write!(f, "Champion ID not found: {}", id),
            IdNotFoundError::Item(id) => write!(f, "Item ID not found: {}", id),
            IdNotFoundError::Spell(id) => write!(f, "Summoner spell ID not found: {}", id),
            IdNotFoundError::RuneTree(id) => write!(f, "Rune tree ID not found: {}", id),
        }
    }
}

impl std::error::Error for IdNotFoundError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{item, sample_snapshot};

    #[test]
    fn finds_entities_by_id() {
        let snapshot = sample_snapshot("14.1.1");
        let lookup = LookupService::new(&snapshot);

        assert_eq!(lookup.get_champion(&"Ahri".into()).unwrap().name, "Ahri");
        assert_eq!(lookup.get_item(&"3031".into()).unwrap().tags[0], "Damage");
        assert_eq!(lookup.get_summoner_spell(&"SummonerSmite".into()).unwrap().name, "Smite");
        assert_eq!(lookup.get_rune_tree(RuneTreeId::from(8100)).unwrap().key, "Domination");
    }

    #[test]
    fn unknown_ids_are_errors() {
        let snapshot = sample_snapshot("14.1.1");
        let lookup = LookupService::new(&snapshot);

        let err = lookup.get_champion(&"Teemo".into()).unwrap_err();
        assert_eq!(err.to_string(), "Champion ID not found: Teemo");
        assert!(matches!(
            lookup.get_rune_tree(RuneTreeId::from(9999)),
            Err(IdNotFoundError::RuneTree(_))
        ));
    }

    #[test]
    fn resolves_known_upgrades_only() {
        let mut snapshot = sample_snapshot("14.1.1");
        let mut component = item("1038", &["Damage"]);
        component.into = vec!["3031".into(), "9999".into()];
        snapshot.items.push(component.clone());
        let lookup = LookupService::new(&snapshot);

        let upgrades = lookup.upgrades_of(&component);
        assert_eq!(upgrades.len(), 1);
        assert_eq!(upgrades[0].id.as_str(), "3031");
    }
}
