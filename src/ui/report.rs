use crossterm::style::Stylize;
use itertools::Itertools;

use crate::model::randomizer::RandomizedResult;

/// Label and value rows for one player's roll, in display order.
pub fn describe(result: &RandomizedResult) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Champion", result.champion.asset.name.clone())];

    if let Some(lane) = &result.lane {
        rows.push(("Lane", lane.name.clone()));
    }
    if let Some(items) = &result.items {
        rows.push(("Items", items.iter().map(|item| &item.asset.name).join(", ")));
    }
    if let Some(spells) = &result.summoner_spells {
        rows.push(("Spells", spells.iter().map(|spell| &spell.asset.name).join(", ")));
    }
    if let Some(runes) = &result.runes {
        rows.push(("Runes", runes.iter().map(|tree| &tree.asset.name).join(" / ")));
    }

    let rerolls = if result.can_reroll() {
        format!("{} of {} left", result.amount_of_rerolls_left, result.amount_of_rerolls)
    } else {
        "none left".to_string()
    };
    rows.push(("Rerolls", rerolls));
    rows
}

/// Every icon URL a result refers to.
pub fn icon_urls(result: &RandomizedResult) -> Vec<String> {
    let items = result.items.iter().flatten().map(|item| item.icon_url.clone());
    let spells = result.summoner_spells.iter().flatten().map(|spell| spell.icon_url.clone());
    let runes = result.runes.iter().flatten().map(|tree| tree.icon_url.clone());

    std::iter::once(result.champion.icon_url.clone())
        .chain(items)
        .chain(spells)
        .chain(runes)
        .collect()
}

pub fn print_result(player: usize, result: &RandomizedResult) {
    println!("{}", format!("Player {}", player).bold().cyan());
    for (label, value) in describe(result) {
        println!("  {:<9} {}", label.dark_grey(), value);
    }
}

pub fn print_team(team: &[RandomizedResult]) {
    for (index, result) in team.iter().enumerate() {
        print_result(index + 1, result);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{lane::all_lanes, randomizer::WithIcon},
        service::testing::{champion, item, spell},
    };

    fn result() -> RandomizedResult {
        RandomizedResult {
            champion: WithIcon::new(champion("Ahri"), "champ/Ahri.png".to_string()),
            items: Some(vec![
                WithIcon::new(item("3031", &[]), "item/3031.png".to_string()),
                WithIcon::new(item("3006", &["Boots"]), "item/3006.png".to_string()),
            ]),
            summoner_spells: Some(vec![WithIcon::new(spell("SummonerFlash", &["CLASSIC"]), "spell/flash.png".to_string())]),
            runes: None,
            lane: Some(all_lanes()[2].clone()),
            amount_of_rerolls_left: 2,
            amount_of_rerolls: 3,
        }
    }

    #[test]
    fn rows_skip_disabled_parts() {
        let rows = describe(&result());
        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();

        assert_eq!(labels, vec!["Champion", "Lane", "Items", "Spells", "Rerolls"]);
        assert_eq!(rows[0].1, "Ahri");
        assert_eq!(rows[2].1, "Item 3031, Item 3006");
        assert_eq!(rows[3].1, "Flash");
        assert_eq!(rows[1].1, "Mid");
        assert_eq!(rows[4].1, "2 of 3 left");
    }

    #[test]
    fn spent_budget_is_shown_as_none_left() {
        let spent = RandomizedResult {
            amount_of_rerolls_left: 0,
            ..result()
        };
        let rows = describe(&spent);
        assert_eq!(rows.last().unwrap(), &("Rerolls", "none left".to_string()));
    }

    #[test]
    fn icon_urls_start_with_champion() {
        assert_eq!(
            icon_urls(&result()),
            vec!["champ/Ahri.png", "item/3031.png", "item/3006.png", "spell/flash.png"]
        );
    }
}
