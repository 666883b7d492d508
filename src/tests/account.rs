use std::sync::Arc;

use serde_json::{json, Value};

use crate::prelude::*;

use super::mock::*;

fn account_api(permissions: &'static [&'static str], handler: impl Fn(&str) -> Option<Value> + Send + Sync + 'static) -> anyhow::Result<(Arc<MockTransport>, AccountApi)> {
    let mock = MockTransport::new(move |route| {
        account(route, permissions)
            .or_else(|| handler(route))
            .ok_or_else(|| not_found(route))
    });

    let api = AccountApi::with_connection(connection(&mock).with_api_key("secret"))?;

    Ok((mock, api))
}

#[test]
fn test_bootstrap() -> anyhow::Result<()> {
    let (mock, api) = account_api(&["account", "wallet"], |_| None)?;

    assert_eq!(api.name(), "Quaggan.1234");
    assert_eq!(api.world(), 1001);
    assert_eq!(api.guilds(), ["guild-id"]);

    assert!(api.has_permission("wallet"));
    assert!(!api.has_permission("unlocks"));

    let requests = mock.requests();

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].route, "tokeninfo");
    assert_eq!(requests[1].route, "account/");

    for request in requests {
        assert_eq!(request.authorization.as_deref(), Some("Bearer secret"));
    }

    Ok(())
}

#[test]
fn test_permission_gate() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["account", "inventories"], |route| Some(json!([route])))?;

    assert!(matches!(api.get_dyes(), Err(Error::Permission(scope)) if scope == "unlocks"));
    assert!(matches!(api.get_skins(), Err(Error::Permission(scope)) if scope == "unlocks"));
    assert!(matches!(api.get_minis(), Err(Error::Permission(scope)) if scope == "unlocks"));

    assert!(matches!(api.get_wallet(), Err(Error::Permission(_))));
    assert!(matches!(api.get_builds("Some Name"), Err(Error::Permission(_))));
    assert!(matches!(api.get_match_results("all"), Err(Error::Permission(_))));
    assert!(matches!(api.get_guild_members("guild-id"), Err(Error::Permission(_))));

    assert_eq!(mock.count(), 2);

    Ok(())
}

#[test]
fn test_bank_enrichment() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["inventories"], |route| match route {
        "account/bank" => Some(json!([
            { "id": 1, "count": 5 },
            null,
            { "id": 2, "count": 1 }
        ])),

        route => batch(route, "items", "Item")
    })?;

    let bank = api.get_bank()?;

    assert_eq!(bank.len(), 3);
    assert!(bank[1].is_none());

    for entry in bank.iter().flatten() {
        let item = entry.object.as_ref().expect("slot must be enriched");

        assert_eq!(item.id, entry.slot.id);
    }

    assert_eq!(bank[0].as_ref().map(|entry| entry.slot.count), Some(5));

    // Second call is served from the cache
    api.get_bank()?;

    assert_eq!(mock.routes()[2..], ["account/bank", "items?ids=1,2"]);

    Ok(())
}

#[test]
fn test_enriched_entry_serialization() -> anyhow::Result<()> {
    let (_, mut api) = account_api(&["inventories"], |route| match route {
        "account/materials" => Some(json!([{ "id": 7, "category": 5, "count": 250 }])),

        route => batch(route, "items", "Item")
    })?;

    let entry = serde_json::to_value(&api.get_materials()?[0])?;

    assert_eq!(entry["id"], 7);
    assert_eq!(entry["count"], 250);
    assert_eq!(entry["object"]["id"], 7);
    assert_eq!(entry["object"]["name"], "Item 7");

    Ok(())
}

#[test]
fn test_duplicate_ids_are_requested_once() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["inventories"], |route| match route {
        "account/inventory" => Some(json!([
            { "id": 4, "count": 1 },
            { "id": 4, "count": 250 },
            { "id": 3, "count": 1 }
        ])),

        route => batch(route, "items", "Item")
    })?;

    let inventory = api.get_inventory()?;

    assert!(inventory.iter().flatten().all(|entry| entry.object.is_some()));
    assert_eq!(mock.routes().last().map(String::as_str), Some("items?ids=4,3"));

    Ok(())
}

#[test]
fn test_empty_collection_short_circuits() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["inventories"], |route| match route {
        "account/bank" => Some(json!([])),
        _ => None
    })?;

    assert!(api.get_bank()?.is_empty());
    assert_eq!(mock.count(), 3);

    Ok(())
}

#[test]
fn test_bare_ids_are_resolved() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["unlocks"], |route| match route {
        "account/dyes" => Some(json!([1, 2])),

        route => batch(route, "colors", "Dye")
    })?;

    let dyes = api.get_dyes()?
        .iter()
        .map(|dye| dye.name.clone())
        .collect::<Vec<_>>();

    assert_eq!(dyes, ["Dye 1", "Dye 2"]);
    assert_eq!(mock.routes()[2..], ["account/dyes", "colors?ids=1,2"]);

    Ok(())
}

#[test]
fn test_characters_are_requested_by_name() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["characters"], |route| match route {
        "characters" => Some(json!(["Some Name"])),

        "characters?ids=Some%20Name" => Some(json!([{
            "name": "Some Name",
            "race": "Asura",
            "gender": "Female",
            "profession": "Engineer",
            "level": 80
        }])),

        _ => None
    })?;

    let characters = api.get_characters()?;

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].profession, "Engineer");
    assert_eq!(mock.count(), 4);

    Ok(())
}

#[test]
fn test_wallet_is_merged_by_id() -> anyhow::Result<()> {
    let (_, mut api) = account_api(&["wallet"], |route| match route {
        "currencies?ids=all" => Some(json!([
            { "id": 1, "name": "Coin" },
            { "id": 2, "name": "Karma" }
        ])),

        "account/wallet" => Some(json!([{ "id": 2, "value": 42 }])),

        _ => None
    })?;

    let wallet = api.get_wallet()?;

    assert_eq!(wallet.len(), 2);
    assert_eq!(wallet[0].count, None);
    assert_eq!(wallet[1].currency.name, "Karma");
    assert_eq!(wallet[1].count, Some(42));

    Ok(())
}

#[test]
fn test_empty_transactions_are_none() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["tradingpost"], |route| match route {
        "commerce/transactions/current/buys" => Some(json!([{
            "id": 1,
            "item_id": 19721,
            "price": 100,
            "quantity": 1,
            "created": "2015-08-08T22:00:00+00:00"
        }])),

        route if route.starts_with("commerce/transactions/") => Some(json!([])),

        _ => None
    })?;

    let history = api.get_trade_history()?.clone();

    assert_eq!(history.buying.map(|buying| buying.len()), Some(1));
    assert_eq!(history.selling, None);
    assert_eq!(history.bought, None);
    assert_eq!(history.sold, None);

    api.get_trade_history()?;

    assert_eq!(mock.count(), 6);

    Ok(())
}

#[test]
fn test_raids_stay_raw() -> anyhow::Result<()> {
    let (_, mut api) = account_api(&["progression"], |route| match route {
        "account/raids" => Some(json!(["vale_guardian", "gorseval"])),
        _ => None
    })?;

    assert_eq!(api.get_raids()?, ["vale_guardian", "gorseval"]);
    assert!(api.cache().raids.is_some());

    api.clear_cache();

    assert!(api.cache().raids.is_none());

    Ok(())
}

fn spec_json(id: u32, major_traits: &[u32]) -> Value {
    json!({
        "id": id,
        "name": format!("Specialization {id}"),
        "profession": "Guardian",
        "minor_traits": [id * 100],
        "major_traits": major_traits
    })
}

fn trait_json(id: &str, specialization: u32, minor: bool) -> Value {
    let slot = if minor { "Minor" } else { "Major" };

    json!({
        "id": id.parse::<u32>().unwrap(),
        "name": format!("Trait {id}"),
        "specialization": specialization,
        "tier": 1,
        "slot": slot
    })
}

#[test]
fn test_build_picks_selected_traits() -> anyhow::Result<()> {
    let (mock, api) = account_api(&["builds", "characters"], |route| match route {
        "characters/Some%20Name/specializations" => Some(json!({
            "specializations": {
                "pve": [{ "id": 1, "traits": [11, null] }, null],
                "pvp": [],
                "wvw": []
            }
        })),

        "specializations?ids=1" => Some(json!([spec_json(1, &[11, 12])])),

        route => ids_of(route, "traits").map(|ids| {
            ids.iter()
                .map(|id| trait_json(id, 1, id == "100"))
                .collect()
        })
    })?;

    let build = api.get_build("Some Name", GameMode::Pve)?;

    assert_eq!(build.len(), 1);
    assert_eq!(build[0].line.minors.len(), 1);
    assert_eq!(build[0].line.majors.len(), 2);
    assert_eq!(build[0].traits.iter().map(|spec_trait| spec_trait.id).collect::<Vec<_>>(), [11]);

    assert!(mock.routes().contains(&String::from("traits?ids=100,11,12")));

    let builds = api.get_builds("Some Name")?;

    assert_eq!(builds.len(), 3);
    assert_eq!(builds[&GameMode::Pve], build);
    assert!(builds[&GameMode::Wvw].is_empty());

    Ok(())
}

#[test]
fn test_concurrent_builds_skip_failures() {
    let mock = MockTransport::new(|route| {
        let ids = ids_of(route, "traits").ok_or_else(|| not_found(route))?;

        // Traits of the 7th specialization are missing
        if ids.contains(&String::from("700")) {
            return Err(not_found(route));
        }

        let specialization = ids[0].parse::<u32>().unwrap() / 100;

        Ok(Value::Array(ids.iter().map(|id| trait_json(id, specialization, id.ends_with("00"))).collect()))
    });

    let objects = (1..=12)
        .map(|id| spec_json(id, &[id * 100 + 1]))
        .collect::<Vec<_>>();

    let built = crate::pool::build_concurrently::<Specialization>(objects, &connection(&mock), 10);

    assert_eq!(built.len(), 11);
    assert!(!built.contains_key(&Id::Num(7)));

    for (id, spec) in built {
        assert_eq!(id, Id::from(spec.id));
        assert_eq!(spec.majors.len(), 1);
    }

    assert_eq!(mock.count(), 12);
}

#[test]
fn test_home_pvp_and_guild() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["progression", "pvp", "guilds"], |route| match route {
        "account/home/nodes" => Some(json!(["quartz_node", "garden_plot"])),
        "account/home/cats" => Some(json!([{ "id": 1, "hint": "chicken" }])),

        "pvp/stats" => Some(json!({
            "pvp_rank": 80,
            "aggregate": { "wins": 10, "losses": 5 },
            "professions": { "guardian": { "wins": 3 } },
            "ladders": { "ranked": { "wins": 7, "losses": 2 } }
        })),

        "guild/guild-id" => Some(json!({ "id": "guild-id", "name": "Quaggans", "tag": "QQ" })),
        "guild/guild-id/ranks" => Some(json!([{ "id": "Leader", "order": 1, "permissions": ["Admin"] }])),
        "guild/guild-id/members" => Some(json!([{ "name": "Quaggan.1234", "rank": "Leader" }])),

        _ => None
    })?;

    assert_eq!(api.get_nodes()?, ["quartz_node", "garden_plot"]);
    assert_eq!(api.get_cats()?[0].hint.as_deref(), Some("chicken"));

    let stats = api.get_pvp_stats()?;

    assert_eq!(stats.aggregate.wins, 10);
    assert_eq!(stats.aggregate.desertions, 0);
    assert_eq!(stats.ladders["ranked"].losses, 2);

    assert_eq!(api.get_guild("guild-id")?.tag, "QQ");
    assert_eq!(api.get_guild_ranks("guild-id")?[0].id, "Leader");
    assert_eq!(api.get_guild_members("guild-id")?[0].rank, "Leader");

    // Stats are cached
    api.get_pvp_stats()?;

    assert_eq!(mock.count(), 8);

    Ok(())
}

#[test]
fn test_empty_slots_are_kept() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["inventories"], |route| match route {
        "account/bank" => Some(json!([null, null, null])),
        "account/inventory" => Some(json!([null])),
        _ => None
    })?;

    let bank = api.get_bank()?;

    assert_eq!(bank.len(), 3);
    assert!(bank.iter().all(Option::is_none));

    let inventory = api.get_inventory()?;

    assert_eq!(inventory.len(), 1);
    assert!(inventory[0].is_none());

    // No catalog requests for empty slots
    assert_eq!(mock.routes()[2..], ["account/bank", "account/inventory"]);

    Ok(())
}

#[test]
fn test_match_results() -> anyhow::Result<()> {
    let (mock, api) = account_api(&["pvp"], |route| match route {
        "pvp/games?ids=game-1,game-2" => Some(json!([
            { "id": "game-1", "map_id": 894, "result": "Victory", "team": "Red" },
            { "id": "game-2", "map_id": 875, "result": "Defeat", "team": "Blue" }
        ])),

        _ => None
    })?;

    let games = api.get_match_results(["game-1", "game-2"])?.into_vec();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, "game-1");
    assert_eq!(games[1].result.as_deref(), Some("Defeat"));

    let request = mock.requests().pop().unwrap();

    assert_eq!(request.route, "pvp/games?ids=game-1,game-2");
    assert_eq!(request.authorization.as_deref(), Some("Bearer secret"));

    Ok(())
}

#[test]
fn test_progression_entries_are_enriched() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["progression", "unlocks"], |route| match route {
        "account/achievements" => Some(json!([
            { "id": 1, "current": 5, "max": 10, "done": false },
            { "id": 2, "done": true }
        ])),

        "account/masteries" => Some(json!([{ "id": 4, "level": 3 }])),
        "account/finishers" => Some(json!([{ "id": 9, "permanent": true }])),

        route => batch(route, "achievements", "Achievement")
            .or_else(|| batch(route, "masteries", "Mastery"))
            .or_else(|| batch(route, "finishers", "Finisher"))
    })?;

    let achievements = api.get_achievements()?;

    assert_eq!(achievements.len(), 2);
    assert!(achievements[1].slot.done);

    for entry in achievements {
        assert_eq!(entry.object.as_ref().map(|object| object.id), Some(entry.slot.id));
    }

    let masteries = api.get_masteries()?;

    assert_eq!(masteries[0].slot.level, 3);
    assert_eq!(masteries[0].object.as_ref().map(|object| object.name.as_str()), Some("Mastery 4"));

    let finishers = api.get_finishers()?;

    assert!(finishers[0].slot.permanent);
    assert_eq!(finishers[0].object.as_ref().map(|object| object.id), Some(9));

    assert_eq!(mock.routes()[2..], [
        "account/achievements", "achievements?ids=1,2",
        "account/masteries", "masteries?ids=4",
        "account/finishers", "finishers?ids=9"
    ]);

    Ok(())
}

#[test]
fn test_unlocked_ids_are_resolved() -> anyhow::Result<()> {
    let (mock, mut api) = account_api(&["progression", "unlocks"], |route| match route {
        "account/titles" => Some(json!([3, 1])),
        "account/outfits" => Some(json!([7])),
        "account/recipes" => Some(json!([12, 12, 13])),
        "account/dungeons" => Some(json!(["ac_story", "hodgins"])),

        route => batch(route, "titles", "Title")
            .or_else(|| batch(route, "outfits", "Outfit"))
            .or_else(|| batch(route, "recipes", "Recipe"))
    })?;

    let titles = api.get_titles()?
        .iter()
        .map(|title| title.name.clone())
        .collect::<Vec<_>>();

    assert_eq!(titles, ["Title 3", "Title 1"]);
    assert_eq!(api.get_outfits()?[0].name, "Outfit 7");

    let recipes = api.get_recipes()?
        .iter()
        .map(|recipe| recipe.id)
        .collect::<Vec<_>>();

    assert_eq!(recipes, [12, 13]);
    assert_eq!(api.get_dungeons()?, ["ac_story", "hodgins"]);

    // Everything is cached now
    api.get_titles()?;
    api.get_dungeons()?;

    assert_eq!(mock.routes()[2..], [
        "account/titles", "titles?ids=3,1",
        "account/outfits", "outfits?ids=7",
        "account/recipes", "recipes?ids=12,13",
        "account/dungeons"
    ]);

    Ok(())
}
