use armory_model::{Character, TextOrList, Weapon};
use serde_json::json;

#[test]
fn character_decodes_camel_case_wire_names() {
    let raw = json!({
        "id": "yinlin",
        "name": "Yinlin",
        "rarity": 5,
        "element": "Electro",
        "weaponType": "Rectifier",
        "combatRoles": ["Main DPS", "Coordinated Attack"],
        "affiliations": "New Federation",
        "statsByLevel": {
            "20": { "hp": 2250.4, "atk": 150.2, "def": 95.8 },
            "50": { "hp": 5400.0, "atk": 360.0, "def": 230.0 },
            "90": { "hp": 10_875.0, "atk": 725.0, "def": 462.0 }
        },
        "lastUpdated": "2026-08-01T00:00:00Z"
    });
    let character: Character = serde_json::from_value(raw).expect("decode character");
    assert_eq!(character.weapon_type.as_deref(), Some("Rectifier"));
    assert_eq!(
        character.affiliations,
        Some(TextOrList::One("New Federation".to_string()))
    );
    let stats = character.stats_by_level.expect("stats");
    assert_eq!(stats["20"].hp, 2250.4);
}

#[test]
fn whole_valued_stats_serialize_as_integers() {
    let raw = json!({
        "id": "yinlin",
        "name": "Yinlin",
        "statsByLevel": {
            "20": { "hp": 2250.0, "atk": 150.0, "def": 95.5 },
            "50": { "hp": 5400.0, "atk": 360.0, "def": 230.0 },
            "90": { "hp": 10875.0, "atk": 725.0, "def": 462.0 }
        }
    });
    let character: Character = serde_json::from_value(raw).expect("decode");
    let out = serde_json::to_string(&character).expect("encode");
    assert!(out.contains("\"hp\":2250"), "whole hp stays integral: {out}");
    assert!(!out.contains("2250.0"), "no trailing .0 on whole values: {out}");
    assert!(out.contains("95.5"), "fractional values survive: {out}");
}

#[test]
fn absent_optionals_are_omitted_from_output() {
    let character: Character =
        serde_json::from_value(json!({ "id": "yinlin", "name": "Yinlin" })).expect("decode");
    let out = serde_json::to_value(&character).expect("encode");
    let obj = out.as_object().expect("object");
    assert_eq!(obj.len(), 2, "only id and name serialize: {out}");
}

#[test]
fn weapon_wire_type_field_round_trips() {
    let raw = json!({
        "id": "verity",
        "name": "Verity",
        "rarity": 5,
        "type": "Rectifier",
        "statsByLevel": {
            "20": { "atk": 50.0, "critRate": "5%" },
            "50": { "atk": 110.0 },
            "90": { "atk": 225.0 }
        },
        "passive": {
            "name": "Verity's Edge",
            "descriptionMdByRank": { "1": "ATK +12%", "5": "ATK +24%" }
        }
    });
    let weapon: Weapon = serde_json::from_value(raw).expect("decode weapon");
    assert_eq!(weapon.weapon_type.as_deref(), Some("Rectifier"));
    let out = serde_json::to_value(&weapon).expect("encode");
    assert_eq!(out["type"], json!("Rectifier"));
    assert_eq!(out["statsByLevel"]["20"]["critRate"], json!("5%"));
}

#[test]
fn weapon_null_metadata_decodes_to_none() {
    let raw = json!({
        "id": "verity",
        "name": "Verity",
        "rarity": null,
        "type": null,
        "passive": null
    });
    let weapon: Weapon = serde_json::from_value(raw).expect("decode");
    assert!(weapon.rarity.is_none());
    assert!(weapon.weapon_type.is_none());
    assert!(weapon.passive.is_none());
}
