use std::collections::HashSet;

use fabula_core::{
    Ability, AbilityDamage, Actor, AlchemyRequest, AttributeKind, AttributePair, Attributes,
    BehaviorData, CheckRequest, DiceSource, Item, ItemKind, PcgDice, RollInfo, Ruleset,
    ScriptedDice, UseWeapon, WeaponData, enumerate_outcomes, resolve_named, roll_alchemy,
    roll_behavior, roll_check, roll_initiative,
};

fn sword() -> Item {
    Item::new(
        1,
        "Bronze Sword",
        ItemKind::Weapon(WeaponData {
            attributes: Some(AttributePair::new(AttributeKind::Dexterity, AttributeKind::Might)),
            accuracy: 1,
            damage: 6,
            damage_type: "physical".into(),
            martial: false,
            hands: Default::default(),
            category: "Sword".into(),
            quality: None,
        }),
    )
    .equipped()
}

fn swordsman() -> Actor {
    let mut actor = Actor::character("Swordsman", Attributes::new(10, 10, 8, 6))
        .with_level(10)
        .with_item(sword());
    actor.recompute(&Ruleset::standard());
    actor
}

#[test]
fn fumble_and_critical_classification() {
    let config = Ruleset::standard().config;
    let request = CheckRequest::new(10, 10, 3).unwrap();

    let fumble = roll_check(&request, &mut ScriptedDice::new([1, 1]), &config);
    assert!(fumble.fumble && !fumble.critical);

    let crit = roll_check(&request, &mut ScriptedDice::new([6, 6]), &config);
    assert!(crit.critical && !crit.fumble);

    let plain = roll_check(&request, &mut ScriptedDice::new([6, 5]), &config);
    assert!(!plain.critical && !plain.fumble);
    assert_eq!(plain.total, 6 + 5 + 3);
}

#[test]
fn totals_hold_for_random_draws() {
    let config = Ruleset::standard().config;
    let request = CheckRequest::new(12, 8, -1).unwrap();
    let mut dice = PcgDice::new(2024);
    for _ in 0..500 {
        let result = roll_check(&request, &mut dice, &config);
        let [d1, d2] = result.dice;
        assert!((1..=12).contains(&d1) && (1..=8).contains(&d2));
        assert_eq!(result.total, d1 as i32 + d2 as i32 - 1);
        assert_eq!(result.fumble, d1 == 1 && d2 == 1);
        assert!(!(result.fumble && result.critical));
    }
}

#[test]
fn statuses_shrink_weapon_dice() {
    let mut actor = swordsman().with_status("slow");
    actor.recompute(&Ruleset::standard());

    // slow: DEX d10 -> d8; a scripted 10 clamps to 8
    let resolution = resolve_named(
        &actor,
        "Bronze Sword",
        &mut ScriptedDice::new([10, 10]),
        &Ruleset::standard().config,
    )
    .unwrap();
    assert_eq!(resolution.checks[0].result.dice, [8, 10]);
}

#[test]
fn weapon_borne_ability_end_to_end() {
    let cleave = Item::new(
        2,
        "Cleave",
        ItemKind::Skill(Ability {
            has_roll: true,
            roll: Some(RollInfo {
                use_weapon: UseWeapon {
                    accuracy: true,
                    damage: true,
                    hr_zero: false,
                },
                accuracy: 1,
                damage: Some(AbilityDamage {
                    value: 5,
                    kind: "physical".into(),
                }),
                ..RollInfo::default()
            }),
            ..Ability::default()
        }),
    );
    let actor = swordsman().with_item(cleave);
    let resolution = resolve_named(
        &actor,
        "Cleave",
        &mut ScriptedDice::new([7, 4]),
        &Ruleset::standard().config,
    )
    .unwrap();

    let check = &resolution.checks[0];
    assert_eq!(check.weapon.as_deref(), Some("Bronze Sword"));
    assert_eq!(check.result.total, 7 + 4 + 1 + 1);
    assert_eq!(check.result.damage.as_ref().unwrap().total, 7 + 6 + 5);
}

#[test]
fn initiative_roll_uses_recomputed_value() {
    let actor = swordsman();
    let roll = roll_initiative(&actor, &mut ScriptedDice::new([3, 5])).unwrap();
    assert_eq!(roll.total, 8.0 + actor.derived.init.value);
}

#[test]
fn double_twenty_alchemy_has_unique_effects() {
    let outcomes = enumerate_outcomes(&[20, 20], 1, true);
    let texts: HashSet<&str> = outcomes.iter().map(|o| o.effect.as_str()).collect();
    assert_eq!(texts.len(), outcomes.len());
}

#[test]
fn alchemy_output_never_repeats_an_effect() {
    let mut dice = PcgDice::new(7);
    for name in ["Alchemy", "Advanced Alchemy", "Superior Alchemy (all)"] {
        let request = AlchemyRequest::from_ability_name(name, 30);
        for _ in 0..100 {
            let roll = roll_alchemy(&request, &mut dice);
            assert_eq!(roll.dice.len(), request.tier.dice());
            let texts: HashSet<&str> = roll.outcomes.iter().map(|o| o.effect.as_str()).collect();
            assert_eq!(texts.len(), roll.outcomes.len(), "dice {:?}", roll.dice);
        }
    }
}

#[test]
fn behavior_roll_is_reproducible_from_seed() {
    let npc = Actor::npc("Bandit", Attributes::default())
        .with_item(Item::new(
            1,
            "Stab",
            ItemKind::Behavior(BehaviorData {
                weight: 2,
                description: "Stabs the weakest target.".into(),
            }),
        ))
        .with_item(Item::new(
            2,
            "Flee",
            ItemKind::Behavior(BehaviorData {
                weight: 1,
                description: String::new(),
            }),
        ));

    let first = roll_behavior(&npc, &mut PcgDice::new(99));
    let second = roll_behavior(&npc, &mut PcgDice::new(99));
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn dice_source_is_object_safe() {
    let mut pcg = PcgDice::new(1);
    let dice: &mut dyn DiceSource = &mut pcg;
    let request = CheckRequest::new(8, 8, 0).unwrap();
    let result = roll_check(&request, dice, &Ruleset::standard().config);
    assert!((2..=16).contains(&result.total));
}

#[cfg(feature = "serde")]
#[test]
fn resolution_serializes_for_clients() {
    let actor = swordsman();
    let resolution = resolve_named(
        &actor,
        "Bronze Sword",
        &mut ScriptedDice::new([4, 7]),
        &Ruleset::standard().config,
    )
    .unwrap();

    let json = serde_json::to_value(&resolution).unwrap();
    assert_eq!(json["item"], "Bronze Sword");
    assert_eq!(json["item_type"], "weapon");
    assert_eq!(json["checks"][0]["attributes"]["primary"], "dex");
    assert_eq!(json["checks"][0]["result"]["dice"], serde_json::json!([4, 7]));
}
