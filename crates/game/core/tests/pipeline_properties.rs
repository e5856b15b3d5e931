use fabula_core::{
    Actor, ArmorData, AttributeKind, Attributes, ClassBenefits, Item, ItemKind, Protection, Rank,
    Ruleset, StatusCatalog, StatusDefinition, hp_change,
};

fn armor(id: u32, def: i32, martial: bool) -> Item {
    Item::new(
        id,
        "Plate",
        ItemKind::Armor(ArmorData {
            protection: Protection::new(def, 0, 0),
            martial,
        }),
    )
    .equipped()
}

fn shield(id: u32, def: i32) -> Item {
    Item::new(id, "Shield", ItemKind::Shield(Protection::new(def, 0, 0))).equipped()
}

#[test]
fn current_attributes_always_within_bounds() {
    let rules = Ruleset::standard();
    let status_ids: Vec<&str> = rules
        .statuses
        .iter()
        .filter(|def| !def.is_cosmetic())
        .map(|def| def.id.as_str())
        .collect();

    for base in [2, 6, 8, 10, 12, 16] {
        for window in status_ids.windows(3) {
            let mut actor = Actor::character("Tester", Attributes::new(base, base, base, base));
            for id in window {
                actor.statuses.add(*id);
            }
            actor.recompute(&rules);
            for kind in AttributeKind::ALL {
                let current = actor.attributes.current(kind);
                assert!((6..=12).contains(&current), "{kind:?} = {current}");
            }
        }
    }
}

#[test]
fn stacked_statuses_sum_before_clamping() {
    let catalog = StatusCatalog::new([
        StatusDefinition::new("mig-up", "MIG Up", &[AttributeKind::Might], 2),
        StatusDefinition::new("weak", "Weak", &[AttributeKind::Might], -2),
        StatusDefinition::new("feeble", "Feeble", &[AttributeKind::Might], -4),
    ]);
    let rules = Ruleset::new(Default::default(), catalog);

    // 10 + 2 - 2 - 4 = 6
    let mut actor = Actor::character("Brute", Attributes::new(10, 8, 8, 8))
        .with_status("mig-up")
        .with_status("weak")
        .with_status("feeble");
    actor.recompute(&rules);
    assert_eq!(actor.attributes.current(AttributeKind::Might), 6);
    assert_eq!(actor.attributes.base(AttributeKind::Might), 10);
}

#[test]
fn recompute_is_idempotent() {
    let rules = Ruleset::standard();
    let mut actor = Actor::npc("Knight", Attributes::new(10, 8, 8, 6))
        .with_level(12)
        .with_rank(Rank::champion(3))
        .with_item(armor(1, 11, true))
        .with_item(shield(2, 2))
        .with_status("slow")
        .with_status("enraged");

    let first = actor.recompute(&rules);
    let stored = actor.clone();
    let second = actor.recompute(&rules);
    assert_eq!(first, second);
    assert_eq!(stored, actor);
}

#[test]
fn base_defense_comes_from_exactly_one_source() {
    let rules = Ruleset::standard();
    let base = || {
        let mut actor = Actor::character("Guard", Attributes::new(8, 10, 8, 8)).with_item(shield(9, 2));
        actor.derived.def.bonus = 1;
        actor
    };

    // No armor: dex + other + bonus
    let mut unarmored = base();
    unarmored.recompute(&rules);
    assert_eq!(unarmored.derived.def.value, 10 + 2 + 1);

    // Martial armor replaces dex
    let mut martial = base().with_item(armor(1, 5, true));
    martial.recompute(&rules);
    assert_eq!(martial.derived.def.value, 5 + 2 + 1);

    // Non-martial armor adds to dex
    let mut light = base().with_item(armor(1, 5, false));
    light.recompute(&rules);
    assert_eq!(light.derived.def.value, 15 + 2 + 1);
}

#[test]
fn unequipping_armor_restores_dexterity_defense() {
    let rules = Ruleset::standard();
    let mut actor = Actor::character("Guard", Attributes::new(8, 10, 8, 8)).with_item(armor(1, 12, true));
    actor.recompute(&rules);
    assert_eq!(actor.derived.def.value, 12);

    assert_eq!(actor.toggle_equipped(1), Some(false));
    actor.recompute(&rules);
    assert_eq!(actor.derived.def.value, 10);
}

#[test]
fn hp_examples() {
    let rules = Ruleset::standard();

    let mut character = Actor::character("Squire", Attributes::new(3, 8, 8, 8))
        .with_level(5)
        .with_item(Item::new(1, "Guardian", ItemKind::Class(ClassBenefits::HP)));
    character.recompute(&rules);
    assert_eq!(character.resources.hp.max, 25);

    let mut elite = Actor::npc("Captain", Attributes::new(3, 8, 8, 8))
        .with_level(5)
        .with_rank(Rank::Elite);
    elite.recompute(&rules);
    assert_eq!(elite.resources.hp.max, 50);
}

#[test]
fn characters_ignore_rank() {
    let rules = Ruleset::standard();
    let mut hero = Actor::character("Hero", Attributes::new(8, 8, 8, 8)).with_rank(Rank::Elite);
    hero.recompute(&rules);
    assert_eq!(hero.rank, Rank::Normal);
    assert_eq!(hero.resources.hp.max, 40 + 1);
}

#[test]
fn resource_recompute_is_deterministic() {
    let rules = Ruleset::standard();
    let build = || {
        Actor::character("Mage", Attributes::new(6, 8, 10, 12))
            .with_level(20)
            .with_item(Item::new(1, "Arcanist", ItemKind::Class(ClassBenefits::MP)))
            .with_item(Item::new(2, "Tinkerer", ItemKind::Class(ClassBenefits::IP)))
    };
    let mut a = build();
    let mut b = build();
    assert_eq!(a.recompute(&rules).resources, b.recompute(&rules).resources);
    assert_eq!(a.resources.mp.max, 60 + 20 + 5);
    assert_eq!(a.resources.ip.max, 6 + 2);
}

#[test]
fn damage_taken_reporting() {
    assert_eq!(hp_change(40, 28, false), Some(12));
    assert_eq!(hp_change(28, 40, false), Some(-12));
    assert_eq!(hp_change(40, 40, false), None);
    assert_eq!(hp_change(40, 55, true), None);
}
