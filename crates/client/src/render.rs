//! Plain-text rendering of rules results.

use std::fmt::Write;

use fabula_core::{
    Actor, AlchemyRoll, AttributeKind, BehaviorRoll, DieCheckResult, InitiativeRoll, ItemCheck,
    ItemResolution, Rank,
};

/// Derived sheet of an actor.
pub fn actor_sheet(actor: &Actor) -> String {
    let mut out = String::new();
    let rank = match actor.effective_rank() {
        Rank::Normal => String::new(),
        Rank::Elite => " (elite)".to_owned(),
        Rank::Champion(n) => format!(" (champion {})", n),
    };
    let _ = writeln!(out, "{} - {:?} level {}{}", actor.name, actor.kind, actor.level, rank);

    let dice = AttributeKind::ALL
        .into_iter()
        .map(|kind| {
            let attribute = actor.attributes.get(kind);
            if attribute.current == attribute.base {
                format!("{} d{}", kind.abbrev(), attribute.current)
            } else {
                format!("{} d{} (base d{})", kind.abbrev(), attribute.current, attribute.base)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "  {}", dice);

    let resources = &actor.resources;
    let _ = write!(
        out,
        "  HP {}/{}  MP {}/{}",
        resources.hp.current, resources.hp.max, resources.mp.current, resources.mp.max
    );
    if !actor.kind.is_npc() {
        let _ = write!(out, "  IP {}/{}", resources.ip.current, resources.ip.max);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  DEF {}  M.DEF {}  Init {}",
        actor.derived.def.value, actor.derived.mdef.value, actor.derived.init.value
    );

    if !actor.statuses.is_empty() {
        let statuses = actor.statuses.iter().collect::<Vec<_>>().join(", ");
        let _ = writeln!(out, "  Statuses: {}", statuses);
    }
    out
}

fn die_line(result: &DieCheckResult) -> String {
    let mut line = format!(
        "[{} + {}] {:+} = {}",
        result.dice[0], result.dice[1], result.modifier, result.total
    );
    if result.fumble {
        line.push_str("  FUMBLE");
    } else if result.critical {
        line.push_str("  CRITICAL");
    }
    if let Some(damage) = &result.damage {
        let _ = write!(line, "  damage: HR {} + {}", damage.hr, damage.base);
        if damage.bonus != 0 {
            let _ = write!(line, " + {}", damage.bonus);
        }
        let _ = write!(line, " = {} {}", damage.total, damage.kind);
    }
    line
}

fn check_line(check: &ItemCheck) -> String {
    let mut line = String::new();
    if let Some(weapon) = &check.weapon {
        let _ = write!(line, "{}: ", weapon);
    }
    let _ = write!(
        line,
        "{} + {}  ",
        check.attributes.primary.abbrev(),
        check.attributes.secondary.abbrev()
    );
    line.push_str(&die_line(&check.result));
    line
}

/// Item resolution with weapon and spell details.
pub fn resolution(actor: &Actor, resolution: &ItemResolution) -> String {
    let mut out = String::new();
    let banner = if resolution.announces { "==" } else { "--" };
    let _ = writeln!(
        out,
        "{} {} uses {} ({}) {}",
        banner, actor.name, resolution.item, resolution.item_type, banner
    );

    if let Some(weapon) = &resolution.weapon {
        let _ = writeln!(
            out,
            "  {} {} | {} | {}",
            weapon.hands.label(),
            weapon.category,
            weapon.damage_type,
            weapon.quality
        );
    }
    if let Some(spell) = &resolution.spell {
        let _ = writeln!(out, "  {} MP | {} | {}", spell.mp_cost, spell.target, spell.duration);
    }
    if resolution.checks.is_empty() {
        let _ = writeln!(out, "  (no roll)");
    }
    for check in &resolution.checks {
        let _ = writeln!(out, "  {}", check_line(check));
    }
    out
}

/// Alchemy dice and the effect table they unlock.
pub fn alchemy(roll: &AlchemyRoll) -> String {
    let mut out = String::new();
    let dice = roll
        .dice
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "Rolls: {}", dice);
    if roll.outcomes.is_empty() {
        let _ = writeln!(out, "No possible effects.");
        return out;
    }
    let _ = writeln!(out, "Possible effects:");
    for outcome in &roll.outcomes {
        let _ = writeln!(out, "  {:<8} {}", outcome.combo.to_string(), outcome.effect);
    }
    out
}

pub fn behavior(roll: &BehaviorRoll) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Enemy: {}", roll.actor);
    let _ = writeln!(out, "Selected behavior: {}", roll.behavior);
    if !roll.description.is_empty() {
        let _ = writeln!(out, "  {}", roll.description);
    }
    let _ = writeln!(out, "Target priority: {}", roll.priority_text());
    out
}

/// Initiative order, highest first.
pub fn initiative(rolls: &[(String, InitiativeRoll)]) -> String {
    let mut out = String::new();
    for (position, (name, roll)) in rolls.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<16} [{} + {}] {:+} = {}",
            position + 1,
            name,
            roll.dice[0],
            roll.dice[1],
            roll.modifier,
            roll.display_total()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabula_core::{ComboKey, ComboOutcome, DamageOutcome};

    fn result(dice: [u32; 2], fumble: bool, critical: bool) -> DieCheckResult {
        DieCheckResult {
            dice,
            modifier: 1,
            total: (dice[0] + dice[1]) as i32 + 1,
            fumble,
            critical,
            damage: Some(DamageOutcome {
                hr: dice[0].max(dice[1]),
                base: 6,
                bonus: 0,
                total: dice[0].max(dice[1]) as i32 + 6,
                kind: "physical".into(),
            }),
        }
    }

    #[test]
    fn die_line_marks_criticals() {
        let line = die_line(&result([8, 8], false, true));
        assert_eq!(line, "[8 + 8] +1 = 17  CRITICAL  damage: HR 8 + 6 = 14 physical");
        assert!(die_line(&result([1, 1], true, false)).contains("FUMBLE"));
    }

    #[test]
    fn alchemy_lists_combos() {
        let roll = AlchemyRoll {
            dice: vec![3, 18],
            outcomes: vec![ComboOutcome {
                combo: ComboKey::Any(3),
                effect: "You or one ally you can see that is present on the scene recovers 30 Hit Points.".into(),
            }],
        };
        let text = alchemy(&roll);
        assert!(text.starts_with("Rolls: 3 18\n"));
        assert!(text.contains("3+Any"));
    }
}
