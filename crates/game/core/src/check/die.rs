//! Two-die accuracy checks.
//!
//! # Formula
//!
//! ```text
//! total    = d1 + d2 + modifier
//! fumble   = d1 == 1 && d2 == 1
//! critical = !fumble && d1 == d2 && d1 >= threshold
//! hr       = hr_zero ? 0 : max(d1, d2)
//! damage   = hr + base + bonus
//! ```
//!
//! One draw per die, no rerolls: fumble and critical only classify.

use crate::config::RulesConfig;
use crate::dice::DiceSource;

use super::error::CheckError;

/// A typed check request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckRequest {
    pub primary_faces: u32,
    pub secondary_faces: u32,
    pub modifier: i32,
    pub damage: Option<DamageRequest>,
    /// Count the high roll as zero for damage.
    pub hr_zero: bool,
}

impl CheckRequest {
    /// Build a request from attribute die sizes, rejecting dice with no faces.
    pub fn new(primary_faces: i32, secondary_faces: i32, modifier: i32) -> Result<Self, CheckError> {
        Ok(Self {
            primary_faces: faces(primary_faces)?,
            secondary_faces: faces(secondary_faces)?,
            modifier,
            damage: None,
            hr_zero: false,
        })
    }

    /// Builder: the check deals damage.
    #[must_use]
    pub fn with_damage(mut self, damage: DamageRequest) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Builder: set the high-roll-as-zero override.
    #[must_use]
    pub fn with_hr_zero(mut self, hr_zero: bool) -> Self {
        self.hr_zero = hr_zero;
        self
    }
}

fn faces(value: i32) -> Result<u32, CheckError> {
    u32::try_from(value)
        .ok()
        .filter(|faces| *faces >= 1)
        .ok_or(CheckError::InvalidDie {
            faces: i64::from(value),
        })
}

/// Damage parameters of a check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRequest {
    /// Damage of the item that is rolled.
    pub base: i32,
    /// Extra damage from an ability rolled through a weapon.
    pub bonus: i32,
    pub kind: String,
}

/// Damage breakdown of a resolved check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// High roll contribution.
    pub hr: u32,
    pub base: i32,
    pub bonus: i32,
    pub total: i32,
    pub kind: String,
}

/// Result of one two-die check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DieCheckResult {
    pub dice: [u32; 2],
    pub modifier: i32,
    pub total: i32,
    pub fumble: bool,
    pub critical: bool,
    pub damage: Option<DamageOutcome>,
}

impl DieCheckResult {
    /// The higher of the two faces.
    pub fn high_roll(&self) -> u32 {
        self.dice[0].max(self.dice[1])
    }
}

/// Classify two faces already drawn for `request`.
pub fn evaluate_check(
    request: &CheckRequest,
    first: u32,
    second: u32,
    config: &RulesConfig,
) -> DieCheckResult {
    let fumble = first == 1 && second == 1;
    let critical = !fumble && first == second && first >= config.critical_threshold;
    let total = first as i32 + second as i32 + request.modifier;

    let damage = request.damage.as_ref().map(|damage| {
        let hr = if request.hr_zero { 0 } else { first.max(second) };
        DamageOutcome {
            hr,
            base: damage.base,
            bonus: damage.bonus,
            total: hr as i32 + damage.base + damage.bonus,
            kind: damage.kind.clone(),
        }
    });

    DieCheckResult {
        dice: [first, second],
        modifier: request.modifier,
        total,
        fumble,
        critical,
        damage,
    }
}

/// Draw both dice and evaluate the check.
pub fn roll_check(
    request: &CheckRequest,
    dice: &mut (impl DiceSource + ?Sized),
    config: &RulesConfig,
) -> DieCheckResult {
    let first = dice.roll(request.primary_faces);
    let second = dice.roll(request.secondary_faces);
    let result = evaluate_check(request, first, second, config);
    tracing::debug!(
        d1 = first,
        d2 = second,
        total = result.total,
        fumble = result.fumble,
        critical = result.critical,
        "check rolled"
    );
    result
}
