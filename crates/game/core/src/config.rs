/// Rules constants and tunable parameters.
///
/// Every value has a `const` default matching the published rules; a table
/// can be overridden from `rules.toml` through the content crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Lowest die size an attribute can be reduced to.
    pub attribute_min: i32,
    /// Highest die size an attribute can be raised to.
    pub attribute_max: i32,
    /// Minimum matching face for a critical success.
    pub critical_threshold: u32,
    /// Resource points granted per class benefit (HP or MP).
    pub class_resource_bonus: i32,
    /// Inventory points every character starts with.
    pub base_inventory_points: i32,
    /// Inventory points granted per class IP benefit.
    pub class_inventory_bonus: i32,
    /// HP multiplier (and initiative bonus) of elite NPCs.
    pub elite_multiplier: i32,
    /// MP multiplier of champion NPCs, regardless of their HP multiplier.
    pub champion_mp_multiplier: i32,
}

impl RulesConfig {
    pub const DEFAULT_ATTRIBUTE_MIN: i32 = 6;
    pub const DEFAULT_ATTRIBUTE_MAX: i32 = 12;
    pub const DEFAULT_CRITICAL_THRESHOLD: u32 = 6;
    pub const DEFAULT_CLASS_RESOURCE_BONUS: i32 = 5;
    pub const DEFAULT_BASE_INVENTORY_POINTS: i32 = 6;
    pub const DEFAULT_CLASS_INVENTORY_BONUS: i32 = 2;
    pub const DEFAULT_ELITE_MULTIPLIER: i32 = 2;
    pub const DEFAULT_CHAMPION_MP_MULTIPLIER: i32 = 2;

    /// Number of target-priority slots produced by a behavior roll.
    pub const TARGET_PRIORITY_SLOTS: usize = 5;
    /// Largest number of d20s an alchemy roll can use.
    pub const MAX_ALCHEMY_DICE: usize = 4;

    pub const fn new() -> Self {
        Self {
            attribute_min: Self::DEFAULT_ATTRIBUTE_MIN,
            attribute_max: Self::DEFAULT_ATTRIBUTE_MAX,
            critical_threshold: Self::DEFAULT_CRITICAL_THRESHOLD,
            class_resource_bonus: Self::DEFAULT_CLASS_RESOURCE_BONUS,
            base_inventory_points: Self::DEFAULT_BASE_INVENTORY_POINTS,
            class_inventory_bonus: Self::DEFAULT_CLASS_INVENTORY_BONUS,
            elite_multiplier: Self::DEFAULT_ELITE_MULTIPLIER,
            champion_mp_multiplier: Self::DEFAULT_CHAMPION_MP_MULTIPLIER,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
