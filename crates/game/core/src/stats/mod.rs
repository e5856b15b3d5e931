//! Stat System - derived-stats pipeline.
//!
//! # Architecture
//!
//! ```text
//! [ Resources (HP/MP/IP max) ]
//!      ↓
//! [ Attributes (status clamp) ]
//!      ↓
//! [ Equipment (DEF/MDEF/init mod) ]
//!      ↓
//! [ Initiative ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Base attributes, level, rank, bonuses, items and statuses only
//! 2. **Fixed order**: Each layer only reads layers above it
//! 3. **Snapshot Consistency**: A recompute writes all outputs or none
//! 4. **Deterministic**: Pure functions, no I/O or randomness

pub mod attributes;
pub mod equipment;
pub mod initiative;
pub mod resources;
pub mod snapshot;
pub mod status;

// Re-export primary types
pub use attributes::{Attribute, AttributeKind, AttributeModifiers, Attributes, clamp_attributes};
pub use equipment::{Defenses, aggregate_equipment};
pub use initiative::{compute_initiative, rank_bonus};
pub use resources::{
    ClassBenefitCounts, ResourceInputs, ResourceKind, ResourceMaximums, compute_resources,
    hp_change, hp_multiplier, mp_multiplier,
};
pub use snapshot::DerivedSnapshot;
pub use status::{ActiveStatuses, MAX_STATUS_ATTRIBUTES, StatusCatalog, StatusDefinition};
