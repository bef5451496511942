//! Hierarchical dasha (planetary period) engine.
//!
//! Five systems over one proportional-subdivision core:
//! - Vimshottari, Yogini, Ashtottari, Kala Chakra: nakshatra-anchored,
//!   configured by a [`rulesets::DashaRuleset`] and driven by
//!   [`engine`].
//! - Chara (Jaimini): sign-based with chart-dependent periods, in
//!   [`chara`].
//!
//! All periods are half-open `[start_jd, end_jd)` and every level tiles
//! its parent exactly.

pub mod balance;
pub mod chara;
pub mod engine;
pub mod rulesets;
pub mod types;

pub use balance::{nakshatra_balance, sign_balance};
pub use chara::{
    CharaInputs, chara_children_of, chara_maha_periods, chara_period_years,
    chara_snapshot_at, chara_total_years, chara_tree,
};
pub use engine::{children_of, expand_tree, find_active, maha_periods, snapshot_at};
pub use rulesets::{
    DashaRuleset, StartRule, ashtottari, kala_chakra, ruleset_for, vimshottari, yogini,
    yogini_lord, yogini_name,
};
pub use types::{
    ALL_DASHA_SYSTEMS, DAYS_PER_YEAR, DEFAULT_NUM_YEARS, DashaLevel, DashaLord, DashaPeriod,
    DashaSnapshot, DashaSystem, DashaTree, MAX_PERIODS_PER_LEVEL,
};
