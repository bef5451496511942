//! Chart orchestration over the pure computation core.
//!
//! This crate owns the ephemeris-provider seam, civil time handling,
//! birth-query validation, natal chart computation, and the chart-level
//! dasha and ashtakavarga entry points. All raw astronomy comes from an
//! [`EphemerisProvider`] implementation supplied by the caller.

pub mod dasha_bridge;
pub mod error;
pub mod key;
pub mod natal;
pub mod provider;
pub mod time;
pub mod types;

pub use dasha_bridge::{ashtakavarga_for_chart, dasha_snapshot, dasha_tree};
pub use error::ChartError;
pub use key::{chart_key, fnv1a_64};
pub use natal::compute_natal_chart;
pub use provider::{BodyState, EphemerisProvider, Houses};
pub use time::{LocalInstant, UtcInstant};
pub use types::{ALL_AYANAMSAS, Ayanamsa, BirthQuery, NatalChart, PlanetPosition};
