//! Pure sidereal computation core: signs, nakshatras, divisional
//! charts, combustion and dignity, the hierarchical dasha engine, and
//! ashtakavarga aggregation.
//!
//! Everything here is deterministic math over caller-supplied sidereal
//! longitudes. Ephemeris access, time handling, and chart orchestration
//! live in `kundali_chart`.

pub mod ashtakavarga;
pub mod combustion;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod nakshatra;
pub mod planet;
pub mod rasi;
pub mod util;
pub mod varga;

pub use ashtakavarga::{
    AshtakavargaResult, AshtakavargaRules, AshtakavargaSummary, BAV_TOTALS, PARASHARA_RULES,
    SAV_TOTAL, compute_ashtakavarga, compute_ashtakavarga_with,
};
pub use combustion::{combustion_orb, is_combust};
pub use dignity::{Dignity, dignity_of};
pub use error::KundaliError;
pub use nakshatra::{
    NAKSHATRA_NAMES, NAKSHATRA_SPAN, nakshatra_fraction, nakshatra_index, nakshatra_name, pada_of,
};
pub use planet::{ALL_PLANETS, Planet, SAPTA_PLANETS, sign_lord, sign_lord_by_index};
pub use rasi::{ALL_RASIS, Rasi, degree_in_rasi, rasi_of};
pub use util::{min_separation, normalize_360};
pub use varga::{
    ALL_VARGAS, Varga, all_divisional_charts, divisional_position, divisional_position_by_code,
};
