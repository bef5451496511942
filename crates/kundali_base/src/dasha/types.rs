//! Core types shared across dasha systems.

use crate::error::KundaliError;
use crate::planet::Planet;
use crate::rasi::Rasi;

/// Year length for dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Default generation horizon for top-level periods, in years.
pub const DEFAULT_NUM_YEARS: f64 = 120.0;

/// Hard cap on periods per materialized level.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// The 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Maha = 0,
    Antar = 1,
    Pratyantar = 2,
    Sookshma = 3,
    Prana = 4,
}

impl DashaLevel {
    /// Level from raw u8.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Maha),
            1 => Some(Self::Antar),
            2 => Some(Self::Pratyantar),
            3 => Some(Self::Sookshma),
            4 => Some(Self::Prana),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Mahadasha",
            Self::Antar => "Antardasha",
            Self::Pratyantar => "Pratyantardasha",
            Self::Sookshma => "Sookshmadasha",
            Self::Prana => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Antar),
            Self::Antar => Some(Self::Pratyantar),
            Self::Pratyantar => Some(Self::Sookshma),
            Self::Sookshma => Some(Self::Prana),
            Self::Prana => None,
        }
    }
}

/// What rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashaLord {
    /// Nakshatra-based systems (Vimshottari, Ashtottari).
    Planet(Planet),
    /// Sign-based systems (Chara, Kala Chakra); 0-based sign index.
    Sign(u8),
    /// Yogini system; 0-based yogini index (0..7).
    Yogini(u8),
}

impl DashaLord {
    /// Display name of the ruling entity.
    pub fn name(self) -> &'static str {
        match self {
            Self::Planet(p) => p.name(),
            Self::Sign(r) => Rasi::from_index(r).map(Rasi::name).unwrap_or("Unknown"),
            Self::Yogini(y) => super::rulesets::yogini_name(y),
        }
    }
}

/// A single dasha period. `[start_jd, end_jd)` in JD UTC.
#[derive(Debug, Clone, Copy)]
pub struct DashaPeriod {
    pub lord: DashaLord,
    /// Inclusive.
    pub start_jd: f64,
    /// Exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into the parent level's array (0 for level 0).
    pub parent_idx: u32,
}

impl DashaPeriod {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether the instant falls inside this period (half-open).
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// The supported dasha systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DashaSystem {
    Vimshottari = 0,
    Yogini = 1,
    Ashtottari = 2,
    KalaChakra = 3,
    Chara = 4,
}

/// All supported systems in order.
pub const ALL_DASHA_SYSTEMS: [DashaSystem; 5] = [
    DashaSystem::Vimshottari,
    DashaSystem::Yogini,
    DashaSystem::Ashtottari,
    DashaSystem::KalaChakra,
    DashaSystem::Chara,
];

impl DashaSystem {
    /// System from its repr(u8) code.
    pub fn from_u8(v: u8) -> Result<Self, KundaliError> {
        ALL_DASHA_SYSTEMS
            .get(v as usize)
            .copied()
            .ok_or(KundaliError::UnknownSystem(v))
    }

    /// Parse from a case-insensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_DASHA_SYSTEMS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Yogini => "Yogini",
            Self::Ashtottari => "Ashtottari",
            Self::KalaChakra => "Kala Chakra",
            Self::Chara => "Chara",
        }
    }
}

/// Materialized period forest for one system.
#[derive(Debug, Clone)]
pub struct DashaTree {
    pub system: DashaSystem,
    /// Birth JD UTC.
    pub birth_jd: f64,
    /// levels[0] = mahadashas, levels[1] = antardashas, etc.
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// The active period chain at one instant, one entry per level.
#[derive(Debug, Clone)]
pub struct DashaSnapshot {
    pub system: DashaSystem,
    pub query_jd: f64,
    /// periods[0] = active mahadasha, periods[1] = active antardasha, etc.
    pub periods: Vec<DashaPeriod>,
}
