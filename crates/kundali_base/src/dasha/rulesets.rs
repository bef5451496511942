//! Built-in rulesets for the nakshatra-anchored dasha systems.
//!
//! A ruleset is the full configuration of one system: the ordered lord
//! sequence, per-lord shares in years, the cycle total, and the rule
//! that picks the starting lord from the Moon's nakshatra (and pada).

use crate::planet::Planet;

use super::types::{DAYS_PER_YEAR, DashaLord, DashaSystem};

/// How the Moon's nakshatra selects the starting lord.
#[derive(Debug, Clone)]
pub enum StartRule {
    /// Direct per-nakshatra lookup (0-based lord index per nakshatra).
    NakshatraMap([u8; 27]),
    /// Pada-anchored cycle: `(nakshatra * 4 + pada - 1) % lords.len()`.
    PadaCycle,
}

/// Configuration of one dasha system.
#[derive(Debug, Clone)]
pub struct DashaRuleset {
    pub system: DashaSystem,
    /// Ordered lord sequence.
    pub lords: Vec<DashaLord>,
    /// Full-cycle share in years per lord, parallel to `lords`.
    pub years: Vec<f64>,
    /// Sum of `years`.
    pub total_years: f64,
    pub start_rule: StartRule,
}

impl DashaRuleset {
    /// Number of lords in the cycle.
    pub fn len(&self) -> usize {
        self.lords.len()
    }

    /// True when the lord sequence is empty. Built-in rulesets never are.
    pub fn is_empty(&self) -> bool {
        self.lords.is_empty()
    }

    /// Index of the starting lord for a Moon nakshatra (0-based) and pada (1-based).
    pub fn starting_index(&self, nakshatra: u8, pada: u8) -> usize {
        match &self.start_rule {
            StartRule::NakshatraMap(map) => map[nakshatra.min(26) as usize] as usize,
            StartRule::PadaCycle => {
                (nakshatra.min(26) as usize * 4 + (pada.clamp(1, 4) as usize - 1)) % self.len()
            }
        }
    }

    /// Full-cycle period of one lord, in days.
    pub fn period_days(&self, idx: usize) -> f64 {
        self.years[idx] * DAYS_PER_YEAR
    }

    /// Full-cycle total, in days.
    pub fn total_days(&self) -> f64 {
        self.total_years * DAYS_PER_YEAR
    }
}

// ---------------------------------------------------------------------------
// Vimshottari
// ---------------------------------------------------------------------------

const VIMSHOTTARI_LORDS: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// The 120-year Vimshottari system. Starting lord repeats every 9
/// nakshatras from Ashwini (Ketu).
pub fn vimshottari() -> DashaRuleset {
    let mut map = [0u8; 27];
    for (i, slot) in map.iter_mut().enumerate() {
        *slot = (i % 9) as u8;
    }
    DashaRuleset {
        system: DashaSystem::Vimshottari,
        lords: VIMSHOTTARI_LORDS.iter().map(|&p| DashaLord::Planet(p)).collect(),
        years: VIMSHOTTARI_YEARS.to_vec(),
        total_years: 120.0,
        start_rule: StartRule::NakshatraMap(map),
    }
}

// ---------------------------------------------------------------------------
// Yogini
// ---------------------------------------------------------------------------

/// Yogini names, 0-indexed.
pub const YOGINI_NAMES: [&str; 8] = [
    "Mangala", "Pingala", "Dhanya", "Bhramari", "Bhadrika", "Ulka", "Siddha", "Sankata",
];

/// Planet lord of each yogini.
pub const YOGINI_LORDS: [Planet; 8] = [
    Planet::Moon,
    Planet::Sun,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Mercury,
    Planet::Saturn,
    Planet::Venus,
    Planet::Rahu,
];

/// Name for a 0-based yogini index.
pub fn yogini_name(idx: u8) -> &'static str {
    YOGINI_NAMES.get(idx as usize).copied().unwrap_or("Unknown")
}

/// Planet lord for a 0-based yogini index.
pub fn yogini_lord(idx: u8) -> Option<Planet> {
    YOGINI_LORDS.get(idx as usize).copied()
}

/// The 36-year Yogini system: 8 yoginis with shares 1..8.
///
/// Starting yogini: `(nakshatra_1_indexed + 3) % 8`, remainder 0 → Sankata.
pub fn yogini() -> DashaRuleset {
    let mut map = [0u8; 27];
    for (i, slot) in map.iter_mut().enumerate() {
        let nak_1 = (i + 1) as u8;
        let remainder = (nak_1 + 3) % 8;
        *slot = if remainder == 0 { 7 } else { remainder - 1 };
    }
    DashaRuleset {
        system: DashaSystem::Yogini,
        lords: (0u8..8).map(DashaLord::Yogini).collect(),
        years: (1..=8).map(f64::from).collect(),
        total_years: 36.0,
        start_rule: StartRule::NakshatraMap(map),
    }
}

// ---------------------------------------------------------------------------
// Ashtottari
// ---------------------------------------------------------------------------

const ASHTOTTARI_LORDS: [Planet; 8] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Rahu,
    Planet::Venus,
];

const ASHTOTTARI_YEARS: [f64; 8] = [6.0, 15.0, 8.0, 17.0, 10.0, 19.0, 12.0, 21.0];

/// Nakshatra → lord index. The sequence is anchored at Ardra (Sun) and
/// runs in uneven 3- and 4-nakshatra blocks.
const ASHTOTTARI_NAK_MAP: [u8; 27] = [
    6, 6, 7, 7, 7, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5, 5, 6,
];

/// The 108-year Ashtottari system.
pub fn ashtottari() -> DashaRuleset {
    DashaRuleset {
        system: DashaSystem::Ashtottari,
        lords: ASHTOTTARI_LORDS.iter().map(|&p| DashaLord::Planet(p)).collect(),
        years: ASHTOTTARI_YEARS.to_vec(),
        total_years: 108.0,
        start_rule: StartRule::NakshatraMap(ASHTOTTARI_NAK_MAP),
    }
}

// ---------------------------------------------------------------------------
// Kala Chakra
// ---------------------------------------------------------------------------

const KALA_CHAKRA_YEARS: [f64; 9] = [7.0, 16.0, 9.0, 21.0, 5.0, 9.0, 16.0, 7.0, 10.0];

/// The 100-year Kala Chakra system over the savya 9-sign sequence
/// (Aries through Sagittarius). The Moon's pada anchors the starting
/// sign: index `(nakshatra * 4 + pada - 1) % 9`.
pub fn kala_chakra() -> DashaRuleset {
    DashaRuleset {
        system: DashaSystem::KalaChakra,
        lords: (0u8..9).map(DashaLord::Sign).collect(),
        years: KALA_CHAKRA_YEARS.to_vec(),
        total_years: 100.0,
        start_rule: StartRule::PadaCycle,
    }
}

/// Ruleset for a nakshatra-anchored system. Chara is sign-based and has
/// no nakshatra ruleset; see `dasha::chara`.
pub fn ruleset_for(system: DashaSystem) -> Option<DashaRuleset> {
    match system {
        DashaSystem::Vimshottari => Some(vimshottari()),
        DashaSystem::Yogini => Some(yogini()),
        DashaSystem::Ashtottari => Some(ashtottari()),
        DashaSystem::KalaChakra => Some(kala_chakra()),
        DashaSystem::Chara => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vimshottari_totals() {
        let rs = vimshottari();
        assert_eq!(rs.len(), 9);
        assert!((rs.years.iter().sum::<f64>() - 120.0).abs() < 1e-12);
        assert!((rs.total_days() - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn vimshottari_start_repeats_every_nine() {
        let rs = vimshottari();
        // Ashwini → Ketu, Bharani → Venus, Magha (9) → Ketu again
        assert_eq!(rs.starting_index(0, 1), 0);
        assert_eq!(rs.lords[rs.starting_index(0, 1)], DashaLord::Planet(Planet::Ketu));
        assert_eq!(rs.lords[rs.starting_index(1, 1)], DashaLord::Planet(Planet::Venus));
        assert_eq!(rs.starting_index(9, 1), 0);
        assert_eq!(rs.starting_index(26, 1), 8);
    }

    #[test]
    fn yogini_totals() {
        let rs = yogini();
        assert_eq!(rs.len(), 8);
        assert!((rs.years.iter().sum::<f64>() - 36.0).abs() < 1e-12);
    }

    #[test]
    fn yogini_start_map() {
        let rs = yogini();
        // Ashwini (0): (1+3)%8 = 4 → index 3 (Bhramari)
        assert_eq!(rs.starting_index(0, 1), 3);
        // Ardra (5): (6+3)%8 = 1 → index 0 (Mangala)
        assert_eq!(rs.starting_index(5, 1), 0);
        // Mrigashira (4): (5+3)%8 = 0 → index 7 (Sankata)
        assert_eq!(rs.starting_index(4, 1), 7);
    }

    #[test]
    fn yogini_names_and_lords() {
        assert_eq!(yogini_name(0), "Mangala");
        assert_eq!(yogini_name(7), "Sankata");
        assert_eq!(yogini_name(8), "Unknown");
        assert_eq!(yogini_lord(0), Some(Planet::Moon));
        assert_eq!(yogini_lord(7), Some(Planet::Rahu));
        assert_eq!(yogini_lord(8), None);
    }

    #[test]
    fn ashtottari_totals() {
        let rs = ashtottari();
        assert_eq!(rs.len(), 8);
        assert!((rs.years.iter().sum::<f64>() - 108.0).abs() < 1e-12);
    }

    #[test]
    fn ashtottari_ardra_starts_sun() {
        let rs = ashtottari();
        assert_eq!(rs.lords[rs.starting_index(5, 1)], DashaLord::Planet(Planet::Sun));
        // Ashwini → Rahu
        assert_eq!(rs.lords[rs.starting_index(0, 1)], DashaLord::Planet(Planet::Rahu));
    }

    #[test]
    fn ashtottari_map_valid() {
        for (i, &v) in ASHTOTTARI_NAK_MAP.iter().enumerate() {
            assert!(v < 8, "nakshatra {i} maps to invalid lord {v}");
        }
    }

    #[test]
    fn kala_chakra_totals() {
        let rs = kala_chakra();
        assert_eq!(rs.len(), 9);
        assert!((rs.years.iter().sum::<f64>() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn kala_chakra_pada_anchoring() {
        let rs = kala_chakra();
        // Ashwini pada 1 → index 0 (Aries); pada 4 → index 3
        assert_eq!(rs.starting_index(0, 1), 0);
        assert_eq!(rs.starting_index(0, 4), 3);
        // Bharani pada 1 → (4+0)%9 = 4
        assert_eq!(rs.starting_index(1, 1), 4);
    }

    #[test]
    fn ruleset_dispatch() {
        for system in [
            DashaSystem::Vimshottari,
            DashaSystem::Yogini,
            DashaSystem::Ashtottari,
            DashaSystem::KalaChakra,
        ] {
            let rs = ruleset_for(system).expect("nakshatra system has a ruleset");
            assert_eq!(rs.system, system);
            assert!(!rs.is_empty());
        }
        assert!(ruleset_for(DashaSystem::Chara).is_none());
    }
}
