//! Ashtakavarga benefic-point aggregation.
//!
//! For each of the 7 classical planets, 8 contributors (the 7 planets
//! plus the ascendant) grant a point to signs at fixed offsets from
//! their own sign. Per-planet rows (BAV) sum into the combined table
//! (SAV), which then passes through the trikona and ekadhipatya
//! reductions.
//!
//! Totals across 12 signs are chart-independent under the default rules:
//! Sun 48, Moon 49, Mars 39, Mercury 54, Jupiter 56, Venus 52, Saturn 39,
//! SAV 337.

use crate::planet::SAPTA_PLANETS;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Build a bitmask from 1-based offset values.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// Offset tables for one ashtakavarga scheme.
///
/// `masks[target][contributor]` is a bitmask of favorable 1-based offsets
/// (1 = contributor's own sign, 2 = next sign, ..., 12 = previous sign).
/// Targets and the first 7 contributors follow SAPTA_PLANETS order;
/// contributor 7 is the ascendant.
#[derive(Debug, Clone, Copy)]
pub struct AshtakavargaRules {
    pub masks: [[u16; 8]; 7],
}

impl AshtakavargaRules {
    /// Whether `offset` (1-based) earns a point for this target/contributor.
    pub const fn grants_point(&self, target: usize, contributor: usize, offset: u8) -> bool {
        (self.masks[target][contributor] >> offset) & 1 == 1
    }
}

/// The standard Parashara offset tables.
pub const PARASHARA_RULES: AshtakavargaRules = AshtakavargaRules {
    masks: [
        // Sun
        [
            bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
            bits(&[3, 6, 10, 11]),
            bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
            bits(&[3, 5, 6, 9, 10, 11, 12]),
            bits(&[5, 6, 9, 11]),
            bits(&[6, 7, 12]),
            bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
            bits(&[3, 4, 6, 10, 11, 12]),
        ],
        // Moon
        [
            bits(&[3, 6, 7, 8, 10, 11]),
            bits(&[1, 3, 6, 7, 10, 11]),
            bits(&[2, 3, 5, 6, 9, 10, 11]),
            bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
            bits(&[1, 4, 7, 8, 10, 11, 12]),
            bits(&[3, 4, 5, 7, 9, 10, 11]),
            bits(&[3, 5, 6, 11]),
            bits(&[3, 6, 10, 11]),
        ],
        // Mars
        [
            bits(&[3, 5, 6, 10, 11]),
            bits(&[3, 6, 11]),
            bits(&[1, 2, 4, 7, 8, 10, 11]),
            bits(&[3, 5, 6, 11]),
            bits(&[6, 10, 11, 12]),
            bits(&[6, 8, 11, 12]),
            bits(&[1, 4, 7, 8, 9, 10, 11]),
            bits(&[1, 3, 6, 10, 11]),
        ],
        // Mercury
        [
            bits(&[5, 6, 9, 11, 12]),
            bits(&[2, 4, 6, 8, 10, 11]),
            bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
            bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
            bits(&[6, 8, 11, 12]),
            bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
            bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
            bits(&[1, 2, 4, 6, 8, 10, 11]),
        ],
        // Jupiter
        [
            bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
            bits(&[2, 5, 7, 9, 11]),
            bits(&[1, 2, 4, 7, 8, 10, 11]),
            bits(&[1, 2, 4, 5, 6, 9, 10, 11]),
            bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
            bits(&[2, 5, 6, 9, 10, 11]),
            bits(&[3, 5, 6, 12]),
            bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
        ],
        // Venus
        [
            bits(&[8, 11, 12]),
            bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
            bits(&[3, 4, 6, 9, 11, 12]),
            bits(&[3, 5, 6, 9, 11]),
            bits(&[5, 8, 9, 10, 11]),
            bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),
            bits(&[3, 4, 5, 8, 9, 10, 11]),
            bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        ],
        // Saturn
        [
            bits(&[1, 2, 4, 7, 8, 10, 11]),
            bits(&[3, 6, 11]),
            bits(&[3, 5, 6, 10, 11, 12]),
            bits(&[6, 8, 9, 10, 11, 12]),
            bits(&[5, 6, 11, 12]),
            bits(&[6, 11, 12]),
            bits(&[3, 5, 6, 11]),
            bits(&[1, 3, 4, 6, 10, 11]),
        ],
    ],
};

/// Per-planet BAV totals under PARASHARA_RULES (SAPTA_PLANETS order).
pub const BAV_TOTALS: [u8; 7] = [48, 49, 39, 54, 56, 52, 39];

/// SAV total under PARASHARA_RULES.
pub const SAV_TOTAL: u16 = 337;

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

/// Trikona groups (0-based sign indices): fire, earth, air, water trines.
const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Same-lord pairs (0-based): Mercury's Gemini/Virgo, Jupiter's
/// Sagittarius/Pisces. The other dual-lord pairs fall in different
/// trines and are already handled by the trikona reduction.
const EKADHIPATYA_PAIRS: [[usize; 2]; 2] = [[2, 5], [8, 11]];

/// Subtract each trine's minimum from its three signs.
pub fn trikona_reduction(totals: &[u16; 12]) -> [u16; 12] {
    let mut result = *totals;
    for group in &TRIKONA_GROUPS {
        let min_val = group.iter().map(|&i| result[i]).min().unwrap_or(0);
        for &i in group {
            result[i] -= min_val;
        }
    }
    result
}

/// Subtract each same-lord pair's minimum from both its signs.
pub fn ekadhipatya_reduction(after_trikona: &[u16; 12]) -> [u16; 12] {
    let mut result = *after_trikona;
    for pair in &EKADHIPATYA_PAIRS {
        let min_val = result[pair[0]].min(result[pair[1]]);
        result[pair[0]] -= min_val;
        result[pair[1]] -= min_val;
    }
    result
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Distribution statistics over the 12 SAV values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AshtakavargaSummary {
    /// Sum of SAV across all 12 signs.
    pub total_points: u16,
    /// total_points / 12.
    pub average: f64,
    /// 1-based sign with the highest SAV (lowest sign wins ties).
    pub max_house: u8,
    pub max_value: u16,
    /// 1-based sign with the lowest SAV (lowest sign wins ties).
    pub min_house: u8,
    pub min_value: u16,
}

/// Complete ashtakavarga output: BAV rows, SAV, reductions, and summary.
#[derive(Debug, Clone, Copy)]
pub struct AshtakavargaResult {
    /// Per-planet points per sign; rows in SAPTA_PLANETS order.
    pub bav: [[u8; 12]; 7],
    /// Element-wise sum of the 7 BAV rows.
    pub sav: [u16; 12],
    /// SAV after the trikona reduction.
    pub after_trikona: [u16; 12],
    /// SAV after trikona then ekadhipatya reductions.
    pub after_ekadhipatya: [u16; 12],
    pub summary: AshtakavargaSummary,
}

/// BAV row for a single target planet.
///
/// `planet_rasis` holds 0-based sign indices in SAPTA_PLANETS order;
/// `lagna_rasi` is the ascendant's 0-based sign.
pub fn compute_bav(
    rules: &AshtakavargaRules,
    target: usize,
    planet_rasis: &[u8; 7],
    lagna_rasi: u8,
) -> [u8; 12] {
    let mut points = [0u8; 12];
    for (rashi, slot) in points.iter_mut().enumerate() {
        for contributor in 0..8usize {
            let contributor_rasi = if contributor < 7 {
                planet_rasis[contributor]
            } else {
                lagna_rasi
            };
            let offset = ((rashi as i16 - contributor_rasi as i16 + 12) % 12 + 1) as u8;
            if rules.grants_point(target, contributor, offset) {
                *slot += 1;
            }
        }
    }
    points
}

fn summarize(sav: &[u16; 12]) -> AshtakavargaSummary {
    let total_points: u16 = sav.iter().sum();
    let mut max_house = 0usize;
    let mut min_house = 0usize;
    for (i, &v) in sav.iter().enumerate() {
        if v > sav[max_house] {
            max_house = i;
        }
        if v < sav[min_house] {
            min_house = i;
        }
    }
    AshtakavargaSummary {
        total_points,
        average: f64::from(total_points) / 12.0,
        max_house: (max_house + 1) as u8,
        max_value: sav[max_house],
        min_house: (min_house + 1) as u8,
        min_value: sav[min_house],
    }
}

/// Full ashtakavarga under a given rules table.
pub fn compute_ashtakavarga_with(
    rules: &AshtakavargaRules,
    planet_rasis: &[u8; 7],
    lagna_rasi: u8,
) -> AshtakavargaResult {
    let mut bav = [[0u8; 12]; 7];
    for target in 0..SAPTA_PLANETS.len() {
        bav[target] = compute_bav(rules, target, planet_rasis, lagna_rasi);
    }

    let mut sav = [0u16; 12];
    for row in &bav {
        for (i, &p) in row.iter().enumerate() {
            sav[i] += u16::from(p);
        }
    }

    let after_trikona = trikona_reduction(&sav);
    let after_ekadhipatya = ekadhipatya_reduction(&after_trikona);
    let summary = summarize(&sav);

    AshtakavargaResult {
        bav,
        sav,
        after_trikona,
        after_ekadhipatya,
        summary,
    }
}

/// Full ashtakavarga under the standard Parashara rules.
pub fn compute_ashtakavarga(planet_rasis: &[u8; 7], lagna_rasi: u8) -> AshtakavargaResult {
    compute_ashtakavarga_with(&PARASHARA_RULES, planet_rasis, lagna_rasi)
}
