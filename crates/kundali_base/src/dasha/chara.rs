//! Chara (Jaimini) dasha: sign-based, chart-dependent periods.
//!
//! A sign's period is the count of signs from it to its lord's sign,
//! minus one. Odd signs count forward, even signs count in reverse; a
//! lord in its own sign gives 12 years. The sequence starts from the
//! ascendant's sign, running forward for an odd ascendant and in
//! reverse for an even one, with the first period reduced by the
//! ascendant's progress through its sign.

use crate::error::KundaliError;
use crate::planet::{ALL_PLANETS, sign_lord_by_index};
use crate::rasi::rasi_of;
use crate::util::normalize_360;

use super::balance::sign_balance;
use super::engine::find_active;
use super::types::{
    DAYS_PER_YEAR, DashaLord, DashaPeriod, DashaSnapshot, DashaSystem, DashaTree,
};

/// Chart inputs for Chara dasha: ascendant longitude plus the 0-based
/// sign of every planet (ALL_PLANETS order).
#[derive(Debug, Clone, Copy)]
pub struct CharaInputs {
    pub lagna_sidereal_lon: f64,
    pub planet_rasis: [u8; 9],
}

impl CharaInputs {
    /// Build from sidereal longitudes (ALL_PLANETS order).
    pub fn from_longitudes(planet_lons: [f64; 9], lagna_sidereal_lon: f64) -> Self {
        let mut planet_rasis = [0u8; 9];
        for (slot, &lon) in planet_rasis.iter_mut().zip(planet_lons.iter()) {
            *slot = rasi_of(lon) - 1;
        }
        Self {
            lagna_sidereal_lon,
            planet_rasis,
        }
    }

    /// 0-based sign of the ascendant.
    pub fn lagna_rasi(&self) -> u8 {
        ((normalize_360(self.lagna_sidereal_lon) / 30.0).floor() as u8).min(11)
    }

    /// Sign occupied by the lord of a sign (0-based indices).
    fn lord_rasi(&self, rasi_index: u8) -> u8 {
        match sign_lord_by_index(rasi_index % 12) {
            Some(lord) => {
                let planet_pos = ALL_PLANETS.iter().position(|&p| p == lord).unwrap_or(0);
                self.planet_rasis[planet_pos]
            }
            None => rasi_index % 12,
        }
    }
}

/// 1-based sign (index is even) means odd sign in traditional counting.
const fn is_odd_sign(rasi_index: u8) -> bool {
    rasi_index % 2 == 0
}

/// Inclusive forward count of signs from `a` to `b` (0-based).
fn count_forward(a: u8, b: u8) -> u8 {
    (b + 12 - a) % 12 + 1
}

/// Inclusive reverse count of signs from `a` to `b` (0-based).
fn count_reverse(a: u8, b: u8) -> u8 {
    (a + 12 - b) % 12 + 1
}

/// Chara period in years for a sign (0-based index).
pub fn chara_period_years(rasi_index: u8, inputs: &CharaInputs) -> f64 {
    let r = rasi_index % 12;
    let lord_rasi = inputs.lord_rasi(r);
    let distance = if is_odd_sign(r) {
        count_forward(r, lord_rasi)
    } else {
        count_reverse(r, lord_rasi)
    };
    let period = distance - 1;
    if period == 0 { 12.0 } else { f64::from(period) }
}

/// Sum of all 12 sign periods for this chart.
pub fn chara_total_years(inputs: &CharaInputs) -> f64 {
    (0..12u8).map(|r| chara_period_years(r, inputs)).sum()
}

/// The 12 top-level Chara periods from birth.
pub fn chara_maha_periods(birth_jd: f64, inputs: &CharaInputs) -> Vec<DashaPeriod> {
    let start = inputs.lagna_rasi();
    let forward = is_odd_sign(start);

    let first_period_days = chara_period_years(start, inputs) * DAYS_PER_YEAR;
    let (balance_days, _) = sign_balance(inputs.lagna_sidereal_lon, first_period_days);

    let mut periods = Vec::with_capacity(12);
    let mut cursor = birth_jd;

    for i in 0..12u8 {
        let rasi = if forward {
            (start + i) % 12
        } else {
            (start + 12 - i) % 12
        };
        let duration = if i == 0 {
            balance_days
        } else {
            chara_period_years(rasi, inputs) * DAYS_PER_YEAR
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            lord: DashaLord::Sign(rasi),
            start_jd: cursor,
            end_jd: end,
            level: super::types::DashaLevel::Maha,
            order: (i as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
    }

    periods
}

/// Children of a Chara period: the 12 signs cycling from the parent's
/// sign in the parent sign's direction, each scaled by its own share of
/// the chart's total.
pub fn chara_children_of(
    parent: &DashaPeriod,
    inputs: &CharaInputs,
    parent_idx: u32,
) -> Result<Vec<DashaPeriod>, KundaliError> {
    let child_level = parent
        .level
        .child_level()
        .ok_or(KundaliError::InvalidInput("prana periods have no children"))?;
    let DashaLord::Sign(parent_rasi) = parent.lord else {
        return Err(KundaliError::InvalidInput("chara periods are sign-ruled"));
    };

    let total_years = chara_total_years(inputs);
    let parent_duration = parent.duration_days();
    let forward = is_odd_sign(parent_rasi);

    let mut children = Vec::with_capacity(12);
    let mut cursor = parent.start_jd;

    for i in 0..12u8 {
        let rasi = if forward {
            (parent_rasi + i) % 12
        } else {
            (parent_rasi + 12 - i) % 12
        };
        let share = chara_period_years(rasi, inputs) / total_years;
        let end = cursor + share * parent_duration;
        children.push(DashaPeriod {
            lord: DashaLord::Sign(rasi),
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (i as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }

    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    Ok(children)
}

/// Materialize the Chara forest down to `depth` levels (1..=5).
pub fn chara_tree(
    birth_jd: f64,
    inputs: &CharaInputs,
    depth: u8,
) -> Result<DashaTree, KundaliError> {
    if !(1..=5).contains(&depth) {
        return Err(KundaliError::InvalidInput("dasha depth must be 1..=5"));
    }

    let mut levels = Vec::with_capacity(depth as usize);
    levels.push(chara_maha_periods(birth_jd, inputs));

    for _ in 1..depth {
        let parents = levels.last().map(Vec::as_slice).unwrap_or(&[]);
        let mut next = Vec::with_capacity(parents.len() * 12);
        for (idx, parent) in parents.iter().enumerate() {
            next.extend(chara_children_of(parent, inputs, idx as u32)?);
        }
        levels.push(next);
    }

    Ok(DashaTree {
        system: DashaSystem::Chara,
        birth_jd,
        levels,
    })
}

/// Active Chara chain at `query_jd`, one entry per level down to `depth`.
pub fn chara_snapshot_at(
    birth_jd: f64,
    inputs: &CharaInputs,
    query_jd: f64,
    depth: u8,
) -> Result<DashaSnapshot, KundaliError> {
    if !(1..=5).contains(&depth) {
        return Err(KundaliError::InvalidInput("dasha depth must be 1..=5"));
    }

    let mahas = chara_maha_periods(birth_jd, inputs);
    let mut active = *find_active(&mahas, query_jd)
        .ok_or(KundaliError::InvalidInput("query date outside dasha coverage"))?;

    let mut chain = Vec::with_capacity(depth as usize);
    chain.push(active);

    for _ in 1..depth {
        let children = chara_children_of(&active, inputs, 0)?;
        active = *find_active(&children, query_jd)
            .ok_or(KundaliError::InvalidInput("active child period not found"))?;
        chain.push(active);
    }

    Ok(DashaSnapshot {
        system: DashaSystem::Chara,
        query_jd,
        periods: chain,
    })
}
