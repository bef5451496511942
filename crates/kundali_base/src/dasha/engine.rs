//! The shared dasha engine for nakshatra-anchored systems.
//!
//! One proportional-subdivision primitive drives every ruleset: top-level
//! periods start from the Moon's birth balance and cycle the lord order;
//! children of a period cycle from the parent's own lord and scale each
//! share down by the parent's duration. The last child's end is snapped
//! to the parent's end so every level tiles its parent exactly.

use crate::error::KundaliError;
use crate::nakshatra::{nakshatra_index, pada_of};

use super::balance::nakshatra_balance;
use super::rulesets::DashaRuleset;
use super::types::{
    DashaLevel, DashaPeriod, DashaSnapshot, DashaTree, MAX_PERIODS_PER_LEVEL,
};

/// Snap the last child's end to the parent's end, absorbing float drift.
fn snap_last_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Top-level (maha) periods from birth.
///
/// The first period carries only the birth balance of the starting
/// lord's share; full periods follow, cycling the lord order until at
/// least `num_years` from birth are covered.
pub fn maha_periods(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    ruleset: &DashaRuleset,
    num_years: f64,
) -> Vec<DashaPeriod> {
    let pada = pada_of(moon_sidereal_lon);
    let nak_idx = nakshatra_index(moon_sidereal_lon);
    let start = ruleset.starting_index(nak_idx, pada);
    let (_, balance_days, _) = nakshatra_balance(moon_sidereal_lon, ruleset.period_days(start));

    let horizon = birth_jd + num_years * super::types::DAYS_PER_YEAR;
    let mut periods = Vec::new();
    let mut cursor = birth_jd;
    let mut i = 0usize;

    while cursor < horizon {
        let idx = (start + i) % ruleset.len();
        let duration = if i == 0 {
            balance_days
        } else {
            ruleset.period_days(idx)
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            lord: ruleset.lords[idx],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Maha,
            order: (i as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
        i += 1;
    }

    periods
}

/// Children of one period: the full lord cycle starting from the
/// parent's own lord, each share scaled to the parent's duration.
///
/// Fails for periods already at the deepest level.
pub fn children_of(
    parent: &DashaPeriod,
    ruleset: &DashaRuleset,
    parent_idx: u32,
) -> Result<Vec<DashaPeriod>, KundaliError> {
    let child_level = parent
        .level
        .child_level()
        .ok_or(KundaliError::InvalidInput("prana periods have no children"))?;

    let parent_duration = parent.duration_days();
    let parent_pos = ruleset
        .lords
        .iter()
        .position(|&l| l == parent.lord)
        .ok_or(KundaliError::InvalidInput("parent lord not in ruleset"))?;

    let n = ruleset.len();
    let mut children = Vec::with_capacity(n);
    let mut cursor = parent.start_jd;

    for i in 0..n {
        let idx = (parent_pos + i) % n;
        let duration = (ruleset.years[idx] / ruleset.total_years) * parent_duration;
        let end = cursor + duration;
        children.push(DashaPeriod {
            lord: ruleset.lords[idx],
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (i as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_end(&mut children, parent.end_jd);
    Ok(children)
}

/// Materialize the full forest down to `depth` levels (1..=5).
pub fn expand_tree(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    ruleset: &DashaRuleset,
    depth: u8,
    num_years: f64,
) -> Result<DashaTree, KundaliError> {
    if !(1..=5).contains(&depth) {
        return Err(KundaliError::InvalidInput("dasha depth must be 1..=5"));
    }

    let mut levels = Vec::with_capacity(depth as usize);
    levels.push(maha_periods(birth_jd, moon_sidereal_lon, ruleset, num_years));

    for _ in 1..depth {
        let parents = levels.last().map(Vec::as_slice).unwrap_or(&[]);
        let next_len = parents.len() * ruleset.len();
        if next_len > MAX_PERIODS_PER_LEVEL {
            return Err(KundaliError::InvalidInput("per-level period cap exceeded"));
        }
        let mut next = Vec::with_capacity(next_len);
        for (idx, parent) in parents.iter().enumerate() {
            next.extend(children_of(parent, ruleset, idx as u32)?);
        }
        levels.push(next);
    }

    Ok(DashaTree {
        system: ruleset.system,
        birth_jd,
        levels,
    })
}

/// The period containing `jd`, if any.
pub fn find_active(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(jd))
}

/// The active period chain at `query_jd`, one entry per level down to
/// `depth`, expanding only the active branch.
pub fn snapshot_at(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    ruleset: &DashaRuleset,
    query_jd: f64,
    depth: u8,
    num_years: f64,
) -> Result<DashaSnapshot, KundaliError> {
    if !(1..=5).contains(&depth) {
        return Err(KundaliError::InvalidInput("dasha depth must be 1..=5"));
    }

    let mahas = maha_periods(birth_jd, moon_sidereal_lon, ruleset, num_years);
    let mut active = *find_active(&mahas, query_jd)
        .ok_or(KundaliError::InvalidInput("query date outside dasha coverage"))?;

    let mut chain = Vec::with_capacity(depth as usize);
    chain.push(active);

    for _ in 1..depth {
        let children = children_of(&active, ruleset, 0)?;
        active = *find_active(&children, query_jd)
            .ok_or(KundaliError::InvalidInput("active child period not found"))?;
        chain.push(active);
    }

    Ok(DashaSnapshot {
        system: ruleset.system,
        query_jd,
        periods: chain,
    })
}
