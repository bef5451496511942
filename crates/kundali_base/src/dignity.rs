//! Planetary dignity from sign placement.
//!
//! Each planet carries fixed sets of signs (1-based) for own, exaltation,
//! debilitation, friendly, and enemy placement. Sets are checked in that
//! priority order; signs may appear in more than one set and the earlier
//! set wins. Rahu and Ketu are always Neutral.

use crate::planet::Planet;

/// Dignity of a planet in a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dignity {
    Own,
    Exalted,
    Debilitated,
    Friend,
    Enemy,
    Neutral,
}

impl Dignity {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Own => "Own",
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::Friend => "Friend",
            Self::Enemy => "Enemy",
            Self::Neutral => "Neutral",
        }
    }
}

struct DignityRow {
    own: &'static [u8],
    exalted: &'static [u8],
    debilitated: &'static [u8],
    friends: &'static [u8],
    enemies: &'static [u8],
}

const fn row(planet: Planet) -> Option<&'static DignityRow> {
    match planet {
        Planet::Sun => Some(&DignityRow {
            own: &[5],
            exalted: &[1],
            debilitated: &[7],
            friends: &[3, 9],
            enemies: &[6, 12],
        }),
        Planet::Moon => Some(&DignityRow {
            own: &[4],
            exalted: &[2],
            debilitated: &[8],
            friends: &[5],
            enemies: &[10],
        }),
        Planet::Mars => Some(&DignityRow {
            own: &[1, 8],
            exalted: &[10],
            debilitated: &[4],
            friends: &[5, 9, 12],
            enemies: &[2, 3, 6, 7, 11],
        }),
        Planet::Mercury => Some(&DignityRow {
            own: &[3, 6],
            exalted: &[6],
            debilitated: &[12],
            friends: &[2, 5],
            enemies: &[9],
        }),
        Planet::Jupiter => Some(&DignityRow {
            own: &[9, 12],
            exalted: &[4],
            debilitated: &[10],
            friends: &[1, 5, 8],
            enemies: &[3, 6],
        }),
        Planet::Venus => Some(&DignityRow {
            own: &[2, 7],
            exalted: &[12],
            debilitated: &[6],
            friends: &[3, 8],
            enemies: &[5, 9],
        }),
        Planet::Saturn => Some(&DignityRow {
            own: &[10, 11],
            exalted: &[7],
            debilitated: &[1],
            friends: &[3, 6],
            enemies: &[1, 4, 5],
        }),
        Planet::Rahu | Planet::Ketu => None,
    }
}

fn contains(set: &[u8], rasi: u8) -> bool {
    set.contains(&rasi)
}

/// Dignity of a planet in a 1-based sign (1=Aries..12=Pisces).
pub fn dignity_of(planet: Planet, rasi: u8) -> Dignity {
    let Some(r) = row(planet) else {
        return Dignity::Neutral;
    };
    if contains(r.own, rasi) {
        Dignity::Own
    } else if contains(r.exalted, rasi) {
        Dignity::Exalted
    } else if contains(r.debilitated, rasi) {
        Dignity::Debilitated
    } else if contains(r.friends, rasi) {
        Dignity::Friend
    } else if contains(r.enemies, rasi) {
        Dignity::Enemy
    } else {
        Dignity::Neutral
    }
}
