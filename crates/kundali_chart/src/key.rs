//! Deterministic chart content key.
//!
//! FNV-1a 64 over the canonical string
//! `{instant}_{latitude}_{longitude}_{ayanamsa}`. Coordinates are
//! rendered with fixed precision so equal queries always hash equally.

use crate::types::BirthQuery;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64 over raw bytes.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Content key for a birth query.
pub fn chart_key(query: &BirthQuery) -> u64 {
    let canonical = format!(
        "{}_{:.6}_{:.6}_{}",
        query.instant.canonical(),
        query.latitude,
        query.longitude,
        query.ayanamsa.name()
    );
    fnv1a_64(canonical.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::UtcInstant;
    use crate::types::Ayanamsa;

    fn query() -> BirthQuery {
        BirthQuery::new(
            UtcInstant::new(1990, 5, 15, 10, 30, 0.0).unwrap(),
            28.61,
            77.23,
            Ayanamsa::Lahiri,
        )
        .unwrap()
    }

    #[test]
    fn fnv_known_vectors() {
        assert_eq!(fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn equal_queries_equal_keys() {
        assert_eq!(chart_key(&query()), chart_key(&query()));
    }

    #[test]
    fn different_queries_differ() {
        let base = query();
        let mut other = base;
        other.latitude = 28.62;
        assert_ne!(chart_key(&base), chart_key(&other));

        let mut other = base;
        other.ayanamsa = Ayanamsa::Raman;
        assert_ne!(chart_key(&base), chart_key(&other));
    }
}
