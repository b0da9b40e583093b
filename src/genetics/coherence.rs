//! Coherence of trivectors.
//!
//! A vector sequence bends smoothly through its middle vector when the
//! relation holds for (previous, current, next). The relation is fixed
//! reference data carried verbatim in `coherence_table`; it is not derived
//! from an angle threshold.

use super::coherence_table::COHERENCE;
use super::vector::Vector;

/// Number of vectors examined per coherence check
pub const TRIVECTOR_LENGTH: usize = 3;

pub fn is_coherent(previous: Vector, current: Vector, next: Vector) -> bool {
    COHERENCE[previous.id()][current.id()][next.id()]
}

/// Same lookup over raw vector ids; `None` when an id is outside the catalog
pub fn is_coherent_ids(previous: usize, current: usize, next: usize) -> Option<bool> {
    COHERENCE.get(previous)?.get(current)?.get(next).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::vector::VECTOR_COUNT;
    use Vector::*;

    #[test]
    fn test_straight_runs_are_coherent() {
        assert!(is_coherent(NorthShort, NorthShort, NorthShort));
        assert!(is_coherent(EastShort, EastShort, EastShort));
        assert!(is_coherent(NortheastShort, NortheastShort, NortheastShort));
        assert!(is_coherent(NorthLong, NorthLong, EastLong));
    }

    #[test]
    fn test_spot_values() {
        assert!(is_coherent(NorthShort, NortheastShort, EastShort));
        assert!(is_coherent(WestLong, NorthwestMedium, NorthShort));
        assert!(is_coherent(SouthShort, SoutheastShort, EastShort));
        assert!(is_coherent(NorthMedium, NorthShort, NorthMedium));
        assert!(!is_coherent(NorthShort, EastShort, SouthShort));
        assert!(!is_coherent(NorthShort, SouthShort, NorthShort));
        assert!(!is_coherent(EastMedium, EastMedium, WestMedium));
    }

    #[test]
    fn test_stop_is_never_coherent() {
        for a in Vector::ALL {
            for b in Vector::ALL {
                assert!(!is_coherent(Stop, a, b));
                assert!(!is_coherent(a, Stop, b));
                assert!(!is_coherent(a, b, Stop));
            }
        }
    }

    #[test]
    fn test_relation_is_total_and_symmetric_in_neighbours() {
        let mut coherent = 0;
        for a in Vector::ALL {
            for b in Vector::ALL {
                for c in Vector::ALL {
                    let value = is_coherent(a, b, c);
                    assert_eq!(value, is_coherent(c, b, a));
                    assert_eq!(Some(value), is_coherent_ids(a.id(), b.id(), c.id()));
                    if value {
                        coherent += 1;
                    }
                }
            }
        }
        assert_eq!(coherent, 2420);
    }

    #[test]
    fn test_ids_outside_catalog() {
        assert_eq!(is_coherent_ids(VECTOR_COUNT, 1, 1), None);
        assert_eq!(is_coherent_ids(1, 1, VECTOR_COUNT), None);
    }
}
