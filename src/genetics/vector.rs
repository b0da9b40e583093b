use super::direction::Direction;
use serde::{Deserialize, Serialize};

/// Orthogonal step lengths
pub const VECTOR_SHORT: f64 = 1.0;
pub const VECTOR_MEDIUM: f64 = 1.648721270700128; // e^0.5
pub const VECTOR_LONG: f64 = std::f64::consts::E;

/// Per-axis steps of the diagonal vectors, chosen so that a diagonal vector
/// has the same Euclidean length as the orthogonal vector of its class
pub const STEP_DIAGONAL_SHORT: f64 = std::f64::consts::FRAC_1_SQRT_2;
pub const STEP_DIAGONAL_MEDIUM: f64 = 1.165821990798562;

pub const VECTOR_COUNT: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthClass {
    Short,
    Medium,
    Long,
}

impl LengthClass {
    pub fn index(self) -> usize {
        match self {
            LengthClass::Short => 0,
            LengthClass::Medium => 1,
            LengthClass::Long => 2,
        }
    }
}

/// A movement instruction coded by a codon
///
/// The discriminant is the vector id used to index the coherence data and
/// the codon table buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Vector {
    Stop = 0,
    NorthShort,
    NorthMedium,
    NorthLong,
    NortheastShort,
    NortheastMedium,
    EastShort,
    EastMedium,
    EastLong,
    SoutheastShort,
    SoutheastMedium,
    SouthShort,
    SouthMedium,
    SouthLong,
    SouthwestShort,
    SouthwestMedium,
    WestShort,
    WestMedium,
    WestLong,
    NorthwestShort,
    NorthwestMedium,
}

/// Immutable description of one catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorInfo {
    pub dx: f64,
    pub dy: f64,
    pub length: f64,
    pub length_class: LengthClass,
    pub direction: Direction,
    pub name: &'static str,
}

const fn info(
    dx: f64,
    dy: f64,
    length: f64,
    length_class: LengthClass,
    direction: Direction,
    name: &'static str,
) -> VectorInfo {
    VectorInfo { dx, dy, length, length_class, direction, name }
}

use Direction as D;
use LengthClass as L;

const CATALOG: [VectorInfo; VECTOR_COUNT] = [
    info(0.0, 0.0, 0.0, L::Short, D::Stop, "STP"),
    // North
    info(0.0, VECTOR_SHORT, VECTOR_SHORT, L::Short, D::North, "Nos"),
    info(0.0, VECTOR_MEDIUM, VECTOR_MEDIUM, L::Medium, D::North, "Nom"),
    info(0.0, VECTOR_LONG, VECTOR_LONG, L::Long, D::North, "Nol"),
    // Northeast
    info(STEP_DIAGONAL_SHORT, STEP_DIAGONAL_SHORT, VECTOR_SHORT, L::Short, D::Northeast, "Nes"),
    info(STEP_DIAGONAL_MEDIUM, STEP_DIAGONAL_MEDIUM, VECTOR_MEDIUM, L::Medium, D::Northeast, "Nem"),
    // East
    info(VECTOR_SHORT, 0.0, VECTOR_SHORT, L::Short, D::East, "Eas"),
    info(VECTOR_MEDIUM, 0.0, VECTOR_MEDIUM, L::Medium, D::East, "Eam"),
    info(VECTOR_LONG, 0.0, VECTOR_LONG, L::Long, D::East, "Eal"),
    // Southeast
    info(STEP_DIAGONAL_SHORT, -STEP_DIAGONAL_SHORT, VECTOR_SHORT, L::Short, D::Southeast, "Ses"),
    info(STEP_DIAGONAL_MEDIUM, -STEP_DIAGONAL_MEDIUM, VECTOR_MEDIUM, L::Medium, D::Southeast, "Sem"),
    // South
    info(0.0, -VECTOR_SHORT, VECTOR_SHORT, L::Short, D::South, "Sos"),
    info(0.0, -VECTOR_MEDIUM, VECTOR_MEDIUM, L::Medium, D::South, "Som"),
    info(0.0, -VECTOR_LONG, VECTOR_LONG, L::Long, D::South, "Sol"),
    // Southwest
    info(-STEP_DIAGONAL_SHORT, -STEP_DIAGONAL_SHORT, VECTOR_SHORT, L::Short, D::Southwest, "Sws"),
    info(-STEP_DIAGONAL_MEDIUM, -STEP_DIAGONAL_MEDIUM, VECTOR_MEDIUM, L::Medium, D::Southwest, "Swm"),
    // West
    info(-VECTOR_SHORT, 0.0, VECTOR_SHORT, L::Short, D::West, "Wes"),
    info(-VECTOR_MEDIUM, 0.0, VECTOR_MEDIUM, L::Medium, D::West, "Wem"),
    info(-VECTOR_LONG, 0.0, VECTOR_LONG, L::Long, D::West, "Wel"),
    // Northwest
    info(-STEP_DIAGONAL_SHORT, STEP_DIAGONAL_SHORT, VECTOR_SHORT, L::Short, D::Northwest, "Nws"),
    info(-STEP_DIAGONAL_MEDIUM, STEP_DIAGONAL_MEDIUM, VECTOR_MEDIUM, L::Medium, D::Northwest, "Nwm"),
];

impl Vector {
    /// Every vector, ordered by id
    pub const ALL: [Vector; VECTOR_COUNT] = [
        Vector::Stop,
        Vector::NorthShort,
        Vector::NorthMedium,
        Vector::NorthLong,
        Vector::NortheastShort,
        Vector::NortheastMedium,
        Vector::EastShort,
        Vector::EastMedium,
        Vector::EastLong,
        Vector::SoutheastShort,
        Vector::SoutheastMedium,
        Vector::SouthShort,
        Vector::SouthMedium,
        Vector::SouthLong,
        Vector::SouthwestShort,
        Vector::SouthwestMedium,
        Vector::WestShort,
        Vector::WestMedium,
        Vector::WestLong,
        Vector::NorthwestShort,
        Vector::NorthwestMedium,
    ];

    pub fn id(self) -> usize {
        self as usize
    }

    pub fn from_id(id: usize) -> Option<Vector> {
        Self::ALL.get(id).copied()
    }

    /// Look up a vector by its 3-letter name (e.g. `Nom`)
    pub fn from_name(name: &str) -> Option<Vector> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    /// The vector heading in `direction` with the given length class, if the
    /// catalog has one (diagonals have no long form)
    pub fn create(direction: Direction, length_class: LengthClass) -> Option<Vector> {
        if direction == Direction::Stop {
            return Some(Vector::Stop);
        }
        Self::ALL[1..]
            .iter()
            .copied()
            .find(|v| v.direction() == direction && v.length_class() == length_class)
    }

    pub fn info(self) -> &'static VectorInfo {
        &CATALOG[self as usize]
    }

    pub fn dx(self) -> f64 {
        self.info().dx
    }

    pub fn dy(self) -> f64 {
        self.info().dy
    }

    /// Euclidean length of the movement (zero for Stop)
    pub fn length(self) -> f64 {
        self.info().length
    }

    pub fn length_class(self) -> LengthClass {
        self.info().length_class
    }

    pub fn direction(self) -> Direction {
        self.info().direction
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn is_stop(self) -> bool {
        self == Vector::Stop
    }

    pub fn opposite(self) -> Vector {
        match Vector::create(self.direction().opposite(), self.length_class()) {
            Some(v) => v,
            None => self,
        }
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Vector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> std::result::Result<Self, De::Error> {
        let name = String::deserialize(deserializer)?;
        Vector::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown vector {:?}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_match_positions() {
        for (i, v) in Vector::ALL.iter().enumerate() {
            assert_eq!(v.id(), i);
            assert_eq!(Vector::from_id(i), Some(*v));
        }
        assert_eq!(Vector::from_id(VECTOR_COUNT), None);
    }

    #[test]
    fn test_names_are_stable() {
        let names: Vec<&str> = Vector::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(
            names.join(" "),
            "STP Nos Nom Nol Nes Nem Eas Eam Eal Ses Sem Sos Som Sol Sws Swm Wes Wem Wel Nws Nwm"
        );
        assert_eq!(Vector::from_name("Nem"), Some(Vector::NortheastMedium));
        assert_eq!(Vector::from_name("nem"), None);
    }

    #[test]
    fn test_diagonal_steps_match_orthogonal_lengths() {
        for v in Vector::ALL.iter().skip(1) {
            let euclid = (v.dx() * v.dx() + v.dy() * v.dy()).sqrt();
            assert!((euclid - v.length()).abs() < 1e-9, "{} has length {}", v, euclid);
        }
        assert!((STEP_DIAGONAL_SHORT - 0.70710678).abs() < 1e-8);
        assert!((STEP_DIAGONAL_MEDIUM - 1.16582199).abs() < 1e-8);
        assert!((VECTOR_MEDIUM - 1.64872127).abs() < 1e-8);
        assert!((VECTOR_LONG - 2.71828183).abs() < 1e-8);
    }

    #[test]
    fn test_diagonals_have_no_long_form() {
        for d in Direction::COMPASS {
            let long = Vector::create(d, LengthClass::Long);
            assert_eq!(long.is_some(), !d.is_diagonal());
            assert!(Vector::create(d, LengthClass::Short).is_some());
            assert!(Vector::create(d, LengthClass::Medium).is_some());
        }
    }

    #[test]
    fn test_opposite_vectors() {
        assert_eq!(Vector::NorthShort.opposite(), Vector::SouthShort);
        assert_eq!(Vector::NortheastMedium.opposite(), Vector::SouthwestMedium);
        assert_eq!(Vector::WestLong.opposite(), Vector::EastLong);
        assert_eq!(Vector::Stop.opposite(), Vector::Stop);
        for v in Vector::ALL {
            assert_eq!(v.opposite().opposite(), v);
        }
    }
}
