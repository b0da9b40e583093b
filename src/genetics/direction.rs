use serde::{Deserialize, Serialize};

/// Compass direction of a vector, plus the stop sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Stop = 0,
    North = 1,
    Northeast = 2,
    East = 3,
    Southeast = 4,
    South = 5,
    Southwest = 6,
    West = 7,
    Northwest = 8,
}

impl Direction {
    /// The eight compass points, clockwise from North
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Stop => Direction::Stop,
            other => other.rotate(4),
        }
    }

    /// Advance `n` eighth-turns clockwise (negative turns counter-clockwise).
    /// Stop never rotates.
    pub fn rotate(self, n: i32) -> Direction {
        match self {
            Direction::Stop => Direction::Stop,
            other => {
                let index = (other as i32 - 1 + n).rem_euclid(8);
                Self::COMPASS[index as usize]
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Stop => "STP",
            Direction::North => "No",
            Direction::Northeast => "Ne",
            Direction::East => "Ea",
            Direction::Southeast => "Se",
            Direction::South => "So",
            Direction::Southwest => "Sw",
            Direction::West => "We",
            Direction::Northwest => "Nw",
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::Northeast | Direction::Southeast | Direction::Southwest | Direction::Northwest
        )
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
