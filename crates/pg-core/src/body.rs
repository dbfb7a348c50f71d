//! The physical part of a penguin: where it stands and which way it faces.

use std::fmt;

/// Horizontal facing.  `Left` sprites are drawn mirrored.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// `-1.0` for `Left`, `+1.0` for `Right`.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Whether the sprite must be mirrored horizontally when drawn.
    #[inline]
    pub fn is_mirrored(self) -> bool {
        self == Direction::Left
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// Position and facing of one penguin, in scene pixels.
///
/// Kept apart from the behavior state machine so a behavior can borrow the
/// body mutably while the agent still owns the behavior's state.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
}

impl Body {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, direction: Direction::default() }
    }
}
