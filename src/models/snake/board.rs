//! Board geometry for both game modes.
use std::collections::HashSet;

use rand::Rng;

use super::position::Position;

pub const SINGLE_BOARD_WIDTH: i32 = 20;
pub const SINGLE_BOARD_HEIGHT: i32 = 20;
/// Two 20 column halves plus the wall column between them.
pub const SPLIT_BOARD_WIDTH: i32 = 41;
pub const SPLIT_BOARD_HEIGHT: i32 = 20;

/// Rectangle of cells, `start` inclusive and `end` exclusive on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x_start: i32,
    pub x_end: i32,
    pub y_start: i32,
    pub y_end: i32,
}

impl Region {
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        (self.x_start..self.x_end).contains(&pos.x) && (self.y_start..self.y_end).contains(&pos.y)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_start >= self.x_end || self.y_start >= self.y_end
    }

    /// Uniformly random cell in the region. The region must not be empty.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.gen_range(self.x_start..self.x_end),
            rng.gen_range(self.y_start..self.y_end),
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y_start..self.y_end)
            .flat_map(move |y| (self.x_start..self.x_end).map(move |x| Position::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Leaving one edge re-enters from the opposite one.
    Toroidal,
    /// Hard edges, cut in two by a wall column at `midline`.
    Split { midline: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub topology: Topology,
}

impl Board {
    #[must_use]
    pub fn single() -> Self {
        Self {
            width: SINGLE_BOARD_WIDTH,
            height: SINGLE_BOARD_HEIGHT,
            topology: Topology::Toroidal,
        }
    }

    #[must_use]
    pub fn split() -> Self {
        Self {
            width: SPLIT_BOARD_WIDTH,
            height: SPLIT_BOARD_HEIGHT,
            topology: Topology::Split {
                midline: SPLIT_BOARD_WIDTH / 2,
            },
        }
    }

    #[must_use]
    pub fn full_region(&self) -> Region {
        Region {
            x_start: 0,
            x_end: self.width,
            y_start: 0,
            y_end: self.height,
        }
    }

    /// The cells `player` may legally occupy. On a split board each half
    /// includes the wall column so that stepping onto it reads as hitting the
    /// wall rather than leaving the board.
    #[must_use]
    pub fn region_for(&self, player: usize) -> Region {
        match self.topology {
            Topology::Toroidal => self.full_region(),
            Topology::Split { midline } => {
                let (x_start, x_end) = if player == 0 {
                    (0, midline + 1)
                } else {
                    (midline, self.width)
                };
                Region {
                    x_start,
                    x_end,
                    y_start: 0,
                    y_end: self.height,
                }
            }
        }
    }

    /// Cells of the midline wall. Empty on a toroidal board.
    #[must_use]
    pub fn wall_cells(&self) -> HashSet<Position> {
        match self.topology {
            Topology::Toroidal => HashSet::new(),
            Topology::Split { midline } => (0..self.height)
                .map(|y| Position::new(midline, y))
                .collect(),
        }
    }

    #[must_use]
    pub fn wraps(&self) -> bool {
        matches!(self.topology, Topology::Toroidal)
    }
}
