//! Grid coordinates and movement directions.
use rand::Rng;

/// Direction a snake can travel in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const VARIANTS: &'static [Direction] = &[Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector `(dx, dy)`. The y axis grows downward.
    #[must_use]
    pub fn value(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn get_opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[must_use]
    pub fn get_random_direction() -> Direction {
        Direction::VARIANTS[rand::thread_rng().gen_range(0..Direction::VARIANTS.len())]
    }
}

/// A cell on the board. Moving produces a new value, never mutates in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, without any boundary handling.
    #[must_use]
    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.value();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Folds the position back onto a `width` x `height` torus.
    #[must_use]
    pub fn wrapped(self, width: i32, height: i32) -> Self {
        Self::new(self.x.rem_euclid(width), self.y.rem_euclid(height))
    }
}
