//! Module for containing the Snake Game Player.
use std::collections::VecDeque;

use super::position::{Direction, Position};

/// One snake on the board together with its buffered input and score.
#[derive(Clone, Debug)]
pub struct SnakePlayer {
    pub player_id: usize,
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
}

impl SnakePlayer {
    /// Creates a new single cell snake at `head`.
    #[must_use]
    pub fn new(player_id: usize, head: Position, starting_direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(head);
        Self::from_body(player_id, body, starting_direction)
    }

    /// Creates a snake from an explicit body, head first.
    #[must_use]
    pub fn from_body(player_id: usize, body: VecDeque<Position>, direction: Direction) -> Self {
        Self {
            player_id,
            body,
            direction,
            pending_direction: direction,
            score: 0,
        }
    }

    /// Returns the head of the snake if it has one.
    #[must_use]
    pub fn get_head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    #[must_use]
    pub fn get_body(&self) -> &VecDeque<Position> {
        &self.body
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn get_pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn get_name(&self) -> String {
        format!("Player {}", self.player_id + 1)
    }

    /// Buffers `direction` for the next tick. A reversal of the committed
    /// direction is refused and leaves the buffer untouched. Later requests
    /// overwrite earlier ones.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.get_opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Promotes the buffered direction and returns it.
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.pending_direction;
        self.direction
    }

    /// Whether `pos` is still covered by this snake once it has moved.
    /// Unless it is eating, the tail cell is vacated first and does not count.
    #[must_use]
    pub fn occupies_after_move(&self, pos: Position, will_eat: bool) -> bool {
        let keep = if will_eat {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        self.body.iter().take(keep).any(|p| *p == pos)
    }

    #[must_use]
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Moves the head onto `new_head`, dropping the tail unless growing.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score += amount;
    }
}
