use log::debug;

use crate::models::snake::{
    position::{Direction, Position},
    snake_bot::SnakeBot,
    snake_game::{GameOverReason, GameState, TickOutcome},
    snake_player::SnakePlayer,
};

/// Heads for its own food along the shortest axis distance, skipping any
/// direction that would kill it on the very next tick.
#[derive(Debug)]
pub struct MoveToFoodBot {
    player_indx: usize,
}

impl MoveToFoodBot {
    #[must_use]
    pub fn new(player_indx: usize) -> Self {
        Self { player_indx }
    }

    fn distance(game_state: &GameState, from: Position, to: Position) -> i32 {
        let dx = (from.x - to.x).abs();
        let dy = (from.y - to.y).abs();
        if game_state.get_board().wraps() {
            dx.min(game_state.get_width() - dx) + dy.min(game_state.get_height() - dy)
        } else {
            dx + dy
        }
    }

    /// Plays the next tick on a copy of the game and reports whether this
    /// bot's snake is the one that dies.
    fn is_fatal(&self, game_state: &GameState, direction: Direction) -> bool {
        let mut copy = game_state.clone();
        if !copy.request_direction(self.player_indx, direction) {
            return true;
        }
        match copy.tick() {
            TickOutcome::GameOver(GameOverReason::OutOfBounds(p)) => p == self.player_indx,
            TickOutcome::GameOver(GameOverReason::Collision(c)) => c.player == self.player_indx,
            TickOutcome::GameOver(GameOverReason::BoardSaturated)
            | TickOutcome::Running { .. }
            | TickOutcome::AlreadyOver => false,
        }
    }
}

impl SnakeBot for MoveToFoodBot {
    fn make_move(&self, game_state: &GameState) -> Direction {
        let (Some(head), Some(food), Some(current)) = (
            game_state.get_player(self.player_indx).and_then(SnakePlayer::get_head),
            game_state.get_food(self.player_indx),
            game_state.get_direction(self.player_indx),
        ) else {
            debug!("Bot {} has no snake to steer", self.player_indx);
            return Direction::get_random_direction();
        };

        let mut options: Vec<(i32, Direction)> = Direction::VARIANTS
            .iter()
            .filter(|d| **d != current.get_opposite())
            .map(|d| {
                let (w, h) = (game_state.get_width(), game_state.get_height());
                let mut next = head.moved(*d);
                if game_state.get_board().wraps() {
                    next = next.wrapped(w, h);
                }
                (Self::distance(game_state, next, food), *d)
            })
            .collect();
        options.sort_by_key(|(dist, _)| *dist);

        options
            .iter()
            .map(|(_, d)| *d)
            .find(|d| !self.is_fatal(game_state, *d))
            .unwrap_or(current)
    }

    fn get_player_index(&self) -> usize {
        self.player_indx
    }
}
