use crate::models::snake::{position::Direction, snake_bot::SnakeBot, snake_game::GameState};

#[derive(Debug)]
pub struct RandomBot {
    player_indx: usize,
}

impl RandomBot {
    #[must_use]
    pub fn new(player_indx: usize) -> Self {
        Self { player_indx }
    }
}

impl SnakeBot for RandomBot {
    fn make_move(&self, _game_state: &GameState) -> Direction {
        Direction::get_random_direction()
    }

    fn get_player_index(&self) -> usize {
        self.player_indx
    }
}
