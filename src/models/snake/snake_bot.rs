use super::{
    bots::{move_to_food_bot::MoveToFoodBot, random_snake_bot::RandomBot},
    position::Direction,
    snake_game::GameState,
};

/// Something that steers a snake, used in place of a keyboard.
pub trait SnakeBot: Send {
    fn make_move(&self, game_state: &GameState) -> Direction;

    fn get_player_index(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeBotType {
    RandomMoveBot,
    MoveToFoodBot,
}

impl SnakeBotType {
    #[must_use]
    pub fn make_new_bot(&self, player_indx: usize) -> Box<dyn SnakeBot> {
        match self {
            SnakeBotType::RandomMoveBot => Box::new(RandomBot::new(player_indx)),
            SnakeBotType::MoveToFoodBot => Box::new(MoveToFoodBot::new(player_indx)),
        }
    }
}

impl std::fmt::Display for SnakeBotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeBotType::RandomMoveBot => write!(f, "Randomly Moving Bot"),
            SnakeBotType::MoveToFoodBot => write!(f, "Move To Food Bot"),
        }
    }
}

impl std::str::FromStr for SnakeBotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(SnakeBotType::RandomMoveBot),
            "food" | "greedy" => Ok(SnakeBotType::MoveToFoodBot),
            other => Err(format!("unknown bot '{other}'")),
        }
    }
}
