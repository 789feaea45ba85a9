pub mod board;
pub mod bots;
pub mod collision;
pub mod difficulty;
pub mod placement;
pub mod position;
pub mod score;
pub mod snake_bot;
pub mod snake_game;
pub mod snake_player;
