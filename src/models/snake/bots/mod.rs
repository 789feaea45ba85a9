pub mod move_to_food_bot;
pub mod random_snake_bot;
