use std::time::Duration;

use clap::Parser;
use log::{debug, error, info};
use snake_sim::{
    driver::tick_driver::TickDriver,
    models::snake::{
        difficulty::Difficulty,
        score::{InMemoryScores, ScoreSink},
        snake_bot::SnakeBotType,
        snake_game::GameState,
    },
};

/// Plays a game of snake headlessly, with bots at the controls.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// easy, medium or hard
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Play the split board two-player game
    #[arg(short, long)]
    two_player: bool,

    /// random or food
    #[arg(short, long, default_value = "food")]
    bot: SnakeBotType,

    /// Names recorded with the final scores
    #[arg(short, long, num_args = 1..=2)]
    names: Vec<String>,

    /// Seed for food and obstacle placement
    #[arg(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "snake_sim=debug");
    }
    env_logger::init();
    let args = Args::parse();
    debug!("Args: {:#?}", args);

    let game = match args.seed {
        Some(seed) => GameState::new_with_seed(args.difficulty, args.two_player, seed),
        None => GameState::new(args.difficulty, args.two_player),
    };
    let game = match game {
        Ok(game) => game,
        Err(e) => {
            error!("Could not start a game: {e}");
            return;
        }
    };

    let driver = TickDriver::spawn(game.clone());
    let bots: Vec<_> = (0..game.get_player_count())
        .map(|p| driver.spawn_bot(args.bot.make_new_bot(p)))
        .collect();
    info!(
        "Playing {} with {} at {} ms per tick",
        args.difficulty,
        args.bot,
        args.difficulty.get_tick_millis()
    );

    let finished = driver.wait_for_game_over().await;
    for bot in bots {
        bot.abort();
    }
    let _ = driver.kill(Duration::from_secs(2)).await;
    let Some(finished) = finished else {
        return;
    };

    let names: Vec<&str> = args.names.iter().map(String::as_str).collect();
    let mut scores = InMemoryScores::new();
    for record in finished.score_records(&names).unwrap_or_default() {
        info!(
            "{}: {} points on {}",
            record.player_name, record.score, record.difficulty_name
        );
        scores.save(record).unwrap_or_else(|e| match e {});
    }
    info!(
        "Game lasted {} ticks: {:?}",
        finished.get_ticks(),
        finished.get_game_over_reason()
    );
}
