use std::time::Duration;

use log::{debug, error, info};
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::models::snake::{
    position::Direction,
    snake_bot::SnakeBot,
    snake_game::{GameState, TickOutcome},
};

#[derive(Debug)]
pub enum DriverMessage {
    Direction((usize, Direction)),
    Pause,
    Resume,
    Reset,
    GetGame(oneshot::Sender<GameState>),
    Kill,
}

/// Owns a [`GameState`] on a background task and ticks it at the interval of
/// its difficulty. Input is queued and only ever applied between ticks.
#[derive(Debug)]
pub struct TickDriver {
    sender_to_main_loop: mpsc::UnboundedSender<DriverMessage>,
    snapshots: watch::Receiver<GameState>,
    main_handle: JoinHandle<GameState>,
}

impl TickDriver {
    /// Starts ticking `game` on the current tokio runtime.
    #[must_use]
    pub fn spawn(game: GameState) -> Self {
        let (sender_to_main_loop, receiver_for_main_loop) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(game.clone());
        Self {
            sender_to_main_loop,
            snapshots,
            main_handle: Self::main_loop(game, receiver_for_main_loop, publisher),
        }
    }

    fn main_loop(
        mut game: GameState,
        mut receiver_for_main_loop: mpsc::UnboundedReceiver<DriverMessage>,
        publisher: watch::Sender<GameState>,
    ) -> JoinHandle<GameState> {
        tokio::spawn(async move {
            let mut interval = Self::new_interval(&game);
            let mut paused = false;
            loop {
                tokio::select! {
                    _ = interval.tick(), if !paused && !game.is_game_over() => {
                        if let TickOutcome::GameOver(reason) = game.tick() {
                            info!("Driver stopped ticking: {reason:?}");
                        }
                        publisher.send_replace(game.clone());
                    }
                    message = receiver_for_main_loop.recv() => {
                        let Some(message) = message else {
                            debug!("All driver handles dropped. Stopping main loop");
                            break;
                        };
                        match message {
                            DriverMessage::Direction((player, direction)) => {
                                if !game.request_direction(player, direction) {
                                    debug!("Rejected {direction:?} for player {player}");
                                }
                            }
                            DriverMessage::Pause => {
                                debug!("Pausing");
                                paused = true;
                            }
                            DriverMessage::Resume => {
                                debug!("Resuming");
                                paused = false;
                                interval.reset();
                            }
                            DriverMessage::Reset => {
                                match game.reset() {
                                    Ok(()) => {
                                        interval = Self::new_interval(&game);
                                        publisher.send_replace(game.clone());
                                    }
                                    Err(e) => error!("Could not reset the game: {e}"),
                                }
                            }
                            DriverMessage::GetGame(sender) => {
                                if sender.send(game.clone()).is_err() {
                                    error!("Problem sending game back. Receiver dropped");
                                }
                            }
                            DriverMessage::Kill => {
                                debug!("Killing main loop");
                                break;
                            }
                        }
                    }
                }
            }
            game
        })
    }

    fn new_interval(game: &GameState) -> time::Interval {
        let period = game.get_difficulty().get_tick_interval();
        // the first tick of a fresh interval fires immediately, start one period in
        let mut interval = time::interval_at(time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }

    fn send(&self, message: DriverMessage) {
        if let Err(e) = self.sender_to_main_loop.send(message) {
            error!("Error sending to main loop: {e}");
        }
    }

    pub fn steer(&self, player: usize, direction: Direction) {
        self.send(DriverMessage::Direction((player, direction)));
    }

    pub fn pause(&self) {
        self.send(DriverMessage::Pause);
    }

    pub fn resume(&self) {
        self.send(DriverMessage::Resume);
    }

    pub fn reset(&self) {
        self.send(DriverMessage::Reset);
    }

    /// A receiver that sees the state after every tick.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.snapshots.clone()
    }

    /// Asks the main loop for a copy of the current state.
    pub async fn get_game_copy(&self) -> Option<GameState> {
        let (sender, receiver) = oneshot::channel();
        self.send(DriverMessage::GetGame(sender));
        match receiver.await {
            Ok(game) => Some(game),
            Err(e) => {
                error!("Main loop did not answer get_game_copy: {e}");
                None
            }
        }
    }

    /// Resolves with the final state once the game is over.
    pub async fn wait_for_game_over(&self) -> Option<GameState> {
        let mut snapshots = self.subscribe();
        snapshots
            .wait_for(GameState::is_game_over)
            .await
            .map(|game| GameState::clone(&game))
            .map_err(|e| error!("Main loop went away before the game ended: {e}"))
            .ok()
    }

    /// Stops the main loop, waiting up to `timeout` before aborting it, and
    /// returns the state it was holding.
    pub async fn kill(mut self, timeout: Duration) -> Option<GameState> {
        if !self.main_handle.is_finished() {
            self.send(DriverMessage::Kill);
        }
        match time::timeout(timeout, &mut self.main_handle).await {
            Ok(Ok(game)) => Some(game),
            Ok(Err(e)) => {
                error!("Main loop panicked: {e}");
                None
            }
            Err(e) => {
                error!("Error closing main loop in time. Forcing abort: {e}");
                self.main_handle.abort();
                None
            }
        }
    }

    /// Starts a task that feeds `bot`'s moves into this driver after every tick.
    #[must_use]
    pub fn spawn_bot(&self, bot: Box<dyn SnakeBot>) -> JoinHandle<()> {
        let sender = self.sender_to_main_loop.clone();
        let mut snapshots = self.subscribe();
        let player_indx = bot.get_player_index();
        debug!("New bot task for player {player_indx}");
        tokio::spawn(async move {
            loop {
                if snapshots.changed().await.is_err() {
                    debug!("Bot {player_indx} lost its driver");
                    break;
                }
                let game = snapshots.borrow_and_update().clone();
                if game.is_game_over() {
                    debug!("Bot {player_indx} sees the game is over");
                    break;
                }
                let direction = bot.make_move(&game);
                if sender
                    .send(DriverMessage::Direction((player_indx, direction)))
                    .is_err()
                {
                    error!("Bot {player_indx} could not reach the main loop. Quitting");
                    break;
                }
            }
        })
    }
}
