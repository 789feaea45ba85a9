use std::collections::HashSet;

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    board::Board,
    collision::{self, Candidate, Collision, Hazards},
    difficulty::Difficulty,
    placement,
    position::{Direction, Position},
    score::ScoreRecord,
    snake_player::SnakePlayer,
};

/// Points awarded for every piece of food eaten.
pub const FOOD_REWARD: u32 = 10;
/// Cells ahead of a fresh single-player snake that never receive an obstacle.
pub const SPAWN_CLEARANCE: usize = 3;

type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnakeError {
    /// Nowhere left to put food or an obstacle.
    BoardSaturated,
}

impl std::fmt::Display for SnakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeError::BoardSaturated => write!(f, "no free cell left on the board"),
        }
    }
}

impl std::error::Error for SnakeError {}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    /// A two-player head left its half of the board.
    OutOfBounds(usize),
    Collision(Collision),
    /// Food could not be respawned.
    BoardSaturated,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Everyone moved. `ate[p]` is true if player `p` ate this tick.
    Running { ate: [bool; 2] },
    GameOver(GameOverReason),
    /// The game had already ended; nothing changed.
    AlreadyOver,
}

/// Everything that only exists in one of the two modes.
#[derive(Clone, Debug)]
pub enum GameMode {
    SinglePlayer {
        obstacles: HashSet<Position>,
    },
    TwoPlayer {
        wall: HashSet<Position>,
        second: SnakePlayer,
        second_food: Position,
    },
}

/// Model of the Snake Game.
#[derive(Clone, Debug)]
pub struct GameState {
    difficulty: Difficulty,
    board: Board,
    first: SnakePlayer,
    first_food: Position,
    mode: GameMode,
    game_over: Option<GameOverReason>,
    ticks: u64,
    rng: StdRng,
}

impl GameState {
    /// Creates a new game seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::BoardSaturated`] if the initial food or obstacles
    /// cannot be placed.
    pub fn new(difficulty: Difficulty, two_player: bool) -> Result<Self> {
        Self::build(difficulty, two_player, StdRng::from_entropy())
    }

    /// Creates a new game whose random placements are fully determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`GameState::new`].
    pub fn new_with_seed(difficulty: Difficulty, two_player: bool, seed: u64) -> Result<Self> {
        Self::build(difficulty, two_player, StdRng::seed_from_u64(seed))
    }

    fn build(difficulty: Difficulty, two_player: bool, mut rng: StdRng) -> Result<Self> {
        debug!("New game: difficulty {difficulty}, two player {two_player}");
        if two_player {
            let board = Board::split();
            let mid_y = board.height / 2;
            let first = SnakePlayer::new(0, Position::new(board.width / 4, mid_y), Direction::Right);
            let second = SnakePlayer::new(
                1,
                Position::new(board.width * 3 / 4, mid_y),
                Direction::Left,
            );
            let wall = board.wall_cells();
            let blocked = |p: Position| first.occupies(p) || second.occupies(p) || wall.contains(&p);
            let first_food = placement::sample_free_cell(&mut rng, &board.region_for(0), blocked)?;
            let second_food = placement::sample_free_cell(&mut rng, &board.region_for(1), |p| {
                blocked(p) || p == first_food
            })?;
            return Ok(Self {
                difficulty,
                board,
                first,
                first_food,
                mode: GameMode::TwoPlayer {
                    wall,
                    second,
                    second_food,
                },
                game_over: None,
                ticks: 0,
                rng,
            });
        }

        let board = Board::single();
        let start = Position::new(board.width / 2, board.height / 2);
        let first = SnakePlayer::new(0, start, Direction::Right);
        let first_food =
            placement::sample_free_cell(&mut rng, &board.full_region(), |p| first.occupies(p))?;

        let mut runway = HashSet::with_capacity(SPAWN_CLEARANCE);
        let mut cell = start;
        for _ in 0..SPAWN_CLEARANCE {
            cell = cell.moved(first.get_direction()).wrapped(board.width, board.height);
            runway.insert(cell);
        }
        let mut obstacles = HashSet::with_capacity(difficulty.get_obstacle_count());
        for _ in 0..difficulty.get_obstacle_count() {
            let obstacle = placement::sample_free_cell(&mut rng, &board.full_region(), |p| {
                first.occupies(p) || p == first_food || runway.contains(&p) || obstacles.contains(&p)
            })?;
            obstacles.insert(obstacle);
        }
        Ok(Self {
            difficulty,
            board,
            first,
            first_food,
            mode: GameMode::SinglePlayer { obstacles },
            game_over: None,
            ticks: 0,
            rng,
        })
    }

    /// Starts over with the same difficulty and mode.
    ///
    /// # Errors
    ///
    /// See [`GameState::new`]. On error the current state is left untouched.
    pub fn reset(&mut self) -> Result<()> {
        let rng = StdRng::from_rng(&mut self.rng).unwrap_or_else(|_| StdRng::from_entropy());
        *self = Self::build(self.difficulty, self.is_two_player(), rng)?;
        Ok(())
    }

    /// Buffers a direction change for `player`, applied at the next tick.
    /// Returns false if the request reverses the current direction, names a
    /// player that is not in the game, or the game is over.
    pub fn request_direction(&mut self, player: usize, direction: Direction) -> bool {
        if self.game_over.is_some() {
            debug!("Ignoring direction for player {player} after game over");
            return false;
        }
        if let Some(snake) = self.get_mut_player(player) {
            snake.request_direction(direction)
        } else {
            debug!("Tried to steer player {player} but it is not in this game");
            false
        }
    }

    /// Advances the world by one step.
    ///
    /// A fatal tick leaves every body exactly as it was before the tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over.is_some() {
            return TickOutcome::AlreadyOver;
        }
        self.ticks += 1;

        let first_head = match self.next_head(0) {
            Ok(head) => head,
            Err(reason) => return self.end(reason),
        };
        let second_head = if self.is_two_player() {
            match self.next_head(1) {
                Ok(head) => Some(head),
                Err(reason) => return self.end(reason),
            }
        } else {
            None
        };
        let ate = [
            first_head == self.first_food,
            second_head.is_some_and(|head| Some(head) == self.get_food(1)),
        ];

        let first = Candidate {
            snake: &self.first,
            head: first_head,
            will_eat: ate[0],
        };
        let collision = match (&self.mode, second_head) {
            (GameMode::SinglePlayer { obstacles }, _) => {
                collision::resolve(&first, &Hazards::Obstacles(obstacles))
            }
            (GameMode::TwoPlayer { wall, second, .. }, Some(head)) => {
                let other = Candidate {
                    snake: second,
                    head,
                    will_eat: ate[1],
                };
                collision::resolve(&first, &Hazards::Opponent { wall, other })
            }
            (GameMode::TwoPlayer { .. }, None) => None,
        };
        if let Some(collision) = collision {
            return self.end(GameOverReason::Collision(collision));
        }

        self.first.advance(first_head, ate[0]);
        if let (GameMode::TwoPlayer { second, .. }, Some(head)) = (&mut self.mode, second_head) {
            second.advance(head, ate[1]);
        }

        // every eater is paid before any respawn can end the game
        for (player, eaten) in ate.iter().enumerate() {
            if !eaten {
                continue;
            }
            if let Some(snake) = self.get_mut_player(player) {
                snake.add_score(FOOD_REWARD);
            }
        }
        for (player, eaten) in ate.iter().enumerate() {
            if !eaten {
                continue;
            }
            if let Err(e) = self.respawn_food(player) {
                warn!("Could not respawn food for player {player}: {e}");
                return self.end(GameOverReason::BoardSaturated);
            }
        }
        TickOutcome::Running { ate }
    }

    /// Commits `player`'s buffered direction and works out where its head
    /// goes: wrapped on a toroidal board, checked against the player's half
    /// on a split one.
    fn next_head(&mut self, player: usize) -> std::result::Result<Position, GameOverReason> {
        let board = self.board;
        let Some(snake) = self.get_mut_player(player) else {
            return Err(GameOverReason::OutOfBounds(player));
        };
        let direction = snake.commit_direction();
        let Some(head) = snake.get_head() else {
            return Err(GameOverReason::OutOfBounds(player));
        };
        let moved = head.moved(direction);
        if board.wraps() {
            return Ok(moved.wrapped(board.width, board.height));
        }
        if board.region_for(player).contains(moved) {
            Ok(moved)
        } else {
            Err(GameOverReason::OutOfBounds(player))
        }
    }

    fn respawn_food(&mut self, player: usize) -> Result<()> {
        let region = self.board.region_for(player);
        let first = &self.first;
        match &mut self.mode {
            GameMode::SinglePlayer { obstacles } => {
                self.first_food = placement::sample_free_cell(&mut self.rng, &region, |p| {
                    first.occupies(p) || obstacles.contains(&p)
                })?;
            }
            GameMode::TwoPlayer {
                wall,
                second,
                second_food,
            } => {
                let other_food = if player == 0 { *second_food } else { self.first_food };
                let food = placement::sample_free_cell(&mut self.rng, &region, |p| {
                    first.occupies(p) || second.occupies(p) || wall.contains(&p) || p == other_food
                })?;
                if player == 0 {
                    self.first_food = food;
                } else {
                    *second_food = food;
                }
            }
        }
        Ok(())
    }

    fn end(&mut self, reason: GameOverReason) -> TickOutcome {
        info!("Game over after {} ticks: {reason:?}", self.ticks);
        self.game_over = Some(reason);
        TickOutcome::GameOver(reason)
    }

    /// One record per player, ready for the score store. `None` until the
    /// game is over. Missing names fall back to "Player N".
    #[must_use]
    pub fn score_records(&self, names: &[&str]) -> Option<Vec<ScoreRecord>> {
        self.game_over?;
        Some(
            self.get_all_players()
                .into_iter()
                .map(|p| ScoreRecord {
                    player_name: names
                        .get(p.player_id)
                        .map_or_else(|| p.get_name(), |n| (*n).to_string()),
                    score: p.get_score(),
                    difficulty_name: self.difficulty.get_name().to_string(),
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn get_player(&self, player: usize) -> Option<&SnakePlayer> {
        match (player, &self.mode) {
            (0, _) => Some(&self.first),
            (1, GameMode::TwoPlayer { second, .. }) => Some(second),
            _ => None,
        }
    }

    fn get_mut_player(&mut self, player: usize) -> Option<&mut SnakePlayer> {
        match (player, &mut self.mode) {
            (0, _) => Some(&mut self.first),
            (1, GameMode::TwoPlayer { second, .. }) => Some(second),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_all_players(&self) -> Vec<&SnakePlayer> {
        (0..self.get_player_count())
            .filter_map(|p| self.get_player(p))
            .collect()
    }

    #[must_use]
    pub fn get_player_count(&self) -> usize {
        match self.mode {
            GameMode::SinglePlayer { .. } => 1,
            GameMode::TwoPlayer { .. } => 2,
        }
    }

    #[must_use]
    pub fn get_body(&self, player: usize) -> Option<Vec<Position>> {
        self.get_player(player)
            .map(|p| p.get_body().iter().copied().collect())
    }

    #[must_use]
    pub fn get_food(&self, player: usize) -> Option<Position> {
        match (player, &self.mode) {
            (0, _) => Some(self.first_food),
            (1, GameMode::TwoPlayer { second_food, .. }) => Some(*second_food),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_score(&self, player: usize) -> Option<u32> {
        self.get_player(player).map(SnakePlayer::get_score)
    }

    #[must_use]
    pub fn get_direction(&self, player: usize) -> Option<Direction> {
        self.get_player(player).map(SnakePlayer::get_direction)
    }

    /// Obstacles of a single-player game. Empty in two-player mode.
    #[must_use]
    pub fn get_obstacles(&self) -> HashSet<Position> {
        match &self.mode {
            GameMode::SinglePlayer { obstacles } => obstacles.clone(),
            GameMode::TwoPlayer { .. } => HashSet::new(),
        }
    }

    /// The midline wall of a two-player game. Empty in single-player mode.
    #[must_use]
    pub fn get_wall(&self) -> HashSet<Position> {
        match &self.mode {
            GameMode::SinglePlayer { .. } => HashSet::new(),
            GameMode::TwoPlayer { wall, .. } => wall.clone(),
        }
    }

    #[must_use]
    pub fn is_two_player(&self) -> bool {
        matches!(self.mode, GameMode::TwoPlayer { .. })
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    #[must_use]
    pub fn get_game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    #[must_use]
    pub fn get_board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn get_width(&self) -> i32 {
        self.board.width
    }

    #[must_use]
    pub fn get_height(&self) -> i32 {
        self.board.height
    }

    #[must_use]
    pub fn get_difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn get_ticks(&self) -> u64 {
        self.ticks
    }
}
