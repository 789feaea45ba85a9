//! Values handed to whatever stores high scores once a game ends.

/// One finished game's result for one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u32,
    pub difficulty_name: String,
}

/// Storage side of the high score table. The engine never calls this itself;
/// the caller passes [`ScoreRecord`]s along after the game is over.
pub trait ScoreSink {
    type Error;

    /// # Errors
    ///
    /// Whatever the backing store reports.
    fn save(&mut self, record: ScoreRecord) -> Result<(), Self::Error>;
}

/// Keeps scores in memory, best first.
#[derive(Clone, Debug, Default)]
pub struct InMemoryScores {
    records: Vec<ScoreRecord>,
}

impl InMemoryScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get_top(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }
}

impl ScoreSink for InMemoryScores {
    type Error = std::convert::Infallible;

    fn save(&mut self, record: ScoreRecord) -> Result<(), Self::Error> {
        let at = self
            .records
            .partition_point(|existing| existing.score >= record.score);
        self.records.insert(at, record);
        Ok(())
    }
}
