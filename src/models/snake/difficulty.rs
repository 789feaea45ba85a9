use std::time::Duration;

/// Difficulty tier. Controls the tick interval and, in single-player,
/// how many obstacles are scattered on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const VALUES: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Milliseconds between two ticks.
    #[must_use]
    pub fn get_tick_millis(&self) -> u64 {
        match self {
            Difficulty::Easy => 200,
            Difficulty::Medium => 150,
            Difficulty::Hard => 100,
        }
    }

    #[must_use]
    pub fn get_tick_interval(&self) -> Duration {
        Duration::from_millis(self.get_tick_millis())
    }

    #[must_use]
    pub fn get_obstacle_count(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 15,
        }
    }

    /// Name handed to the score store.
    #[must_use]
    pub fn get_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harder_is_faster_and_denser() {
        let mut prev: Option<Difficulty> = None;
        for d in Difficulty::VALUES {
            if let Some(p) = prev {
                assert!(d.get_tick_millis() < p.get_tick_millis());
                assert!(d.get_obstacle_count() > p.get_obstacle_count());
            }
            prev = Some(d);
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for d in Difficulty::VALUES {
            assert_eq!(d.get_name().parse::<Difficulty>(), Ok(d));
        }
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
