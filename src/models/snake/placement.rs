//! Random placement of food and obstacles on free cells.
use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

use super::{board::Region, position::Position, snake_game::SnakeError};

/// Random draws attempted before falling back to an exhaustive scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Draws a uniformly random cell of `region` for which `is_blocked` is false.
///
/// Rejection sampling is capped at [`MAX_PLACEMENT_ATTEMPTS`]. When the cap is
/// hit every free cell of the region is collected and one is chosen from
/// those, so a nearly full board still succeeds.
///
/// # Errors
///
/// Returns [`SnakeError::BoardSaturated`] if no cell of `region` is free.
pub fn sample_free_cell<R, F>(
    rng: &mut R,
    region: &Region,
    is_blocked: F,
) -> Result<Position, SnakeError>
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    if region.is_empty() {
        warn!("Asked to place inside an empty region {region:?}");
        return Err(SnakeError::BoardSaturated);
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = region.random_cell(rng);
        if !is_blocked(candidate) {
            return Ok(candidate);
        }
    }
    debug!("No free cell after {MAX_PLACEMENT_ATTEMPTS} draws in {region:?}. Scanning the region");
    let available: Vec<Position> = region.cells().filter(|p| !is_blocked(*p)).collect();
    if let Some(pos) = available.choose(rng) {
        Ok(*pos)
    } else {
        warn!("No where left to place in {region:?}");
        Err(SnakeError::BoardSaturated)
    }
}
