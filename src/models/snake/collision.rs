//! Decides whether a proposed move ends the game.
//!
//! Checks run in a fixed order and the first hit wins, so the same board
//! always reports the same collision even when several apply at once.
use std::collections::HashSet;

use super::{position::Position, snake_player::SnakePlayer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    SelfCollision,
    Obstacle,
    Wall,
    /// A head ran into the other snake's body.
    Cross,
    HeadToHead,
}

/// A collision and the player whose head caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Collision {
    pub kind: CollisionKind,
    pub player: usize,
}

/// A snake together with the head it is about to move onto.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub snake: &'a SnakePlayer,
    pub head: Position,
    pub will_eat: bool,
}

impl Candidate<'_> {
    fn hits_own_body(&self) -> bool {
        self.snake.occupies_after_move(self.head, self.will_eat)
    }

    fn hits_body_of(&self, other: &Candidate) -> bool {
        other.snake.occupies_after_move(self.head, other.will_eat)
    }

    fn collision(&self, kind: CollisionKind) -> Collision {
        Collision {
            kind,
            player: self.snake.player_id,
        }
    }
}

/// Static dangers on the board besides the snakes themselves.
#[derive(Clone, Copy, Debug)]
pub enum Hazards<'a> {
    Obstacles(&'a HashSet<Position>),
    Opponent {
        wall: &'a HashSet<Position>,
        other: Candidate<'a>,
    },
}

/// Returns the first collision produced by moving `first` (and the opponent,
/// if any) onto their candidate heads, or `None` if the move is safe.
#[must_use]
pub fn resolve(first: &Candidate, hazards: &Hazards) -> Option<Collision> {
    if first.hits_own_body() {
        return Some(first.collision(CollisionKind::SelfCollision));
    }
    match hazards {
        Hazards::Obstacles(obstacles) => obstacles
            .contains(&first.head)
            .then(|| first.collision(CollisionKind::Obstacle)),
        Hazards::Opponent { wall, other } => {
            if other.hits_own_body() {
                return Some(other.collision(CollisionKind::SelfCollision));
            }
            for c in [first, other] {
                if wall.contains(&c.head) {
                    return Some(c.collision(CollisionKind::Wall));
                }
            }
            if first.hits_body_of(other) {
                return Some(first.collision(CollisionKind::Cross));
            }
            if other.hits_body_of(first) {
                return Some(other.collision(CollisionKind::Cross));
            }
            (first.head == other.head).then(|| first.collision(CollisionKind::HeadToHead))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::models::snake::position::Direction;

    fn snake(id: usize, cells: &[(i32, i32)], direction: Direction) -> SnakePlayer {
        let body: VecDeque<Position> = cells.iter().map(|(x, y)| Position::new(*x, *y)).collect();
        SnakePlayer::from_body(id, body, direction)
    }

    #[test]
    fn test_no_collision_on_open_board() {
        let s = snake(0, &[(5, 5), (4, 5)], Direction::Right);
        let c = Candidate {
            snake: &s,
            head: Position::new(6, 5),
            will_eat: false,
        };
        let obstacles = HashSet::new();
        assert_eq!(resolve(&c, &Hazards::Obstacles(&obstacles)), None);
    }

    #[test]
    fn test_chasing_own_tail_is_safe_unless_growing() {
        // 2x2 loop: head moves onto the cell the tail leaves
        let s = snake(0, &[(1, 0), (1, 1), (0, 1), (0, 0)], Direction::Up);
        let obstacles = HashSet::new();
        let moving = Candidate {
            snake: &s,
            head: Position::new(0, 0),
            will_eat: false,
        };
        assert_eq!(resolve(&moving, &Hazards::Obstacles(&obstacles)), None);
        let growing = Candidate {
            will_eat: true,
            ..moving
        };
        assert_eq!(
            resolve(&growing, &Hazards::Obstacles(&obstacles)).map(|c| c.kind),
            Some(CollisionKind::SelfCollision)
        );
    }

    #[test]
    fn test_self_collision_beats_obstacle() {
        let s = snake(0, &[(2, 2), (2, 3), (3, 3), (3, 2), (3, 1)], Direction::Left);
        let head = Position::new(3, 2);
        let obstacles: HashSet<Position> = [head].into_iter().collect();
        let c = Candidate {
            snake: &s,
            head,
            will_eat: false,
        };
        assert_eq!(
            resolve(&c, &Hazards::Obstacles(&obstacles)),
            Some(Collision {
                kind: CollisionKind::SelfCollision,
                player: 0
            })
        );
    }

    #[test]
    fn test_obstacle() {
        let s = snake(0, &[(2, 2)], Direction::Right);
        let obstacles: HashSet<Position> = [Position::new(3, 2)].into_iter().collect();
        let c = Candidate {
            snake: &s,
            head: Position::new(3, 2),
            will_eat: false,
        };
        assert_eq!(
            resolve(&c, &Hazards::Obstacles(&obstacles)).map(|c| c.kind),
            Some(CollisionKind::Obstacle)
        );
    }

    #[test]
    fn test_two_player_priorities() {
        let wall: HashSet<Position> = (0..5).map(|y| Position::new(5, y)).collect();
        let a = snake(0, &[(4, 2), (3, 2)], Direction::Right);
        let b = snake(1, &[(6, 2), (7, 2)], Direction::Left);

        // both step onto the wall at the same cell: the wall is reported first
        let first = Candidate {
            snake: &a,
            head: Position::new(5, 2),
            will_eat: false,
        };
        let other = Candidate {
            snake: &b,
            head: Position::new(5, 2),
            will_eat: false,
        };
        assert_eq!(
            resolve(&first, &Hazards::Opponent { wall: &wall, other }),
            Some(Collision {
                kind: CollisionKind::Wall,
                player: 0
            })
        );

        // without a wall the same move is a head-to-head
        let no_wall = HashSet::new();
        assert_eq!(
            resolve(&first, &Hazards::Opponent { wall: &no_wall, other }).map(|c| c.kind),
            Some(CollisionKind::HeadToHead)
        );
    }

    #[test]
    fn test_self_collision_beats_cross_and_head_to_head() {
        let no_wall = HashSet::new();
        let a = snake(0, &[(2, 2), (2, 3), (3, 3), (3, 2), (3, 1)], Direction::Left);
        let b = snake(1, &[(4, 2), (5, 2)], Direction::Left);
        let first = Candidate {
            snake: &a,
            head: Position::new(3, 2),
            will_eat: false,
        };
        // b also lands on (3, 2): inside a's body and on a's new head
        let other = Candidate {
            snake: &b,
            head: Position::new(3, 2),
            will_eat: false,
        };
        assert_eq!(
            resolve(&first, &Hazards::Opponent { wall: &no_wall, other }),
            Some(Collision {
                kind: CollisionKind::SelfCollision,
                player: 0
            })
        );
    }

    #[test]
    fn test_cross_collision_uses_remaining_body() {
        let no_wall = HashSet::new();
        let a = snake(0, &[(1, 1), (1, 2)], Direction::Up);
        let b = snake(1, &[(3, 0), (2, 0), (1, 0)], Direction::Right);
        let first = Candidate {
            snake: &a,
            head: Position::new(1, 0),
            will_eat: false,
        };
        let moving = Candidate {
            snake: &b,
            head: Position::new(4, 0),
            will_eat: false,
        };
        // b's tail leaves (1, 0) this tick
        assert_eq!(
            resolve(&first, &Hazards::Opponent { wall: &no_wall, other: moving }),
            None
        );
        let growing = Candidate {
            will_eat: true,
            ..moving
        };
        assert_eq!(
            resolve(&first, &Hazards::Opponent { wall: &no_wall, other: growing }),
            Some(Collision {
                kind: CollisionKind::Cross,
                player: 0
            })
        );
    }
}
