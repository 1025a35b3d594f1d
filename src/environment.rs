use std::collections::HashSet;
use std::fmt;
use rand::{
    distributions::{Distribution, Standard},
    seq::SliceRandom,
    Rng,
};

use crate::error::EnvError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self
    {
        Pos { x, y }
    }

    pub fn step(self, direction: Direction) -> Pos
    {
        let (dx, dy) = direction.into_vector();
        Pos { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }
}

// Action
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Unit vector as (dx, dy); y grows downwards.
    pub fn into_vector(self) -> (i32, i32)
    {
        match self {
            Direction::Right => ( 1, 0),
            Direction::Left  => (-1, 0),
            Direction::Down  => ( 0, 1),
            Direction::Up    => ( 0,-1),
        }
    }

    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left  => Direction::Right,
            Direction::Down  => Direction::Up,
            Direction::Up    => Direction::Down,
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        match rng.gen_range(0, 4) {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }
}

/// Ground truth of a burning building: where the fires, the person and the exit are.
pub struct Env {
    width: i32,
    height: i32,
    person: Pos,
    exit: Pos,
    fires: HashSet<Pos>,
}

impl Env {
    pub fn new(width: i32, height: i32, person: Pos, exit: Pos, fires: &[Pos]) -> Result<Self, EnvError>
    {
        if width <= 0 || height <= 0 {
            return Err(EnvError::InvalidDimensions { width, height });
        }
        let mut env = Self {
            width,
            height,
            person,
            exit,
            fires: HashSet::new(),
        };
        for pos in [person, exit].iter().chain(fires.iter()) {
            if !env.contains(*pos) {
                return Err(EnvError::OutOfBounds { x: pos.x, y: pos.y });
            }
        }
        for fire in fires {
            if *fire == person || *fire == exit {
                return Err(EnvError::FireOnProtectedCell { x: fire.x, y: fire.y });
            }
            env.fires.insert(*fire);
        }
        Ok(env)
    }

    /// Exit in the top-left corner, person in the bottom-right one, fires anywhere else.
    pub fn random<R: Rng + ?Sized>(width: i32, height: i32, fire_count: usize, rng: &mut R) -> Result<Self, EnvError>
    {
        if width <= 0 || height <= 0 {
            return Err(EnvError::InvalidDimensions { width, height });
        }
        let exit = Pos::new(0, 0);
        let person = Pos::new(width - 1, height - 1);

        let mut free: Vec<Pos> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Pos::new(x, y)))
            .filter(|pos| *pos != exit && *pos != person)
            .collect();
        if fire_count > free.len() {
            return Err(EnvError::TooManyFires { requested: fire_count, available: free.len() });
        }
        free.shuffle(rng);
        free.truncate(fire_count);

        Env::new(width, height, person, exit, &free)
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn person(&self) -> Pos { self.person }

    pub fn exit(&self) -> Pos { self.exit }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_fire(&self, pos: Pos) -> bool {
        self.fires.contains(&pos)
    }

    pub fn fire_count(&self) -> usize {
        self.fires.len()
    }

    pub fn fires_around(&self, pos: Pos) -> usize {
        Direction::all().iter()
            .map(|d| pos.step(*d))
            .filter(|p| self.is_fire(*p))
            .count()
    }

    /// Destination of a move, `None` when it would leave the grid.
    pub fn check_movement(&self, pos: Pos, direction: Direction) -> Option<Pos>
    {
        let new_pos = pos.step(direction);
        if self.contains(new_pos) {
            Some(new_pos)
        } else {
            None
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos::new(x, y);
                let symbol = if pos == self.person {
                    'P'
                } else if pos == self.exit {
                    'E'
                } else if self.is_fire(pos) {
                    'F'
                } else {
                    '.'
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Pos::new(2, 2).step(Direction::Right), Pos::new(3, 2));
        assert_eq!(Pos::new(2, 2).step(Direction::Left), Pos::new(1, 2));
        assert_eq!(Pos::new(2, 2).step(Direction::Down), Pos::new(2, 3));
        assert_eq!(Pos::new(2, 2).step(Direction::Up), Pos::new(2, 1));
        for d in Direction::all().iter() {
            assert_eq!(Pos::new(0, 0).step(*d).step(d.opposite()), Pos::new(0, 0));
        }
    }

    #[test]
    fn test_step_saturates_at_integer_limits() {
        assert_eq!(Pos::new(i32::MAX, 0).step(Direction::Right), Pos::new(i32::MAX, 0));
        assert_eq!(Pos::new(0, i32::MIN).step(Direction::Up), Pos::new(0, i32::MIN));
        assert_eq!(Pos::new(i32::MIN, 0).step(Direction::Right), Pos::new(i32::MIN + 1, 0));
    }

    #[test]
    fn test_direction_sampling_covers_all_four() {
        let mut rng = StdRng::seed_from_u64(5);
        let seen: HashSet<Direction> = (0..200).map(|_| rng.gen::<Direction>()).collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_new_rejects_bad_worlds() {
        let origin = Pos::new(0, 0);
        assert_eq!(
            Env::new(0, 3, origin, origin, &[]).err(),
            Some(EnvError::InvalidDimensions { width: 0, height: 3 })
        );
        assert_eq!(
            Env::new(3, 3, Pos::new(3, 0), origin, &[]).err(),
            Some(EnvError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(
            Env::new(3, 3, Pos::new(2, 2), origin, &[Pos::new(2, 2)]).err(),
            Some(EnvError::FireOnProtectedCell { x: 2, y: 2 })
        );
    }

    #[test]
    fn test_fires_around_counts_cardinal_only() {
        let fires = [Pos::new(1, 0), Pos::new(0, 1), Pos::new(2, 2)];
        let env = Env::new(3, 3, Pos::new(2, 0), Pos::new(0, 0), &fires).unwrap();
        assert_eq!(env.fires_around(Pos::new(0, 0)), 2);
        assert_eq!(env.fires_around(Pos::new(1, 1)), 2);
        assert_eq!(env.fires_around(Pos::new(2, 0)), 1);
    }

    #[test]
    fn test_check_movement_stops_at_walls() {
        let env = Env::new(2, 2, Pos::new(1, 1), Pos::new(0, 0), &[]).unwrap();
        assert_eq!(env.check_movement(Pos::new(0, 0), Direction::Up), None);
        assert_eq!(env.check_movement(Pos::new(0, 0), Direction::Left), None);
        assert_eq!(env.check_movement(Pos::new(0, 0), Direction::Right), Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_random_world_is_seeded_and_keeps_corners_clear() {
        let a = Env::random(6, 4, 7, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = Env::random(6, 4, 7, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.fire_count(), 7);
        assert_eq!(a.fires, b.fires);
        assert!(!a.is_fire(a.exit()));
        assert!(!a.is_fire(a.person()));
        assert_eq!(a.person(), Pos::new(5, 3));
    }

    #[test]
    fn test_random_world_rejects_overfull_grid() {
        let err = Env::random(2, 2, 3, &mut StdRng::seed_from_u64(1)).err();
        assert_eq!(err, Some(EnvError::TooManyFires { requested: 3, available: 2 }));
    }
}
