use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::belief::{BeliefMap, Cell};
use crate::environment::{Direction, Pos};

/// Ranks the four directions from most to least preferred.
pub trait DirectionPolicy
{
    fn order(&mut self, current: Pos, target: Pos) -> [Direction; 4];
}

// Heads along the axis with the larger distance to the target (vertical on
// ties), then sidesteps on the other axis, and backs off last.
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn ideal_order(current: Pos, target: Pos) -> [Direction; 4]
    {
        let delta_x = target.x - current.x;
        let delta_y = target.y - current.y;
        let toward_x = if delta_x > 0 { Direction::Right } else { Direction::Left };
        let toward_y = if delta_y > 0 { Direction::Down } else { Direction::Up };

        let (primary, secondary) = if delta_x.abs() > delta_y.abs() {
            (toward_x, toward_y)
        } else {
            (toward_y, toward_x)
        };
        [primary, secondary, secondary.opposite(), primary.opposite()]
    }
}

impl DirectionPolicy for GreedyPolicy
{
    fn order(&mut self, current: Pos, target: Pos) -> [Direction; 4] {
        GreedyPolicy::ideal_order(current, target)
    }
}

// Baseline: a fresh random ranking every step, built by drawing directions
// until each of the four has come up once.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DirectionPolicy for RandomPolicy
{
    fn order(&mut self, _current: Pos, _target: Pos) -> [Direction; 4] {
        let mut directions = Vec::with_capacity(4);
        while directions.len() < 4 {
            let d: Direction = self.rng.gen();
            if !directions.contains(&d) {
                directions.push(d);
            }
        }
        [directions[0], directions[1], directions[2], directions[3]]
    }
}

/// First direction in `ordering` that stays on the grid and avoids known fire.
pub fn select_direction(map: &BeliefMap, ordering: &[Direction]) -> Option<Direction>
{
    let pos = map.current_pos();
    ordering.iter()
        .cloned()
        .find(|d| {
            let next = pos.step(*d);
            match map.get(next.x, next.y) {
                None | Some(Cell::ConfirmedHazard) => false,
                Some(_) => true,
            }
        })
}
