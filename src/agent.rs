use log::debug;

use crate::environment::{
    Pos,
    Direction,
    Env,
};
use crate::error::MoveError;

/// Sensing and actuation interface of a rescue robot.
pub trait Robot {
    fn get_grid_dimensions(&self) -> (usize, usize);
    fn get_person_position(&self) -> Pos;
    fn get_exit_position(&self) -> Pos;
    /// Number of fires among the robot's four cardinal neighbors.
    fn sense_fires_around(&mut self) -> usize;
    fn r#move(&mut self, direction: Direction) -> Result<(), MoveError>;
}

/// Simulated robot walking through an `Env`.
pub struct Agent<'a> {
    env: &'a Env,
    pub pos: Pos,
    pub moves: usize,
}

impl<'a> Agent<'a> {
    pub fn new(env: &'a Env) -> Self
    {
        Self {
            env,
            pos: env.exit(),
            moves: 0,
        }
    }

    pub fn has_rescued(&self) -> bool {
        self.pos == self.env.person()
    }
}

impl<'a> Robot for Agent<'a> {
    fn get_grid_dimensions(&self) -> (usize, usize) {
        let (width, height) = self.env.size();
        (width as usize, height as usize)
    }

    fn get_person_position(&self) -> Pos {
        self.env.person()
    }

    fn get_exit_position(&self) -> Pos {
        self.env.exit()
    }

    fn sense_fires_around(&mut self) -> usize {
        self.env.fires_around(self.pos)
    }

    fn r#move(&mut self, direction: Direction) -> Result<(), MoveError>
    {
        let new_pos = self.env.check_movement(self.pos, direction)
            .ok_or(MoveError::OutOfBounds { from: self.pos, direction })?;
        if self.env.is_fire(new_pos) {
            return Err(MoveError::IntoFire { pos: new_pos });
        }
        debug!("{:?} => {:?}", direction, new_pos);
        self.pos = new_pos;
        self.moves += 1;
        Ok(())
    }
}
