//! Step controller: sense, infer, choose a direction, move.
//!
//! The controller owns the belief map and the robot handle for one run. A
//! run ends after `max_steps` cycles, when the robot stands on the person
//! (if `stop_on_arrival`), or with an error when no safe move exists or the
//! robot refuses a move. Nothing is retried.

use log::{debug, info, warn};

use crate::agent::Robot;
use crate::belief::{BeliefMap, Cell};
use crate::config::SolverConfig;
use crate::environment::{Direction, Pos};
use crate::error::{Result, SolveError};
use crate::inference::{infer, Rule};
use crate::policy::{select_direction, DirectionPolicy, GreedyPolicy};

/// What happened during one sense/decide/move cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: usize,
    pub from: Pos,
    pub sensed: usize,
    pub rule: Rule,
    pub direction: Direction,
    pub to: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub steps: usize,
    pub reached_target: bool,
    pub final_pos: Pos,
}

pub struct Solver<R: Robot, P: DirectionPolicy> {
    robot: R,
    policy: P,
    map: BeliefMap,
    config: SolverConfig,
    records: Vec<StepRecord>,
}

impl<R: Robot> Solver<R, GreedyPolicy> {
    pub fn new(robot: R, config: SolverConfig) -> Self {
        Solver::with_policy(robot, GreedyPolicy, config)
    }
}

impl<R: Robot, P: DirectionPolicy> Solver<R, P> {
    pub fn with_policy(robot: R, policy: P, config: SolverConfig) -> Self {
        let (width, height) = robot.get_grid_dimensions();
        let target = robot.get_person_position();
        let start = robot.get_exit_position();
        Self {
            robot,
            policy,
            map: BeliefMap::new(width, height, target, start),
            config,
            records: Vec::new(),
        }
    }

    pub fn map(&self) -> &BeliefMap {
        &self.map
    }

    pub fn robot(&self) -> &R {
        &self.robot
    }

    /// Cycles completed so far, including those before an aborted step.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn solve(&mut self) -> Result<Outcome> {
        info!(
            "Starting rescue: {}x{} grid, exit {:?}, person {:?}, up to {} steps",
            self.map.width(), self.map.height(),
            self.map.starting_pos(), self.map.target_pos(),
            self.config.max_steps
        );
        debug!("Initial belief map:\n{}", self.map);

        for step in 0..self.config.max_steps {
            if self.config.stop_on_arrival && self.at_target() {
                info!("Reached person at {:?} after {} steps", self.map.current_pos(), step);
                break;
            }
            if let Err(e) = self.solve_next_step(step) {
                warn!("Rescue aborted at step {}: {}", step, e);
                return Err(e);
            }
        }

        let outcome = Outcome {
            steps: self.records.len(),
            reached_target: self.at_target(),
            final_pos: self.map.current_pos(),
        };
        info!(
            "Rescue finished at {:?} after {} steps ({} confirmed fires, {} suspected)",
            outcome.final_pos, outcome.steps,
            self.map.count(Cell::ConfirmedHazard),
            self.map.count(Cell::SuspectedHazard)
        );
        Ok(outcome)
    }

    fn at_target(&self) -> bool {
        self.map.current_pos() == self.map.target_pos()
    }

    fn solve_next_step(&mut self, step: usize) -> Result<()> {
        let from = self.map.current_pos();
        let sensed = self.robot.sense_fires_around();
        let rule = infer(&mut self.map, sensed);

        let ordering = self.policy.order(from, self.map.target_pos());
        let direction = select_direction(&self.map, &ordering)
            .ok_or(SolveError::NoValidDirection { pos: from })?;
        debug!(
            "Step {}: at {:?} sensed {} ({}), ordering {:?}, chose {:?}",
            step, from, sensed, rule, ordering, direction
        );

        self.robot.r#move(direction)?;
        let to = from.step(direction);
        self.map.set_current_pos(to);
        self.records.push(StepRecord { step, from, sensed, rule, direction, to });

        debug!("Belief map after step {}:\n{}", step, self.map);
        Ok(())
    }
}

/// Runs the default greedy rescue on `robot`.
pub fn solve<R: Robot>(robot: R) -> Result<Outcome> {
    Solver::new(robot, SolverConfig::default()).solve()
}
