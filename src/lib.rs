//! Rescue robot navigating a grid with unknown fires.
//!
//! The robot senses how many fires surround it, folds each reading into a
//! belief map, and heads for the person while refusing to step into fire it
//! knows about.

pub mod agent;
pub mod belief;
pub mod config;
pub mod environment;
pub mod error;
pub mod inference;
pub mod policy;
pub mod render;
pub mod solver;
pub mod trace;

pub use agent::{Agent, Robot};
pub use belief::{BeliefMap, Cell};
pub use config::SolverConfig;
pub use environment::{Direction, Env, Pos};
pub use error::{EnvError, MoveError, SolveError};
pub use inference::{infer, Rule};
pub use policy::{select_direction, DirectionPolicy, GreedyPolicy, RandomPolicy};
pub use solver::{solve, Outcome, Solver, StepRecord};
