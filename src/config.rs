//! Run configuration for the rescue solver.

/// Default number of sense/decide/move cycles per run.
pub const DEFAULT_MAX_STEPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on sense/decide/move cycles.
    pub max_steps: usize,
    /// End the run early once the robot stands on the person's cell.
    pub stop_on_arrival: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            stop_on_arrival: true,
        }
    }
}

impl SolverConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_stop_on_arrival(mut self, stop_on_arrival: bool) -> Self {
        self.stop_on_arrival = stop_on_arrival;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_steps, 5);
        assert!(config.stop_on_arrival);
    }

    #[test]
    fn test_builders() {
        let config = SolverConfig::default().with_max_steps(12).with_stop_on_arrival(false);
        assert_eq!(config, SolverConfig { max_steps: 12, stop_on_arrival: false });
    }
}
