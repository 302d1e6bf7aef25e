use crate::domain::ports::DeleteFaultPolicy;
use rand::Rng;

/// Default runtime policy: fails a share of delete attempts by design,
/// simulating transient backend failure (rate 0.5 matches the remote
/// service's own coin flip).
#[derive(Debug, Clone, Copy)]
pub struct RandomFaultPolicy {
    rate: f64,
}

impl RandomFaultPolicy {
    pub const DEFAULT_RATE: f64 = 0.5;

    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomFaultPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

impl DeleteFaultPolicy for RandomFaultPolicy {
    fn inject_failure(&mut self) -> bool {
        rand::thread_rng().gen_bool(self.rate)
    }
}

/// Deterministic policy for tests and environments where the injected
/// failure path is unwanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaultInjection;

impl DeleteFaultPolicy for NoFaultInjection {
    fn inject_failure(&mut self) -> bool {
        false
    }
}
