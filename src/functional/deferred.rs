use crate::functional::{named, task::Task};

/// Two inputs and a sum computed only when explicitly asked for.
///
/// `result` reads `0` until the compute step has stored the sum; nothing
/// enforces the ordering.
#[derive(Debug)]
pub struct DeferredSum {
    x1: i64,
    x2: i64,
    result: i64,
}

impl DeferredSum {
    pub fn new(x1: i64, x2: i64) -> Self {
        Self { x1, x2, result: 0 }
    }

    pub fn result(&self) -> i64 {
        self.result
    }
}

impl Task for DeferredSum {
    fn run(&mut self) {
        self.result = named::sum(self.x1, self.x2);
    }
}
