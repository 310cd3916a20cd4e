use crate::domain::failure::AssertionFailure;

/// Receives the outcome of every assertion.
///
/// Implementations decide what a failure means: abort the current test,
/// or record it and keep going.
pub trait Reporter {
    fn report(&mut self, outcome: Result<(), AssertionFailure>);
}

/// Panics on failure so the Rust test harness records the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[track_caller]
    fn report(&mut self, outcome: Result<(), AssertionFailure>) {
        if let Err(failure) = outcome {
            panic!("{failure}");
        }
    }
}

/// Records failures in the order they were reported.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    failures: Vec<AssertionFailure>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_failures(self) -> Vec<AssertionFailure> {
        self.failures
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, outcome: Result<(), AssertionFailure>) {
        if let Err(failure) = outcome {
            self.failures.push(failure);
        }
    }
}
