use std::fmt;

/// The ordered record of every reduction made while executing one postfix
/// sequence.
///
/// Each step reads like `"3 * 5 = 15"` for a binary reduction or
/// `"-(4) = -4"` for a negation.
///
/// Every step is logged as it is recorded: at `debug` level for an echoing
/// trace, at `trace` level otherwise. Two traces are equal when their steps
/// are.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    steps: Vec<String>,
    echo:  bool,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new(),
               echo:  false, }
    }

    /// Creates an empty trace that logs each step at `debug` level as soon as
    /// it is recorded.
    #[must_use]
    pub const fn echoing() -> Self {
        Self { steps: Vec::new(),
               echo:  true, }
    }

    /// All steps, oldest first.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// The number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if nothing has been reduced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The most recent step, prefixed with its index: `"[1] 1 + 15 = 16"`.
    #[must_use]
    pub fn last_frame(&self) -> Option<String> {
        self.steps.last().map(|step| format!("[{}] {step}", self.steps.len() - 1))
    }

    pub(in crate::interpreter) fn push(&mut self, step: String) {
        if self.echo {
            log::debug!("[{}] {step}", self.steps.len());
        } else {
            log::trace!("[{}] {step}", self.steps.len());
        }
        self.steps.push(step);
    }

    pub(in crate::interpreter) fn clear(&mut self) {
        self.steps.clear();
    }
}

impl PartialEq for Trace {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl Eq for Trace {}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "[{index}] {step}")?;
        }
        Ok(())
    }
}
