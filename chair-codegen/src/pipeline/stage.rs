use std::fmt;

/// A unit of work within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Fetching the schema snapshot
    Load,
    /// Resolving types and identifiers, rendering the source
    Resolve,
    /// Writing the output file
    Write,
}

impl Stage {
    /// Human-readable stage name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "loading",
            Self::Resolve => "resolving",
            Self::Write => "writing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a pipeline is in its run.
///
/// A run moves `Idle -> Loading -> Resolving -> Writing -> Done`, or stops in
/// `Failed` at the first error. A preview stops in `Previewed` after
/// resolving and never writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Loading,
    Resolving,
    Writing,
    Previewed,
    Done,
    Failed(Stage),
}

impl State {
    /// The state a run is in while executing `stage`.
    pub fn running(stage: Stage) -> Self {
        match stage {
            Stage::Load => Self::Loading,
            Stage::Resolve => Self::Resolving,
            Stage::Write => Self::Writing,
        }
    }
}
