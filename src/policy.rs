/// Response policy for a batch-level condition
///
/// One instance governs format-check failures, another governs output-file
/// collisions; both are supplied once per run and applied uniformly to every
/// file in the batch. `Unset` marks an unrecognized argument string and is
/// rejected before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCheckAction {
    Unset,
    Stop,
    Warn,
    Skip,
}

/// What the caller should do once a policy-governed condition has fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Proceed with the current file
    Continue,
    /// Drop the current file and move to the next
    SkipFile,
    /// Abort the whole batch
    Abort,
}

impl FileCheckAction {
    /// Parse a policy argument string
    ///
    /// Anything other than the exact lowercase keywords maps to `Unset`.
    pub fn parse(value: &str) -> Self {
        match value {
            "stop" => Self::Stop,
            "warn" => Self::Warn,
            "skip" => Self::Skip,
            _ => Self::Unset,
        }
    }

    /// Route a fired condition through this policy
    ///
    /// Shared by the format-check response and the collision response; the
    /// caller supplies its own contextual messages around the decision.
    pub fn decide(&self) -> PolicyDecision {
        match self {
            Self::Warn => PolicyDecision::Continue,
            Self::Skip => PolicyDecision::SkipFile,
            Self::Stop | Self::Unset => PolicyDecision::Abort,
        }
    }
}
