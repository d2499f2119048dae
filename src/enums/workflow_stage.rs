use std::fmt;

/// Stage of the submit → poll → fetch workflow that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Submission,
    Polling,
    Fetch,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Polling => "polling",
            Self::Fetch => "fetch",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
