use super::probe::Probe;

/// Result of one knock. Failures carry no detail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Sent(Probe),
    Failed,
}

impl Outcome {
    pub fn sent(&self) -> Option<&Probe> {
        match self {
            Self::Sent(probe) => Some(probe),
            Self::Failed      => None,
        }
    }
}
