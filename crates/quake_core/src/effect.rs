use crate::CycleId;

/// Work the state machine hands to the background engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CheckConnectivity { cycle: CycleId },
    FetchFeed { cycle: CycleId, url: String },
    ParseFeed { cycle: CycleId, body: String },
}

impl Effect {
    pub fn cycle(&self) -> CycleId {
        match self {
            Effect::CheckConnectivity { cycle }
            | Effect::FetchFeed { cycle, .. }
            | Effect::ParseFeed { cycle, .. } => *cycle,
        }
    }
}
