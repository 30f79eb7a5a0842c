use super::*;

#[derive(Debug, Clone)]
pub struct HasOne {
    /// Associated model
    pub target: ModelId,
}

