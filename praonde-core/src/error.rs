use thiserror::Error;

use crate::event::EventId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed contains no events")]
    Empty,

    #[error("duplicate event id in seed: {0}")]
    DuplicateId(EventId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter: {0} (expected one of Todos, Festas, Bares, Shows, Cultural)")]
pub struct ParseFilterError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown buzz level: {0} (expected fraco, medio or bombando)")]
pub struct ParseBuzzError(pub String);
