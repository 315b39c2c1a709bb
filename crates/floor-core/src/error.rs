use crate::catalog::ProjectId;

/// Problems found while validating externally supplied content.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate project id {0}")]
    DuplicateId(ProjectId),
    #[error("{projects} projects but {positions} card positions")]
    PositionCountMismatch { projects: usize, positions: usize },
    #[error("card positions {first} and {second} share the same placement")]
    DuplicatePlacement { first: usize, second: usize },
    #[error("card layout has no vertical spread")]
    FlatLayout,
}
