use thiserror::Error;

use zonebook_core::DomainError;
use zonebook_infra::ContentStoreError;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backing store failed; propagated unchanged and never retried.
    #[error(transparent)]
    Store(#[from] ContentStoreError),

    #[error("registry lock poisoned")]
    LockPoisoned,
}

impl CatalogError {
    /// True for the "query did not resolve to exactly one entity" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Domain(DomainError::NotFound))
    }
}
