//! Repository factory trait
//!
//! Repositories are built from a shared resource handle (the pooled client),
//! never from ambient globals.

/// A trait for database repository factories
///
/// Generic over the repository type `R` and the handle `C` it is built from.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance
    fn create_repository(&self, config: C) -> R;
}
