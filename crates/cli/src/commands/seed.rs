//! Seed the storefront data directory.
//!
//! Writes the default catalog, the default collections and an empty wishlist
//! as the documents the storefront loads at startup.

use std::path::{Path, PathBuf};

use cakes_n_bells_core::{Wishlist, defaults};
use cakes_n_bells_storefront::db::catalog::PRODUCTS_KEY;
use cakes_n_bells_storefront::db::{
    CatalogRepository, FileStore, KeyValueStore, RepositoryError, WishlistRepository,
};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The data directory could not be opened or written.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Shop data exists and `--force` was not given.
    #[error("Shop data already exists in {0} (use --force to overwrite)")]
    AlreadySeeded(PathBuf),
}

/// Seed the data directory.
///
/// # Errors
///
/// Returns an error if the directory already holds a product list (unless
/// `force` is set) or if any document cannot be written.
pub fn run(data_dir: &Path, force: bool) -> Result<(), SeedError> {
    let store = FileStore::open(data_dir)?;

    if !force && store.get(PRODUCTS_KEY)?.is_some() {
        return Err(SeedError::AlreadySeeded(data_dir.to_path_buf()));
    }

    let catalog = defaults::catalog();
    CatalogRepository::new(&store).save(&catalog)?;
    WishlistRepository::new(&store).save(&Wishlist::default())?;

    info!(
        data_dir = %data_dir.display(),
        products = catalog.products().len(),
        sections = catalog.sections().len(),
        "Shop data seeded"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), false).unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        let catalog = CatalogRepository::new(&store).load();
        assert_eq!(catalog.products().len(), defaults::products().len());
        assert!(WishlistRepository::new(&store).load().is_empty());
    }

    #[test]
    fn test_seed_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), false).unwrap();

        assert!(matches!(
            run(dir.path(), false),
            Err(SeedError::AlreadySeeded(_))
        ));
        assert!(run(dir.path(), true).is_ok());
    }
}
