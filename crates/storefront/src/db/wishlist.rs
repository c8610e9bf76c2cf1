//! Wishlist repository.

use cakes_n_bells_core::{Wishlist, defaults};

use super::{KeyValueStore, RepositoryError, load_or_default, save};

/// Key for the wishlisted product IDs.
pub const WISHLIST_KEY: &str = "wishlist";

/// Repository for the wishlist document.
pub struct WishlistRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> WishlistRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the wishlist, or an empty one.
    #[must_use]
    pub fn load(&self) -> Wishlist {
        load_or_default(self.store, WISHLIST_KEY, defaults::wishlist)
    }

    /// Write the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be written.
    pub fn save(&self, wishlist: &Wishlist) -> Result<(), RepositoryError> {
        save(self.store, WISHLIST_KEY, wishlist)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cakes_n_bells_core::ProductId;

    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_wishlist_is_stored_as_id_array() {
        let store = MemoryStore::new();
        let repo = WishlistRepository::new(&store);

        let mut wishlist = repo.load();
        assert!(wishlist.is_empty());
        wishlist.toggle(&ProductId::new("vanilla"));
        wishlist.toggle(&ProductId::new("donuts"));
        repo.save(&wishlist).unwrap();

        assert_eq!(
            store.get(WISHLIST_KEY).unwrap().as_deref(),
            Some(r#"["vanilla","donuts"]"#)
        );
        assert_eq!(repo.load(), wishlist);
    }
}
