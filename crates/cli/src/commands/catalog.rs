//! Catalog inspection commands.

use std::path::Path;

use cakes_n_bells_storefront::db::{CatalogRepository, FileStore, RepositoryError};

/// Print every product and collection as the storefront would load them.
///
/// Missing documents fall back to the defaults, exactly as at startup.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened.
#[allow(clippy::print_stdout)]
pub fn list(data_dir: &Path) -> Result<(), RepositoryError> {
    let store = FileStore::open(data_dir)?;
    let catalog = CatalogRepository::new(&store).load();

    println!("Collections:");
    for section in catalog.sections() {
        println!("  {section} ({} products)", catalog.in_section(section).count());
    }

    println!("Products:");
    for product in catalog.products() {
        println!(
            "  {:<16} {:<32} {:<14} from \u{20b9}{:<6} {}",
            product.id.as_str(),
            product.name,
            product.category.as_str(),
            product.prices.base_price().to_string(),
            product.payment_tier.as_str(),
        );
    }

    Ok(())
}
