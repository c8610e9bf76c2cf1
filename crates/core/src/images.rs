//! Product image link helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Stored in place of an empty image list when a product is saved.
pub const STORED_PLACEHOLDER: &str = "https://placehold.co/600x600?text=No+Image";
/// Shown on product cards for products without images.
pub const CARD_PLACEHOLDER: &str = "https://placehold.co/600x600/fce7f3/db2777?text=No+Image";
/// Shown on the product page for products without images.
pub const DETAIL_PLACEHOLDER: &str = "https://placehold.co/600x800/fce7f3/db2777?text=No+Image";

static DRIVE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([^/]+)").expect("valid drive path regex"));
static DRIVE_QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"id=([^&]+)").expect("valid drive query regex"));

/// Google Drive file ID in a share link, if any.
fn drive_file_id(url: &str) -> Option<&str> {
    DRIVE_PATH_RE
        .captures(url)
        .or_else(|| DRIVE_QUERY_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrite Google Drive share links to a direct thumbnail URL.
///
/// Anything that doesn't look like a Drive link is returned unchanged.
#[must_use]
pub fn normalize_image_link(url: &str) -> String {
    drive_file_id(url).map_or_else(
        || url.to_owned(),
        |id| format!("https://drive.google.com/thumbnail?id={id}&sz=w1000"),
    )
}

/// Normalise submitted image links for storage.
///
/// Blank entries are dropped; an empty result becomes [`STORED_PLACEHOLDER`].
#[must_use]
pub fn prepare_for_save(images: &[String]) -> Vec<String> {
    let prepared: Vec<String> = images
        .iter()
        .filter(|url| !url.trim().is_empty())
        .map(|url| normalize_image_link(url))
        .collect();

    if prepared.is_empty() {
        vec![STORED_PLACEHOLDER.to_owned()]
    } else {
        prepared
    }
}

/// First image of a product, or `placeholder`.
#[must_use]
pub fn primary_image<'a>(images: &'a [String], placeholder: &'a str) -> &'a str {
    images.first().map_or(placeholder, String::as_str)
}
