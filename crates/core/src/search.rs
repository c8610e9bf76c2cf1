//! Product name search.
//!
//! A small relevance heuristic for the landing page's search dropdown:
//! exact, prefix and substring matches first, then a greedy subsequence
//! match that tolerates typos ("butterscoth" still finds "Butterscotch Cake").
//!
//! Ties keep catalog order because `sort_by` is stable, but callers should not
//! rely on any ordering beyond descending score.

use crate::catalog::Catalog;
use crate::types::Product;

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: f64 = 100.0;
/// Score for a case-insensitive prefix match.
pub const PREFIX_SCORE: f64 = 80.0;
/// Score for a case-insensitive substring match.
pub const SUBSTRING_SCORE: f64 = 60.0;
/// Upper bound of the fuzzy subsequence score.
pub const FUZZY_WEIGHT: f64 = 40.0;
/// Fuzzy scores at or below this are treated as no match.
pub const FUZZY_THRESHOLD: f64 = 20.0;
/// Maximum number of results returned.
pub const MAX_RESULTS: usize = 5;

/// Popular products suggested when a query matches nothing.
pub const FALLBACK_IDS: [&str; 4] = ["blackforest", "vanilla", "choco-truffle", "pineapple"];

/// Relevance of `candidate` for `query`. Zero means no match.
#[must_use]
pub fn relevance(query: &str, candidate: &str) -> f64 {
    let q = query.to_lowercase();
    let t = candidate.to_lowercase();

    if t == q {
        return EXACT_SCORE;
    }
    if t.starts_with(&q) {
        return PREFIX_SCORE;
    }
    if t.contains(&q) {
        return SUBSTRING_SCORE;
    }

    let query_chars: Vec<char> = q.chars().collect();
    if query_chars.is_empty() {
        return 0.0;
    }

    let mut pending = query_chars.iter().peekable();
    let mut matched = 0_usize;
    for c in t.chars() {
        match pending.peek() {
            Some(&&next) if next == c => {
                matched += 1;
                pending.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    #[allow(clippy::cast_precision_loss)] // Names are far shorter than 2^52 chars
    let score = matched as f64 / query_chars.len() as f64 * FUZZY_WEIGHT;
    if score > FUZZY_THRESHOLD { score } else { 0.0 }
}

/// A scored search hit.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub product: &'a Product,
    pub score: f64,
}

/// Result of a catalog search.
#[derive(Debug, Clone, Default)]
pub struct SearchResults<'a> {
    /// Matching products, best first; or the popular fallback list.
    pub products: Vec<&'a Product>,
    /// True when `products` is the fallback list rather than real matches.
    pub is_fallback: bool,
}

impl SearchResults<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Score every product name and return the top matches, best first.
///
/// Does not apply the fallback; see [`search`].
#[must_use]
pub fn rank<'a>(catalog: &'a Catalog, query: &str) -> Vec<SearchHit<'a>> {
    let mut hits: Vec<SearchHit<'a>> = catalog
        .products()
        .iter()
        .map(|product| SearchHit {
            product,
            score: relevance(query, &product.name),
        })
        .filter(|hit| hit.score > 0.0)
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(MAX_RESULTS);
    hits
}

/// Search the catalog by product name.
///
/// A blank query returns nothing. A query that matches nothing returns the
/// [`FALLBACK_IDS`] products (those still in the catalog) in that fixed
/// order, flagged with `is_fallback`.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> SearchResults<'a> {
    if query.trim().is_empty() {
        return SearchResults::default();
    }

    let hits = rank(catalog, query);
    if !hits.is_empty() {
        return SearchResults {
            products: hits.into_iter().map(|hit| hit.product).collect(),
            is_fallback: false,
        };
    }

    let products: Vec<&Product> = FALLBACK_IDS
        .iter()
        .filter_map(|id| catalog.find(id))
        .collect();
    let is_fallback = !products.is_empty();

    SearchResults {
        products,
        is_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn assert_score(query: &str, candidate: &str, expected: f64) {
        let score = relevance(query, candidate);
        assert!(
            (score - expected).abs() < 1e-9,
            "relevance({query:?}, {candidate:?}) = {score}, expected {expected}"
        );
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert_score("vanilla cake", "Vanilla Cake", EXACT_SCORE);
    }

    #[test]
    fn test_prefix_and_substring() {
        assert_score("vani", "Vanilla Cake", PREFIX_SCORE);
        assert_score("cake", "Vanilla Cake", SUBSTRING_SCORE);
    }

    #[test]
    fn test_fuzzy_subsequence() {
        // "butterscoth" is a subsequence of "butterscotch cake": all 11 chars match.
        assert_score("butterscoth", "Butterscotch Cake", FUZZY_WEIGHT);
        // "button": b-u-t-t match, 'o' matches the one in "scotch", 'n' never does.
        assert_score("button", "Butterscotch Cake", 5.0 / 6.0 * FUZZY_WEIGHT);
    }

    #[test]
    fn test_fuzzy_threshold_cuts_weak_matches() {
        // Exactly half of the query matches: 20.0, which is not above the threshold.
        assert_score("abxy", "ab", 0.0);
        assert_score("axbx", "ab", 0.0);
        assert_score("zzzz", "Vanilla Cake", 0.0);
    }

    #[test]
    fn test_full_name_query_ranks_first_with_exact_score() {
        let catalog = defaults::catalog();
        for product in catalog.products() {
            let hits = rank(&catalog, &product.name.to_uppercase());
            let first = hits.first().expect("at least one hit");
            assert!((first.score - EXACT_SCORE).abs() < f64::EPSILON);
            assert_eq!(first.product.name.to_lowercase(), product.name.to_lowercase());
        }
    }

    #[test]
    fn test_prefix_scores_at_least_non_prefix() {
        let name = "Chocolate Truffle";
        for end in 1..=name.len() {
            let prefix = name.get(..end).expect("ascii name");
            let score = relevance(prefix, name);
            assert!(score >= PREFIX_SCORE, "prefix {prefix:?} scored {score}");
            assert!(score >= relevance("truffle", name));
        }
    }

    #[test]
    fn test_empty_query_has_no_results() {
        let catalog = defaults::catalog();
        let results = search(&catalog, "");
        assert!(results.is_empty());
        assert!(!results.is_fallback);

        let results = search(&catalog, "   ");
        assert!(results.is_empty());
    }

    #[test]
    fn test_no_match_returns_fallback_in_fixed_order() {
        let catalog = defaults::catalog();
        let results = search(&catalog, "qqqqqq");
        let ids: Vec<_> = results.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, FALLBACK_IDS.to_vec());
        assert!(results.is_fallback);
    }

    #[test]
    fn test_results_are_capped_and_sorted() {
        let catalog = defaults::catalog();
        let hits = rank(&catalog, "cake");
        assert!(hits.len() <= MAX_RESULTS);
        assert!(hits.windows(2).all(|w| match w {
            [a, b] => a.score >= b.score,
            _ => true,
        }));
        assert!(!search(&catalog, "cake").is_fallback);
    }
}
