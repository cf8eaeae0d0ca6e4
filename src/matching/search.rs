use crate::matching::MatchResult;
use crate::matching::similarity::SimilarityMatcher;

/// Filters a catalog of names down to the entries similar to a query.
///
/// The catalog is trusted to be sorted and deduplicated by its owner.
/// Results keep catalog order and are not ranked.
#[derive(Clone, Debug, Default)]
pub struct SearchService {
    matcher: SimilarityMatcher,
}

impl SearchService {
    pub fn new(matcher: SimilarityMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &SimilarityMatcher {
        &self.matcher
    }

    /// Returns the catalog entries similar to `query`, in catalog order.
    ///
    /// A query whose lowercase form is oversized is refused outright. An
    /// entry whose comparison fails is skipped and the scan carries on.
    pub fn search<'a, S>(&self, query: &str, catalog: &'a [S]) -> MatchResult<Vec<&'a str>>
    where
        S: AsRef<str>,
    {
        // Lowercasing can grow a string, so measure what the matcher compares
        self.matcher.check_len(&query.to_lowercase())?;

        let mut matches = Vec::new();
        for entry in catalog {
            let name = entry.as_ref();
            match self.matcher.are_similar(Some(query), Some(name)) {
                Ok(true) => matches.push(name),
                Ok(false) => {}
                Err(e) => log::warn!("Skipping catalog entry {name:?}: {e}"),
            }
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchService;
    use crate::matching::{MatchError, SimilarityMatcher};

    const CATALOG: [&str; 5] = [
        "Brown University",
        "Princeton University",
        "Stanford University",
        "University of Washington",
        "Yale University",
    ];

    #[test]
    fn search_returns_containment_matches() {
        let service = SearchService::default();
        let result = service
            .search("stan", &["Stanford University", "Yale University"])
            .expect("search should succeed");
        assert_eq!(result, vec!["Stanford University"]);
    }

    #[test]
    fn search_over_empty_catalog_is_empty() {
        let service = SearchService::default();
        let catalog: [&str; 0] = [];
        let result = service.search("yale", &catalog).expect("search should succeed");
        assert!(result.is_empty());
    }

    #[test]
    fn search_keeps_catalog_order() {
        let service = SearchService::default();
        let result = service
            .search("university", &CATALOG)
            .expect("search should succeed");
        assert_eq!(result, CATALOG.to_vec());
    }

    #[test]
    fn search_includes_fuzzy_matches_in_place() {
        let service = SearchService::default();
        let catalog = ["Brown", "Princeton", "Yale"];
        let result = service
            .search("princton", &catalog)
            .expect("search should succeed");
        assert_eq!(result, vec!["Princeton"]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let service = SearchService::default();
        let result = service.search("", &CATALOG).expect("search should succeed");
        assert!(result.is_empty());
    }

    #[test]
    fn oversized_query_is_rejected() {
        let matcher = SimilarityMatcher::new(0.4, 4).expect("valid matcher");
        let service = SearchService::new(matcher);
        assert_eq!(
            service.search("stanford", &CATALOG),
            Err(MatchError::InputTooLong { len: 8, max: 4 })
        );
    }

    #[test]
    fn query_that_grows_when_lowercased_is_rejected() {
        let matcher = SimilarityMatcher::new(0.4, 8).expect("valid matcher");
        let service = SearchService::new(matcher);
        // "İ" lowercases to "i" plus a combining dot
        assert_eq!(
            service.search("İİİİİ", &["Yale", "Brown"]),
            Err(MatchError::InputTooLong { len: 10, max: 8 })
        );
    }

    #[test]
    fn matcher_settings_are_exposed() {
        let matcher = SimilarityMatcher::new(0.6, 32).expect("valid matcher");
        let service = SearchService::new(matcher);
        assert_eq!(service.matcher().threshold(), 0.6);
        assert_eq!(service.matcher().max_len(), 32);
    }

    #[test]
    fn oversized_entries_are_skipped_without_aborting() {
        let matcher = SimilarityMatcher::new(0.4, 6).expect("valid matcher");
        let service = SearchService::new(matcher);
        let catalog = ["Bryn Mawr College", "Yale", "Yael"];
        let result = service.search("yale", &catalog).expect("search should succeed");
        assert_eq!(result, vec!["Yale", "Yael"]);
    }

    #[test]
    fn search_accepts_owned_catalog() {
        let service = SearchService::default();
        let catalog = vec!["Reed College".to_string(), "Rice University".to_string()];
        let result = service.search("reed", &catalog).expect("search should succeed");
        assert_eq!(result, vec!["Reed College"]);
    }
}
