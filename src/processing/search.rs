use crate::matching::SearchService;
use crate::processing::ProcessingResult;
use crate::repository::CollegeReader;

/// Answers a search-as-you-type query against the stored catalog.
///
/// The catalog comes back from the store already sorted by name, and the
/// matches keep that order.
pub fn process_search_message<R>(
    query: &str,
    repo: &R,
    service: &SearchService,
) -> ProcessingResult<Vec<String>>
where
    R: CollegeReader,
{
    let catalog = repo.list_college_names()?;

    let matches = service
        .search(query, &catalog)?
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    log::info!(
        "Search {query:?} matched {} of {} colleges",
        matches.len(),
        catalog.len()
    );

    Ok(matches)
}
