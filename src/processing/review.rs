use crate::domain::ratings::{RatingAverages, YesNoStats};
use crate::models::review::{NewReview, Review};
use crate::processing::{ProcessingError, ProcessingResult};
use crate::repository::{ReviewReader, ReviewWriter};

/// Returns every review for a college, or `None` when it has none.
pub fn process_list_reviews<R>(
    college_name: &str,
    repo: &R,
) -> ProcessingResult<Option<Vec<Review>>>
where
    R: ReviewReader,
{
    let reviews = repo.list_reviews(college_name)?;
    log::info!("Listed {} reviews for {college_name}", reviews.len());
    Ok((!reviews.is_empty()).then_some(reviews))
}

pub fn process_rating_averages<R>(
    college_name: &str,
    repo: &R,
) -> ProcessingResult<RatingAverages>
where
    R: ReviewReader,
{
    let reviews = repo.list_reviews(college_name)?;
    log::info!(
        "Averaged ratings over {} reviews for {college_name}",
        reviews.len()
    );
    Ok(RatingAverages::from_reviews(&reviews))
}

pub fn process_stats<R>(college_name: &str, repo: &R) -> ProcessingResult<YesNoStats>
where
    R: ReviewReader,
{
    let reviews = repo.list_reviews(college_name)?;
    log::info!(
        "Computed yes/no stats over {} reviews for {college_name}",
        reviews.len()
    );
    Ok(YesNoStats::from_reviews(&reviews))
}

/// Stores a survey response.
pub fn process_submit_review<R>(review: &NewReview, repo: &R) -> ProcessingResult<usize>
where
    R: ReviewWriter,
{
    if review.college_name.trim().is_empty() {
        return Err(ProcessingError::InvalidInput(
            "college_name is required".to_string(),
        ));
    }

    let inserted = repo.create_review(review)?;
    log::info!("Stored review for {}", review.college_name);
    Ok(inserted)
}
