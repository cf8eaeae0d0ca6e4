//! Aggregates computed over a college's reviews.

use serde::Serialize;

use crate::models::review::Review;

/// Mean of the present values, `None` when there are none.
fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<i32>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0i64, 0u32), |(sum, count), value| (sum + i64::from(value), count + 1));
    (count > 0).then(|| sum as f64 / f64::from(count))
}

/// Share of "Yes" answers as a percentage, `None` without reviews.
fn yes_percentage<'a, I>(answers: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    let (yes, total) = answers
        .into_iter()
        .fold((0u32, 0u32), |(yes, total), answer| {
            (yes + u32::from(answer == "Yes"), total + 1)
        });
    (total > 0).then(|| f64::from(yes) * 100.0 / f64::from(total))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RatingAverages {
    pub lgbtq_avg: Option<f64>,
    pub difficulty_avg: Option<f64>,
    pub reliability_avg: Option<f64>,
    pub rating_avg: Option<f64>,
    pub outside_avg: Option<f64>,
    pub inside_avg: Option<f64>,
    pub liberal_avg: Option<f64>,
    pub diversity_avg: Option<f64>,
    pub tolerance_avg: Option<f64>,
    pub supportive_avg: Option<f64>,
    pub clubs_avg: Option<f64>,
    pub overall_access_avg: Option<f64>,
    pub overall_identity_avg: Option<f64>,
}

impl RatingAverages {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let avg = |column: fn(&Review) -> Option<i32>| mean(reviews.iter().map(column));
        Self {
            lgbtq_avg: avg(|r| r.lgbtq_safety),
            difficulty_avg: avg(|r| r.accommodations_difficulty),
            reliability_avg: avg(|r| r.reliability_rating),
            rating_avg: avg(|r| r.accommodation_rating),
            outside_avg: avg(|r| r.outside_rating),
            inside_avg: avg(|r| r.inside_accessibility),
            liberal_avg: avg(|r| r.liberal_rating),
            diversity_avg: avg(|r| r.diversity_rating),
            tolerance_avg: avg(|r| r.tolerance_rating),
            supportive_avg: avg(|r| r.supportive_rating),
            clubs_avg: avg(|r| r.clubs_rating),
            overall_access_avg: avg(|r| r.overall_access_rating),
            overall_identity_avg: avg(|r| r.overall_identity_rating),
        }
    }
}

/// Percentage of reviewers answering "Yes" to each yes/no question.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct YesNoStats {
    pub exclusionary_score: Option<f64>,
    pub friendly_score: Option<f64>,
    pub lgbtq_score: Option<f64>,
    pub mobility_score: Option<f64>,
}

impl YesNoStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let score = |column: fn(&Review) -> &str| yes_percentage(reviews.iter().map(column));
        Self {
            exclusionary_score: score(|r| r.exclusionary.as_str()),
            friendly_score: score(|r| r.friendly.as_str()),
            lgbtq_score: score(|r| r.lgbtq_id.as_str()),
            mobility_score: score(|r| r.mobility.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RatingAverages, YesNoStats, mean, yes_percentage};
    use crate::models::review::Review;

    fn review(id: i32, safety: Option<i32>, friendly: &str) -> Review {
        Review {
            id,
            college_name: "Reed College".to_string(),
            identities_list: String::new(),
            race: String::new(),
            disability_identity: String::new(),
            gender: String::new(),
            sexual_orientation: String::new(),
            optin: String::new(),
            lgbtq_id: "Yes".to_string(),
            lgbtq_safety: safety,
            exclusionary: "No".to_string(),
            friendly: friendly.to_string(),
            accommodations_difficulty: None,
            reliability_rating: Some(4),
            timeliness: String::new(),
            accommodation_rating: None,
            mobility: String::new(),
            outside_rating: None,
            inside_accessibility: None,
            liberal_rating: None,
            diversity_rating: None,
            tolerance_rating: None,
            supportive_rating: None,
            clubs_rating: None,
            overall_access_rating: Some(id),
            overall_identity_rating: None,
            general_review: String::new(),
            identity_review: String::new(),
        }
    }

    #[test]
    fn mean_ignores_missing_values() {
        assert_eq!(mean([Some(2), None, Some(4)]), Some(3.0));
        assert_eq!(mean([None, None]), None);
        assert_eq!(mean(std::iter::empty::<Option<i32>>()), None);
    }

    #[test]
    fn yes_percentage_counts_every_answer() {
        assert_eq!(yes_percentage(["Yes", "No", "", "Yes"]), Some(50.0));
        assert_eq!(yes_percentage(["yes"]), Some(0.0));
        assert_eq!(yes_percentage(std::iter::empty::<&str>()), None);
    }

    #[test]
    fn averages_cover_each_column() {
        let reviews = vec![review(1, Some(5), "Yes"), review(2, None, "No")];
        let averages = RatingAverages::from_reviews(&reviews);
        assert_eq!(averages.lgbtq_avg, Some(5.0));
        assert_eq!(averages.reliability_avg, Some(4.0));
        assert_eq!(averages.overall_access_avg, Some(1.5));
        assert_eq!(averages.clubs_avg, None);
    }

    #[test]
    fn aggregates_are_empty_without_reviews() {
        assert_eq!(RatingAverages::from_reviews(&[]), RatingAverages::default());
        assert_eq!(YesNoStats::from_reviews(&[]), YesNoStats::default());
    }

    #[test]
    fn stats_report_yes_share() {
        let reviews = vec![
            review(1, None, "Yes"),
            review(2, None, "No"),
            review(3, None, "Yes"),
            review(4, None, "Yes"),
        ];
        let stats = YesNoStats::from_reviews(&reviews);
        assert_eq!(stats.friendly_score, Some(75.0));
        assert_eq!(stats.lgbtq_score, Some(100.0));
        assert_eq!(stats.exclusionary_score, Some(0.0));
        assert_eq!(stats.mobility_score, Some(0.0));
    }
}
