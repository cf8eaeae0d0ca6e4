use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Review {
    pub id: i32,
    pub college_name: String,
    pub identities_list: String,
    pub race: String,
    pub disability_identity: String,
    pub gender: String,
    pub sexual_orientation: String,
    pub optin: String,
    pub lgbtq_id: String,
    pub lgbtq_safety: Option<i32>,
    pub exclusionary: String,
    pub friendly: String,
    pub accommodations_difficulty: Option<i32>,
    pub reliability_rating: Option<i32>,
    pub timeliness: String,
    pub accommodation_rating: Option<i32>,
    pub mobility: String,
    pub outside_rating: Option<i32>,
    pub inside_accessibility: Option<i32>,
    pub liberal_rating: Option<i32>,
    pub diversity_rating: Option<i32>,
    pub tolerance_rating: Option<i32>,
    pub supportive_rating: Option<i32>,
    pub clubs_rating: Option<i32>,
    pub overall_access_rating: Option<i32>,
    pub overall_identity_rating: Option<i32>,
    pub general_review: String,
    pub identity_review: String,
}

/// Survey submission. Missing text answers are stored as empty strings and
/// missing ratings as NULL. Submissions without a college name are refused
/// before they reach the store.
#[derive(Clone, Debug, Default, PartialEq, Insertable, Deserialize)]
#[diesel(table_name = crate::schema::reviews)]
#[serde(default)]
pub struct NewReview {
    pub college_name: String,
    pub identities_list: String,
    pub race: String,
    pub disability_identity: String,
    pub gender: String,
    pub sexual_orientation: String,
    pub optin: String,
    pub lgbtq_id: String,
    pub lgbtq_safety: Option<i32>,
    pub exclusionary: String,
    pub friendly: String,
    pub accommodations_difficulty: Option<i32>,
    pub reliability_rating: Option<i32>,
    pub timeliness: String,
    pub accommodation_rating: Option<i32>,
    pub mobility: String,
    pub outside_rating: Option<i32>,
    pub inside_accessibility: Option<i32>,
    pub liberal_rating: Option<i32>,
    pub diversity_rating: Option<i32>,
    pub tolerance_rating: Option<i32>,
    pub supportive_rating: Option<i32>,
    pub clubs_rating: Option<i32>,
    pub overall_access_rating: Option<i32>,
    pub overall_identity_rating: Option<i32>,
    pub general_review: String,
    pub identity_review: String,
}
