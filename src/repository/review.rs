use diesel::prelude::*;

use crate::models::review::{NewReview, Review};
use crate::repository::{DieselRepository, RepositoryResult, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn list_reviews(&self, college_name: &str) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let result = reviews::table
            .filter(reviews::college_name.eq(college_name))
            .order(reviews::id.asc())
            .select(Review::as_select())
            .load(&mut conn)?;

        Ok(result)
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, review: &NewReview) -> RepositoryResult<usize> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let inserted = diesel::insert_into(reviews::table)
            .values(review)
            .execute(&mut conn)?;

        Ok(inserted)
    }
}
