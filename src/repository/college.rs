use diesel::prelude::*;

use crate::models::college::College;
use crate::repository::{CollegeReader, CollegeWriter, DieselRepository, RepositoryResult};

impl CollegeReader for DieselRepository {
    fn list_colleges(&self) -> RepositoryResult<Vec<College>> {
        use crate::schema::colleges;

        let mut conn = self.conn()?;

        let result = colleges::table
            .order(colleges::name.asc())
            .select(College::as_select())
            .load(&mut conn)?;

        Ok(result)
    }

    fn get_college(&self, name: &str) -> RepositoryResult<Option<College>> {
        use crate::schema::colleges;

        let mut conn = self.conn()?;

        let result = colleges::table
            .filter(colleges::name.eq(name))
            .select(College::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(result)
    }

    fn list_college_names(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::colleges;

        let mut conn = self.conn()?;

        let names = colleges::table
            .order(colleges::name.asc())
            .select(colleges::name)
            .load::<String>(&mut conn)?;

        Ok(names)
    }
}

impl CollegeWriter for DieselRepository {
    fn create_colleges(&self, colleges: &[College]) -> RepositoryResult<usize> {
        use crate::schema::colleges;

        if colleges.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        // Names are unique; re-seeding an existing college is a no-op
        let inserted = conn.transaction(|conn| {
            let mut inserted_rows = 0;
            for college in colleges {
                inserted_rows += diesel::insert_or_ignore_into(colleges::table)
                    .values(college)
                    .execute(conn)?;
            }
            Ok::<usize, diesel::result::Error>(inserted_rows)
        })?;

        Ok(inserted)
    }
}
