use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the `colleges` table. The name doubles as the key.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::colleges)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct College {
    pub name: String,
    pub location: Option<String>,
    pub accommodations: Option<String>,
    pub resources: Option<String>,
}
