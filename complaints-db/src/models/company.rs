use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

/// Upper bound of `installed_capacity`, also enforced by a CHECK constraint.
pub const MAX_INSTALLED_CAPACITY: f64 = 50_000.0;

#[derive(
    Queryable,
    Selectable,
    Identifiable,
    Insertable,
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Company {
    pub user_id: i32,
    pub tax_id: i64,
    pub installed_capacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInput {
    pub tax_id: i64,
    pub installed_capacity: f64,
}
