use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

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
#[diesel(table_name = crate::schema::persons)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Person {
    pub user_id: i32,
    pub document: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Person fields as entered, before a user id exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonInput {
    pub document: i32,
    pub first_name: String,
    pub last_name: String,
    /// `Some` when the person is also an employee.
    pub salary: Option<f64>,
}
