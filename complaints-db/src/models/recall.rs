use chrono::NaiveDate;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::recalls)]
#[diesel(primary_key(number))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recall {
    pub number: i32,
    pub complaint_number: i32,
    pub call_date: NaiveDate,
}

#[derive(Insertable, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::recalls)]
pub struct NewRecall {
    pub complaint_number: i32,
    pub call_date: NaiveDate,
}
