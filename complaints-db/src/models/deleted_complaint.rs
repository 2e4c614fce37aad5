use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Audit row written by the `log_deleted_complaint` trigger.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::deleted_complaints)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DeletedComplaint {
    pub id: i32,
    pub complaint_number: i32,
    pub user_id: i32,
    pub complaint_date: NaiveDate,
    pub deleted_at: NaiveDateTime,
}
