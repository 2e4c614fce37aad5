use chrono::NaiveDate;
use diesel::sql_types::{BigInt, Date, Integer, Nullable, Text};
use diesel::{Identifiable, Insertable, Queryable, QueryableByName, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::complaints)]
#[diesel(primary_key(number))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Complaint {
    pub number: i32,
    pub complaint_date: NaiveDate,
    pub resolution_date: Option<NaiveDate>,
    pub user_id: i32,
    pub reason_code: i32,
}

#[derive(Insertable, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::complaints)]
pub struct NewComplaint {
    pub complaint_date: NaiveDate,
    pub resolution_date: Option<NaiveDate>,
    pub user_id: i32,
    pub reason_code: i32,
}

/// One row of the per-user complaint report.
#[derive(QueryableByName, Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintSummary {
    #[diesel(sql_type = Integer)]
    pub number: i32,
    #[diesel(sql_type = Date)]
    pub complaint_date: NaiveDate,
    #[diesel(sql_type = Nullable<Date>)]
    pub resolution_date: Option<NaiveDate>,
    #[diesel(sql_type = Text)]
    pub reason: String,
    #[diesel(sql_type = BigInt)]
    pub recall_count: i64,
}

impl ComplaintSummary {
    pub fn status(&self) -> ComplaintStatus {
        match self.resolution_date {
            Some(_) => ComplaintStatus::Resolved,
            None => ComplaintStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplaintStatus {
    Resolved,
    Pending,
}

impl ComplaintStatus {
    /// Label printed in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Resolved => "RESUELTO",
            ComplaintStatus::Pending => "PENDIENTE",
        }
    }
}
