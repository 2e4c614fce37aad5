use chrono::NaiveDate;
use diesel::sqlite::SqliteConnection;

use super::db::{run_pending_migrations, set_foreign_keys};
use crate::models::{
    CompanyInput, Complaint, NewComplaint, NewRecall, PersonInput, Reason, RegisteredUser,
    UserKind, UserRegistration,
};
use crate::orm::complaint::insert_complaint;
use crate::orm::reason::insert_reason;
use crate::orm::recall::insert_recall;
use crate::orm::user::register_user;

/// Creates a synchronous in-memory SQLite database connection for unit tests.
///
/// This function returns a `diesel::SqliteConnection` connected to an in-memory SQLite database,
/// runs all embedded Diesel migrations, and enables foreign key support. This is ideal for
/// direct Diesel queries in synchronous test code.
///
/// Each call to this function returns a new, independent in-memory database.
pub fn setup_test_db() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:")
        .expect("Failed to create in-memory SQLite database");
    set_foreign_keys(&mut conn).expect("Failed to enable foreign keys");
    run_pending_migrations(&mut conn).expect("Failed to run pending migrations");
    conn
}

/// Builds a fixture date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Inserts reasons 1 (power outage) and 2 (voltage fluctuation).
pub fn seed_reasons(conn: &mut SqliteConnection) -> Vec<Reason> {
    vec![
        insert_reason(conn, 1, "Corte de suministro".to_string()).expect("Failed to insert reason"),
        insert_reason(conn, 2, "Variación de tensión".to_string())
            .expect("Failed to insert reason"),
    ]
}

/// Registers a person who is not an employee.
pub fn create_test_person(conn: &mut SqliteConnection, document: i32) -> RegisteredUser {
    let registration = UserRegistration {
        address: format!("Calle {}", document % 1000),
        phone: "011-4444-5555".to_string(),
        kind: UserKind::Person(PersonInput {
            document,
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            salary: None,
        }),
    };
    register_user(conn, registration).expect("Failed to register test person")
}

/// Registers a company with 1200 of installed capacity.
pub fn create_test_company(conn: &mut SqliteConnection, tax_id: i64) -> RegisteredUser {
    let registration = UserRegistration {
        address: "Parque Industrial 7".to_string(),
        phone: "0341-555-0000".to_string(),
        kind: UserKind::Company(CompanyInput {
            tax_id,
            installed_capacity: 1200.0,
        }),
    };
    register_user(conn, registration).expect("Failed to register test company")
}

/// Inserts a complaint for `user_id` followed by `recalls` recall rows.
pub fn create_test_complaint(
    conn: &mut SqliteConnection,
    user_id: i32,
    reason_code: i32,
    complaint_date: NaiveDate,
    resolution_date: Option<NaiveDate>,
    recalls: usize,
) -> Complaint {
    let new_complaint = NewComplaint {
        complaint_date,
        resolution_date,
        user_id,
        reason_code,
    };
    let complaint = insert_complaint(conn, new_complaint).expect("Failed to insert complaint");

    for _ in 0..recalls {
        let recall = NewRecall {
            complaint_number: complaint.number,
            call_date: complaint_date,
        };
        insert_recall(conn, recall).expect("Failed to insert recall");
    }

    complaint
}
