//! Shared helpers for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use complaints_db::models::{
    Complaint, NewComplaint, NewRecall, PersonInput, User, UserKind, UserRegistration,
};
use complaints_db::orm::complaint::insert_complaint;
use complaints_db::orm::reason::insert_reason;
use complaints_db::orm::recall::insert_recall;
use complaints_db::orm::user::register_user;
use complaints_db::{establish_connection, run_pending_migrations};
use diesel::sqlite::SqliteConnection;

/// Helper function to set up an in-memory SQLite database for testing
pub fn setup_test_db() -> SqliteConnection {
    let mut conn = establish_connection(":memory:").expect("Failed to create in-memory db");
    run_pending_migrations(&mut conn).expect("Failed to run migrations");
    insert_reason(&mut conn, 1, "Corte de suministro".to_string()).expect("reason 1");
    insert_reason(&mut conn, 2, "Poste caído".to_string()).expect("reason 2");
    conn
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn person(document: i32, salary: Option<f64>) -> UserRegistration {
    UserRegistration {
        address: "Belgrano 1500".to_string(),
        phone: "0261-420-1111".to_string(),
        kind: UserKind::Person(PersonInput {
            document,
            first_name: "María".to_string(),
            last_name: "López".to_string(),
            salary,
        }),
    }
}

/// Registers a non-employee person and returns the base user row.
pub fn register_person(conn: &mut SqliteConnection, document: i32) -> User {
    register_user(conn, person(document, None))
        .expect("Failed to register person")
        .user
}

pub fn complaint_with_recalls(
    conn: &mut SqliteConnection,
    user_id: i32,
    complaint_date: NaiveDate,
    resolution_date: Option<NaiveDate>,
    recalls: usize,
) -> Complaint {
    let new_complaint = NewComplaint {
        complaint_date,
        resolution_date,
        user_id,
        reason_code: 1,
    };
    let complaint = insert_complaint(conn, new_complaint).expect("Failed to insert complaint");
    for day in 0..recalls {
        let recall = NewRecall {
            complaint_number: complaint.number,
            call_date: complaint_date + chrono::Days::new(day as u64 + 1),
        };
        insert_recall(conn, recall).expect("Failed to insert recall");
    }
    complaint
}
