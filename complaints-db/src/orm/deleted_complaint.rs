use diesel::prelude::*;

use crate::models::DeletedComplaint;

/// Returns the deletion log, oldest entry first.
pub fn list_deleted_complaints(
    conn: &mut SqliteConnection,
) -> Result<Vec<DeletedComplaint>, diesel::result::Error> {
    use crate::schema::deleted_complaints::dsl::*;
    deleted_complaints
        .order(id.asc())
        .select(DeletedComplaint::as_select())
        .load(conn)
}

/// Gets the log entries for one complaint number.
///
/// Numbers are not reused by SQLite `AUTOINCREMENT`, so at most one entry is
/// expected.
pub fn get_deleted_complaints_by_number(
    conn: &mut SqliteConnection,
    target_number: i32,
) -> Result<Vec<DeletedComplaint>, diesel::result::Error> {
    use crate::schema::deleted_complaints::dsl::*;
    deleted_complaints
        .filter(complaint_number.eq(target_number))
        .order(id.asc())
        .select(DeletedComplaint::as_select())
        .load(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orm::complaint::delete_complaint;
    use crate::orm::testing::{
        create_test_complaint, create_test_person, date, seed_reasons, setup_test_db,
    };

    #[test]
    fn test_trigger_logs_deleted_complaint() {
        let mut conn = setup_test_db();
        seed_reasons(&mut conn);
        let user = create_test_person(&mut conn, 66777888).user;
        let complaint = create_test_complaint(&mut conn, user.id, 1, date(2024, 8, 8), None, 1);
        assert!(list_deleted_complaints(&mut conn).unwrap().is_empty());

        delete_complaint(&mut conn, complaint.number).unwrap();

        let log = get_deleted_complaints_by_number(&mut conn, complaint.number).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].user_id, user.id);
        assert_eq!(log[0].complaint_date, date(2024, 8, 8));
    }

    #[test]
    fn test_missing_delete_writes_no_log() {
        let mut conn = setup_test_db();
        delete_complaint(&mut conn, 77).unwrap();
        assert!(list_deleted_complaints(&mut conn).unwrap().is_empty());
    }
}
