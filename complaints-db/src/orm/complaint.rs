use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use tracing::{debug, info};

use crate::models::{Complaint, ComplaintSummary, NewComplaint};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = BigInt)]
    last_insert_rowid: i64,
}

/// Per-complaint report for one user. Reasons are inner-joined, so a
/// complaint whose reason code has no match is left out; recalls are
/// left-joined so complaints without recalls still appear with a count of 0.
const USER_COMPLAINTS_QUERY: &str = "\
    SELECT c.number AS number, \
           c.complaint_date AS complaint_date, \
           c.resolution_date AS resolution_date, \
           m.description AS reason, \
           COUNT(rc.number) AS recall_count \
    FROM complaints c \
    INNER JOIN reasons m ON c.reason_code = m.code \
    LEFT JOIN recalls rc ON c.number = rc.complaint_number \
    WHERE c.user_id = ? \
    GROUP BY c.number, c.complaint_date, c.resolution_date, m.description \
    ORDER BY c.complaint_date DESC, c.number DESC";

/// Inserts a complaint and returns it with its generated number.
pub fn insert_complaint(
    conn: &mut SqliteConnection,
    new_complaint: NewComplaint,
) -> Result<Complaint, diesel::result::Error> {
    use crate::schema::complaints::dsl::*;

    diesel::insert_into(complaints)
        .values(&new_complaint)
        .execute(conn)?;

    let last_id = diesel::sql_query("SELECT last_insert_rowid() as last_insert_rowid")
        .get_result::<LastInsertRowId>(conn)?
        .last_insert_rowid;

    complaints
        .filter(number.eq(last_id as i32))
        .first::<Complaint>(conn)
}

/// Gets a single complaint by number.
pub fn get_complaint(
    conn: &mut SqliteConnection,
    complaint_number: i32,
) -> Result<Option<Complaint>, diesel::result::Error> {
    use crate::schema::complaints::dsl::*;
    complaints
        .filter(number.eq(complaint_number))
        .first::<Complaint>(conn)
        .optional()
}

/// Marks a complaint as resolved on `resolved_on`.
/// Returns the number of rows updated (0 when the complaint does not exist).
pub fn resolve_complaint(
    conn: &mut SqliteConnection,
    complaint_number: i32,
    resolved_on: NaiveDate,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::complaints::dsl::*;
    diesel::update(complaints.filter(number.eq(complaint_number)))
        .set(resolution_date.eq(Some(resolved_on)))
        .execute(conn)
}

/// Deletes a complaint by number with a single statement.
///
/// Recalls and material links go with it through `ON DELETE CASCADE`, and
/// the `log_deleted_complaint` trigger records the deletion. Neither is done
/// here.
///
/// # Returns
/// * `Ok(0)` - No complaint with that number
/// * `Ok(n)` - Rows deleted
/// * `Err(diesel::result::Error)` - Database error
pub fn delete_complaint(
    conn: &mut SqliteConnection,
    complaint_number: i32,
) -> Result<usize, diesel::result::Error> {
    use crate::schema::complaints::dsl::*;
    let target = complaints.filter(number.eq(complaint_number));
    let rows_affected = diesel::delete(target).execute(conn)?;
    info!(complaint_number, rows_affected, "complaint deleted");
    Ok(rows_affected)
}

/// Lists every complaint filed by `target_user_id`, most recent first,
/// with its reason description and number of recalls.
pub fn list_user_complaints(
    conn: &mut SqliteConnection,
    target_user_id: i32,
) -> Result<Vec<ComplaintSummary>, diesel::result::Error> {
    let rows = diesel::sql_query(USER_COMPLAINTS_QUERY)
        .bind::<Integer, _>(target_user_id)
        .load::<ComplaintSummary>(conn)?;
    debug!(
        user_id = target_user_id,
        rows = rows.len(),
        "listed user complaints"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplaintStatus;
    use crate::orm::recall::count_recalls;
    use crate::orm::testing::{
        create_test_complaint, create_test_person, date, seed_reasons, setup_test_db,
    };

    #[test]
    fn test_insert_and_resolve_complaint() {
        let mut conn = setup_test_db();
        seed_reasons(&mut conn);
        let user = create_test_person(&mut conn, 11222333).user;

        let filed_on = date(2024, 3, 1);
        let complaint = create_test_complaint(&mut conn, user.id, 1, filed_on, None, 0);
        assert!(complaint.number > 0);
        assert!(complaint.resolution_date.is_none());

        let resolved_on = date(2024, 3, 5);
        let updated = resolve_complaint(&mut conn, complaint.number, resolved_on).unwrap();
        assert_eq!(updated, 1);
        let reloaded = get_complaint(&mut conn, complaint.number)
            .unwrap()
            .expect("complaint");
        assert_eq!(reloaded.resolution_date, Some(resolved_on));

        let missing = resolve_complaint(&mut conn, 9999, resolved_on).unwrap();
        assert_eq!(missing, 0);
    }

    #[test]
    fn test_complaint_requires_known_reason() {
        let mut conn = setup_test_db();
        let user = create_test_person(&mut conn, 11222334).user;

        let result = insert_complaint(
            &mut conn,
            NewComplaint {
                complaint_date: date(2024, 1, 1),
                resolution_date: None,
                user_id: user.id,
                reason_code: 42,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_missing_complaint_returns_zero() {
        let mut conn = setup_test_db();
        assert_eq!(delete_complaint(&mut conn, 12345).unwrap(), 0);
    }

    #[test]
    fn test_delete_cascades_recalls() {
        let mut conn = setup_test_db();
        seed_reasons(&mut conn);
        let user = create_test_person(&mut conn, 11222335).user;
        let filed_on = date(2024, 2, 2);
        let number = create_test_complaint(&mut conn, user.id, 2, filed_on, None, 3).number;
        assert_eq!(count_recalls(&mut conn, number).unwrap(), 3);

        assert_eq!(delete_complaint(&mut conn, number).unwrap(), 1);
        assert!(get_complaint(&mut conn, number).unwrap().is_none());
        assert_eq!(count_recalls(&mut conn, number).unwrap(), 0);
    }

    #[test]
    fn test_list_user_complaints_counts_and_order() {
        let mut conn = setup_test_db();
        seed_reasons(&mut conn);
        let user = create_test_person(&mut conn, 11222336).user;
        let other = create_test_person(&mut conn, 11222337).user;

        let resolved = Some(date(2024, 5, 22));
        let oldest = create_test_complaint(&mut conn, user.id, 1, date(2023, 12, 1), None, 2);
        let newest = create_test_complaint(&mut conn, user.id, 2, date(2024, 5, 20), resolved, 0);
        let middle = create_test_complaint(&mut conn, user.id, 1, date(2024, 1, 15), None, 0);
        create_test_complaint(&mut conn, other.id, 1, date(2024, 6, 1), None, 1);

        let rows = list_user_complaints(&mut conn, user.id).unwrap();
        let numbers: Vec<i32> = rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![newest.number, middle.number, oldest.number]);

        assert_eq!(rows[0].recall_count, 0);
        assert_eq!(rows[0].status(), ComplaintStatus::Resolved);
        assert_eq!(rows[0].reason, "Variación de tensión");
        assert_eq!(rows[1].recall_count, 0);
        assert_eq!(rows[1].status(), ComplaintStatus::Pending);
        assert_eq!(rows[2].recall_count, 2);
    }

    #[test]
    fn test_list_user_complaints_empty() {
        let mut conn = setup_test_db();
        let user = create_test_person(&mut conn, 11222338).user;
        let rows = list_user_complaints(&mut conn, user.id).unwrap();
        assert!(rows.is_empty());
    }
}
