use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use crate::models::{NewRecall, Recall};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = BigInt)]
    last_insert_rowid: i64,
}

/// Records a follow-up call on a complaint.
pub fn insert_recall(
    conn: &mut SqliteConnection,
    new_recall: NewRecall,
) -> Result<Recall, diesel::result::Error> {
    use crate::schema::recalls::dsl::*;

    diesel::insert_into(recalls)
        .values(&new_recall)
        .execute(conn)?;

    let last_id = diesel::sql_query("SELECT last_insert_rowid() as last_insert_rowid")
        .get_result::<LastInsertRowId>(conn)?
        .last_insert_rowid;

    recalls
        .filter(number.eq(last_id as i32))
        .first::<Recall>(conn)
}

pub fn count_recalls(
    conn: &mut SqliteConnection,
    target_complaint: i32,
) -> Result<i64, diesel::result::Error> {
    use crate::schema::recalls::dsl::*;
    recalls
        .filter(complaint_number.eq(target_complaint))
        .count()
        .get_result(conn)
}
