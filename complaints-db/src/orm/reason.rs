use diesel::prelude::*;

use crate::models::Reason;

pub fn insert_reason(
    conn: &mut SqliteConnection,
    reason_code: i32,
    reason_description: String,
) -> Result<Reason, diesel::result::Error> {
    use crate::schema::reasons::dsl::*;

    let reason = Reason {
        code: reason_code,
        description: reason_description,
    };
    diesel::insert_into(reasons).values(&reason).execute(conn)?;
    Ok(reason)
}

/// Try to find a reason by code.
/// Returns Ok(Some(Reason)) if found, Ok(None) if not, Err on DB error.
pub fn get_reason(
    conn: &mut SqliteConnection,
    reason_code: i32,
) -> Result<Option<Reason>, diesel::result::Error> {
    use crate::schema::reasons::dsl::*;
    reasons
        .filter(code.eq(reason_code))
        .first::<Reason>(conn)
        .optional()
}

/// Returns all reasons ordered by code.
pub fn get_all_reasons(conn: &mut SqliteConnection) -> Result<Vec<Reason>, diesel::result::Error> {
    use crate::schema::reasons::dsl::*;
    reasons.order(code.asc()).load::<Reason>(conn)
}
