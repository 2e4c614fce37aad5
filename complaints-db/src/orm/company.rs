use diesel::prelude::*;

use crate::models::Company;

/// Try to find a company by its user id.
/// Returns Ok(Some(Company)) if found, Ok(None) if not, Err on DB error.
pub fn get_company(
    conn: &mut SqliteConnection,
    target_user_id: i32,
) -> Result<Option<Company>, diesel::result::Error> {
    use crate::schema::companies::dsl::*;
    companies
        .filter(user_id.eq(target_user_id))
        .first::<Company>(conn)
        .optional()
}

/// Try to find a company by tax id.
pub fn get_company_by_tax_id(
    conn: &mut SqliteConnection,
    target_tax_id: i64,
) -> Result<Option<Company>, diesel::result::Error> {
    use crate::schema::companies::dsl::*;
    companies
        .filter(tax_id.eq(target_tax_id))
        .first::<Company>(conn)
        .optional()
}

/// Returns all companies in ascending order by user id.
pub fn get_all_companies(
    conn: &mut SqliteConnection,
) -> Result<Vec<Company>, diesel::result::Error> {
    use crate::schema::companies::dsl::*;
    companies.order(user_id.asc()).load::<Company>(conn)
}
