use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::{info, warn};

use crate::models::{
    Company, Employee, NewUser, Person, RegisteredUser, User, UserKind, UserRegistration,
};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = BigInt)]
    last_insert_rowid: i64,
}

/// Inserts a bare user row and returns it with its generated id.
///
/// This does not open a transaction; callers that also write a subtype row
/// should go through [`register_user`].
pub fn insert_user(
    conn: &mut SqliteConnection,
    new_user: NewUser,
) -> Result<User, diesel::result::Error> {
    use crate::schema::users::dsl::*;

    diesel::insert_into(users).values(&new_user).execute(conn)?;

    let last_id = diesel::sql_query("SELECT last_insert_rowid() as last_insert_rowid")
        .get_result::<LastInsertRowId>(conn)?
        .last_insert_rowid;

    users.filter(id.eq(last_id as i32)).first::<User>(conn)
}

/// Registers a user together with its specialization in one transaction.
///
/// The base `users` row is written first and its generated id is reused for
/// the `persons` or `companies` row, and for the `employees` row when the
/// person has a salary. Nothing is committed unless every insert succeeds;
/// any error rolls the whole registration back.
///
/// # Returns
/// * `Ok(RegisteredUser)` - The committed rows
/// * `Err(diesel::result::Error)` - The first failing statement's error
pub fn register_user(
    conn: &mut SqliteConnection,
    registration: UserRegistration,
) -> Result<RegisteredUser, diesel::result::Error> {
    use crate::schema::{companies, employees, persons};

    let result = conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let new_user = NewUser {
            address: registration.address,
            phone: registration.phone,
        };
        let user = insert_user(conn, new_user)?;

        match registration.kind {
            UserKind::Person(input) => {
                let person = Person {
                    user_id: user.id,
                    document: input.document,
                    first_name: input.first_name,
                    last_name: input.last_name,
                };
                diesel::insert_into(persons::table)
                    .values(&person)
                    .execute(conn)?;

                let employee = match input.salary {
                    Some(salary) => {
                        let employee = Employee {
                            user_id: user.id,
                            salary,
                        };
                        diesel::insert_into(employees::table)
                            .values(&employee)
                            .execute(conn)?;
                        Some(employee)
                    }
                    None => None,
                };

                Ok(RegisteredUser {
                    user,
                    person: Some(person),
                    employee,
                    company: None,
                })
            }
            UserKind::Company(input) => {
                let company = Company {
                    user_id: user.id,
                    tax_id: input.tax_id,
                    installed_capacity: input.installed_capacity,
                };
                diesel::insert_into(companies::table)
                    .values(&company)
                    .execute(conn)?;

                Ok(RegisteredUser {
                    user,
                    person: None,
                    employee: None,
                    company: Some(company),
                })
            }
        }
    });

    match &result {
        Ok(registered) => info!(user_id = registered.user.id, "user registered"),
        Err(e) => warn!(error = %e, "user registration rolled back"),
    }

    result
}

/// Gets a single user by ID.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: i32,
) -> Result<Option<User>, diesel::result::Error> {
    use crate::schema::users::dsl::*;
    users.filter(id.eq(user_id)).first::<User>(conn).optional()
}

/// Returns all users in ascending order by id.
pub fn list_all_users(conn: &mut SqliteConnection) -> Result<Vec<User>, diesel::result::Error> {
    use crate::schema::users::dsl::*;
    users.order(id.asc()).load::<User>(conn)
}

/// Gets the person row sharing `target_user_id`, if any.
pub fn get_person(
    conn: &mut SqliteConnection,
    target_user_id: i32,
) -> Result<Option<Person>, diesel::result::Error> {
    use crate::schema::persons::dsl::*;
    persons
        .filter(user_id.eq(target_user_id))
        .first::<Person>(conn)
        .optional()
}

/// Gets the employee row sharing `target_user_id`, if any.
pub fn get_employee(
    conn: &mut SqliteConnection,
    target_user_id: i32,
) -> Result<Option<Employee>, diesel::result::Error> {
    use crate::schema::employees::dsl::*;
    employees
        .filter(user_id.eq(target_user_id))
        .first::<Employee>(conn)
        .optional()
}
