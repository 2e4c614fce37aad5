use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::models::{CompanyInput, PersonInput};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub address: String,
    pub phone: String,
}

#[derive(Insertable, Debug, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub address: String,
    pub phone: String,
    // id is generated by the database
}

/// Which specialization a new user row gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserKind {
    Person(PersonInput),
    Company(CompanyInput),
}

/// Everything needed to register a user in one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegistration {
    pub address: String,
    pub phone: String,
    pub kind: UserKind,
}

/// Ids and subtype rows written by a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredUser {
    pub user: User,
    pub person: Option<crate::models::Person>,
    pub employee: Option<crate::models::Employee>,
    pub company: Option<crate::models::Company>,
}
