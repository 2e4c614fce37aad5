use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(
    Queryable,
    Selectable,
    Identifiable,
    Insertable,
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = crate::schema::materials)]
#[diesel(primary_key(code))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Material {
    pub code: i32,
    pub description: String,
}

/// Material used while working a complaint.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::complaint_materials)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ComplaintMaterial {
    pub complaint_number: i32,
    pub material_code: i32,
    pub quantity: i32,
}
