use diesel::prelude::*;

use crate::models::{ComplaintMaterial, Material};

pub fn insert_material(
    conn: &mut SqliteConnection,
    material_code: i32,
    material_description: String,
) -> Result<Material, diesel::result::Error> {
    use crate::schema::materials::dsl::*;

    let material = Material {
        code: material_code,
        description: material_description,
    };
    diesel::insert_into(materials)
        .values(&material)
        .execute(conn)?;
    Ok(material)
}

/// Links `quantity` units of a material to a complaint.
pub fn attach_material(
    conn: &mut SqliteConnection,
    target_complaint: i32,
    target_material: i32,
    units: i32,
) -> Result<ComplaintMaterial, diesel::result::Error> {
    use crate::schema::complaint_materials::dsl::*;

    let link = ComplaintMaterial {
        complaint_number: target_complaint,
        material_code: target_material,
        quantity: units,
    };
    diesel::insert_into(complaint_materials)
        .values(&link)
        .execute(conn)?;
    Ok(link)
}

/// Returns the materials linked to a complaint, ordered by material code.
pub fn get_complaint_materials(
    conn: &mut SqliteConnection,
    target_complaint: i32,
) -> Result<Vec<ComplaintMaterial>, diesel::result::Error> {
    use crate::schema::complaint_materials::dsl::*;
    complaint_materials
        .filter(complaint_number.eq(target_complaint))
        .order(material_code.asc())
        .load::<ComplaintMaterial>(conn)
}
