use std::io::{BufRead, Write};

use complaints_db::models::ComplaintSummary;
use complaints_db::orm::complaint::{delete_complaint, list_user_complaints};
use diesel::sqlite::SqliteConnection;
use tracing::error;

use super::prompt::{Console, PromptError};
use super::utils::establish_connection;
use crate::config::Config;
use crate::error::AdminError;

const RULE: &str = "========================================";
const SEPARATOR: &str = "----------------------------------------";

/// Deletes one complaint and returns how many rows went away.
pub fn complaint_rm_impl(
    conn: &mut SqliteConnection,
    complaint_number: i32,
) -> Result<usize, AdminError> {
    Ok(delete_complaint(conn, complaint_number)?)
}

pub fn complaint_ls_impl(
    conn: &mut SqliteConnection,
    user_id: i32,
) -> Result<Vec<ComplaintSummary>, AdminError> {
    Ok(list_user_complaints(conn, user_id)?)
}

/// Prints the complaint report for `user_id`, or a not-found line when empty.
pub fn write_complaint_report<W: Write>(
    out: &mut W,
    user_id: i32,
    complaints: &[ComplaintSummary],
) -> std::io::Result<()> {
    if complaints.is_empty() {
        return writeln!(
            out,
            "No se encontraron reclamos para el usuario {}",
            user_id
        );
    }

    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "RECLAMOS DEL USUARIO {}", user_id)?;
    writeln!(out, "{}", RULE)?;

    for complaint in complaints {
        writeln!(out, "\nNúmero de Reclamo: {}", complaint.number)?;
        writeln!(out, "Fecha de Reclamo: {}", complaint.complaint_date)?;
        writeln!(out, "Motivo: {}", complaint.reason)?;
        if let Some(resolved_on) = complaint.resolution_date {
            writeln!(out, "Fecha de Resolución: {}", resolved_on)?;
        }
        writeln!(out, "Estado: {}", complaint.status().label())?;
        writeln!(out, "Cantidad de Rellamados: {}", complaint.recall_count)?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(())
}

/// Menu option 2: delete a complaint by number.
pub fn handle_complaint_rm<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<(), PromptError> {
    writeln!(console.output(), "\n--- Eliminar Reclamo ---")?;
    let complaint_number: i32 = console.prompt_number("Ingrese el número de reclamo: ")?;

    let outcome = establish_connection(config)
        .and_then(|mut conn| complaint_rm_impl(&mut conn, complaint_number));

    match outcome {
        Ok(0) => {
            writeln!(
                console.output(),
                "No se encontró el reclamo con número: {}",
                complaint_number
            )?;
        }
        Ok(_) => {
            writeln!(console.output(), "Reclamo eliminado exitosamente.")?;
            writeln!(
                console.output(),
                "Se ha registrado la eliminación en la tabla de reclamos eliminados."
            )?;
        }
        Err(e) => {
            error!(complaint_number, error = %e, "complaint deletion failed");
            writeln!(console.output(), "Error al eliminar reclamo: {}", e)?;
        }
    }
    Ok(())
}

/// Menu option 3: list a user's complaints with recall counts.
pub fn handle_complaint_ls<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<(), PromptError> {
    writeln!(console.output(), "\n--- Listar Reclamos de Usuario ---")?;
    let user_id: i32 = console.prompt_number("Ingrese el ID del usuario: ")?;

    let outcome =
        establish_connection(config).and_then(|mut conn| complaint_ls_impl(&mut conn, user_id));

    match outcome {
        Ok(complaints) => write_complaint_report(console.output(), user_id, &complaints)?,
        Err(e) => {
            error!(user_id, error = %e, "complaint listing failed");
            writeln!(console.output(), "Error al listar reclamos: {}", e)?;
        }
    }
    Ok(())
}
