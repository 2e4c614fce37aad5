use std::io::{BufRead, Write};
use std::sync::LazyLock;

use complaints_db::models::{
    CompanyInput, MAX_INSTALLED_CAPACITY, PersonInput, UserKind, UserRegistration,
};
use complaints_db::orm::user::register_user;
use diesel::sqlite::SqliteConnection;
use regex::Regex;
use tracing::error;

use super::prompt::{Console, INVALID_NUMBER, PromptError};
use super::utils::establish_connection;
use crate::config::Config;
use crate::error::AdminError;

static DOCUMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("valid regex"));
// CUIT without dashes; 18 digits always fits in an i64.
static TAX_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,18}$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Person,
    Company,
}

pub fn parse_user_type(answer: &str) -> Result<UserType, String> {
    match answer {
        "1" => Ok(UserType::Person),
        "2" => Ok(UserType::Company),
        _ => Err("Tipo inválido, ingrese 1 o 2.".to_string()),
    }
}

pub fn parse_document(answer: &str) -> Result<i32, String> {
    if !DOCUMENT_RE.is_match(answer) {
        return Err("El documento debe tener 8 dígitos.".to_string());
    }
    answer.parse::<i32>().map_err(|e| e.to_string())
}

pub fn parse_tax_id(answer: &str) -> Result<i64, String> {
    if !TAX_ID_RE.is_match(answer) {
        return Err("El CUIT debe contener solo dígitos.".to_string());
    }
    answer.parse::<i64>().map_err(|e| e.to_string())
}

pub fn parse_capacity(answer: &str) -> Result<f64, String> {
    let capacity = answer
        .parse::<f64>()
        .map_err(|_| INVALID_NUMBER.to_string())?;
    if !(0.0..=MAX_INSTALLED_CAPACITY).contains(&capacity) {
        return Err(format!(
            "La capacidad instalada debe estar entre 0 y {}.",
            MAX_INSTALLED_CAPACITY
        ));
    }
    Ok(capacity)
}

pub fn parse_salary(answer: &str) -> Result<f64, String> {
    let salary = answer
        .parse::<f64>()
        .map_err(|_| INVALID_NUMBER.to_string())?;
    if !salary.is_finite() || salary < 0.0 {
        return Err("El sueldo debe ser un número no negativo.".to_string());
    }
    Ok(salary)
}

/// Asks for every registration field. Nothing touches the database here.
pub fn read_registration<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<UserRegistration, PromptError> {
    writeln!(console.output(), "Tipo de usuario:")?;
    writeln!(console.output(), "1. Persona")?;
    writeln!(console.output(), "2. Empresa")?;
    let user_type = console.prompt_with("Seleccione: ", parse_user_type)?;

    let address = console.read_line("Dirección: ")?;
    let phone = console.read_line("Teléfono: ")?;

    let kind = match user_type {
        UserType::Person => {
            let document = console.prompt_with("Documento (DNI, 8 dígitos): ", parse_document)?;
            let first_name = console.read_line("Nombre: ")?;
            let last_name = console.read_line("Apellido: ")?;
            let salary = if console.prompt_yes_no("¿Es empleado? (s/n): ")? {
                Some(console.prompt_with("Sueldo: ", parse_salary)?)
            } else {
                None
            };
            UserKind::Person(PersonInput {
                document,
                first_name,
                last_name,
                salary,
            })
        }
        UserType::Company => {
            let tax_id = console.prompt_with("CUIT (sin guiones): ", parse_tax_id)?;
            let installed_capacity =
                console.prompt_with("Capacidad Instalada (0-50000): ", parse_capacity)?;
            UserKind::Company(CompanyInput {
                tax_id,
                installed_capacity,
            })
        }
    };

    Ok(UserRegistration {
        address,
        phone,
        kind,
    })
}

/// Writes the registration and returns the new user id.
pub fn user_add_impl(
    conn: &mut SqliteConnection,
    registration: UserRegistration,
) -> Result<i32, AdminError> {
    let registered = register_user(conn, registration)?;
    Ok(registered.user.id)
}

/// Menu option 1: register a person, employee or company.
///
/// Only console failures are returned; database failures are printed and
/// leave nothing committed.
pub fn handle_user_add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<(), PromptError> {
    writeln!(console.output(), "\n--- Insertar Usuario ---")?;
    let registration = read_registration(console)?;

    let outcome =
        establish_connection(config).and_then(|mut conn| user_add_impl(&mut conn, registration));

    match outcome {
        Ok(user_id) => {
            writeln!(
                console.output(),
                "Usuario insertado exitosamente con ID: {}",
                user_id
            )?;
        }
        Err(e) => {
            error!(error = %e, "user registration failed");
            writeln!(console.output(), "Error al insertar usuario: {}", e)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_document() {
        assert_eq!(parse_document("30123456"), Ok(30123456));
        assert_eq!(parse_document("00123456"), Ok(123456));
        assert!(parse_document("3012345").is_err());
        assert!(parse_document("301234567").is_err());
        assert!(parse_document("3012345a").is_err());
        assert!(parse_document("-1234567").is_err());
    }

    #[test]
    fn test_parse_tax_id() {
        assert_eq!(parse_tax_id("30712345678"), Ok(30712345678));
        assert!(parse_tax_id("30-71234567-8").is_err());
        assert!(parse_tax_id("").is_err());
        assert!(parse_tax_id("1234567890123456789").is_err());
    }

    #[test]
    fn test_parse_capacity_bounds() {
        assert_eq!(parse_capacity("0"), Ok(0.0));
        assert_eq!(parse_capacity("50000"), Ok(50000.0));
        assert_eq!(parse_capacity("1234.5"), Ok(1234.5));
        assert!(parse_capacity("-0.1").is_err());
        assert!(parse_capacity("50000.01").is_err());
        assert!(parse_capacity("NaN").is_err());
        assert!(parse_capacity("mucho").is_err());
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("350000.50"), Ok(350000.5));
        assert!(parse_salary("-1").is_err());
        assert!(parse_salary("inf").is_err());
    }

    #[test]
    fn test_read_employee_registration() {
        let mut console = console("1\nMitre 55\n4321\n12345678\nLucía\nPaz\ns\n99000\n");
        let registration = read_registration(&mut console).unwrap();

        assert_eq!(registration.address, "Mitre 55");
        assert_eq!(registration.phone, "4321");
        assert_eq!(
            registration.kind,
            UserKind::Person(PersonInput {
                document: 12345678,
                first_name: "Lucía".to_string(),
                last_name: "Paz".to_string(),
                salary: Some(99000.0),
            })
        );
    }

    #[test]
    fn test_read_company_registration_reprompts_invalid_fields() {
        let mut console = console("3\n2\nRuta 40\n555\n30-1\n30712345678\n60000\n25000\n");
        let registration = read_registration(&mut console).unwrap();

        assert_eq!(
            registration.kind,
            UserKind::Company(CompanyInput {
                tax_id: 30712345678,
                installed_capacity: 25000.0,
            })
        );
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Tipo inválido"));
        assert!(output.contains("solo dígitos"));
        assert!(output.contains("entre 0 y 50000"));
    }

    #[test]
    fn test_read_registration_stops_at_end_of_input() {
        let mut console = console("1\nMitre 55\n");
        let result = read_registration(&mut console);
        assert!(matches!(result, Err(PromptError::EndOfInput)));
    }
}
