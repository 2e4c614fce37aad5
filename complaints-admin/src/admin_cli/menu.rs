use std::io::{self, BufRead, Write};

use tracing::debug;

use super::complaint_commands::{handle_complaint_ls, handle_complaint_rm};
use super::prompt::{Console, PromptError};
use super::user_commands::handle_user_add;
use crate::config::Config;

const MENU_TITLE: &str = "=== SISTEMA DE GESTIÓN DE RECLAMOS ===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    RegisterUser,
    DeleteComplaint,
    ListComplaints,
}

impl MenuOption {
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            0 => Some(MenuOption::Exit),
            1 => Some(MenuOption::RegisterUser),
            2 => Some(MenuOption::DeleteComplaint),
            3 => Some(MenuOption::ListComplaints),
            _ => None,
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", MENU_TITLE)?;
    writeln!(out, "1. Insertar Usuario")?;
    writeln!(out, "2. Eliminar Reclamo")?;
    writeln!(out, "3. Listar Reclamos de un Usuario")?;
    writeln!(out, "0. Salir")
}

/// Runs the menu until the operator picks 0 or input runs out.
///
/// Each handler opens and drops its own connection, so nothing but the
/// database carries over between iterations.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> io::Result<()> {
    loop {
        print_menu(console.output())?;

        let selection = match console.prompt_number::<i64>("Seleccione una opción: ") {
            Ok(selection) => selection,
            Err(PromptError::EndOfInput) => break,
            Err(PromptError::Io(e)) => return Err(e),
        };

        let option = MenuOption::from_selection(selection);
        debug!(selection, ?option, "menu selection");

        let outcome = match option {
            Some(MenuOption::Exit) => break,
            Some(MenuOption::RegisterUser) => handle_user_add(console, config),
            Some(MenuOption::DeleteComplaint) => handle_complaint_rm(console, config),
            Some(MenuOption::ListComplaints) => handle_complaint_ls(console, config),
            None => {
                writeln!(console.output(), "Opción inválida.")?;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(PromptError::EndOfInput) => break,
            Err(PromptError::Io(e)) => return Err(e),
        }
    }

    writeln!(console.output(), "Saliendo del sistema...")
}
