pub mod complaint_commands;
pub mod menu;
pub mod prompt;
pub mod user_commands;
pub mod utils;
