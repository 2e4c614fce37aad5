pub mod company;
pub mod complaint;
mod db;
pub mod deleted_complaint;
pub mod material;
pub mod reason;
pub mod recall;
#[cfg(any(test, feature = "test-staging"))]
pub mod testing;
pub mod user;

pub use db::*;
