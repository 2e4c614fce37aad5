pub mod company;
pub mod complaint;
pub mod deleted_complaint;
pub mod employee;
pub mod material;
pub mod person;
pub mod reason;
pub mod recall;
pub mod user;

// Re-export models for easier access
pub use company::*;
pub use complaint::*;
pub use deleted_complaint::*;
pub use employee::*;
pub use material::*;
pub use person::*;
pub use reason::*;
pub use recall::*;
pub use user::*;
