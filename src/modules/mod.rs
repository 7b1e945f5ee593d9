pub mod auth;
pub mod profiles;
pub mod slips;
pub mod students;
pub mod warnings;
