//! # Hostel Models
//!
//! Domain models and DTOs for the Hostel API: the nine store entities, the
//! request bodies accepted by the HTTP surface and the response shapes it
//! returns.
//!
//! # Modules
//!
//! - [`admins`]: Staff admins and the Main Admin role
//! - [`auth`]: Login request/response
//! - [`blocks`]: Hostel blocks
//! - [`notifications`]: Parent notifications for slips
//! - [`parents`]: Student parents / guardians
//! - [`profiles`]: Admin and student profiles
//! - [`slip_history`]: Audit trail of slip actions
//! - [`slips`]: Leave / gate-pass slips
//! - [`students`]: Hostel residents
//! - [`validation`]: Field rules shared by the DTOs
//! - [`warnings`]: Disciplinary warnings

pub mod admins;
pub mod auth;
pub mod blocks;
pub mod notifications;
pub mod parents;
pub mod profiles;
pub mod slip_history;
pub mod slips;
pub mod students;
pub mod validation;
pub mod warnings;

pub use admins::{Admin, MAIN_ADMIN_ROLE};
pub use auth::{LoginRequest, LoginResponse, LoginRole, MessageResponse};
pub use blocks::Block;
pub use notifications::Notification;
pub use parents::Parent;
pub use profiles::{Profile, ProfileResponse};
pub use slip_history::SlipHistory;
pub use slips::{CreateSlipDto, Slip, SlipStatus, SlipSummary};
pub use students::{CreateStudentDto, Student, StudentDetail, UpdatePasswordDto};
pub use warnings::{Warning, WarningSummary};
