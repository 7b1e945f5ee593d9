use utoipa::OpenApi;

use hostel_core::errors::{ErrorBody, ErrorKind, ErrorResponse};
use hostel_models::{
    CreateSlipDto, CreateStudentDto, LoginRequest, LoginResponse, LoginRole, MessageResponse,
    ProfileResponse, SlipStatus, SlipSummary, StudentDetail, UpdatePasswordDto, WarningSummary,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_password,
        crate::modules::slips::controller::get_slips,
        crate::modules::slips::controller::create_slip,
        crate::modules::warnings::controller::get_warnings,
        crate::modules::profiles::controller::get_profile,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            LoginRole,
            MessageResponse,
            CreateStudentDto,
            StudentDetail,
            UpdatePasswordDto,
            CreateSlipDto,
            SlipStatus,
            SlipSummary,
            WarningSummary,
            ProfileResponse,
            ErrorResponse,
            ErrorBody,
            ErrorKind,
        )
    ),
    tags(
        (name = "Authentication", description = "Credential check"),
        (name = "Students", description = "Hostel residents"),
        (name = "Slips", description = "Leave and gate-pass slips"),
        (name = "Warnings", description = "Disciplinary warnings"),
        (name = "Profiles", description = "Student profiles"),
    ),
    info(
        title = "Hostel Management System API",
        description = "Record service for hostel students, slips, warnings and profiles",
    )
)]
pub struct ApiDoc;
