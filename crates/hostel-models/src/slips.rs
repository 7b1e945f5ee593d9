//! Slip domain models and DTOs.
//!
//! A slip is a student's leave or gate-pass request. New slips start out as
//! [`SlipStatus::Pending`]; the store rejects any status outside
//! [`SlipStatus`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use hostel_core::serde::deserialize_time;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::not_blank;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SlipStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SlipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlipStatus::Pending => "Pending",
            SlipStatus::Approved => "Approved",
            SlipStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for SlipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSlipStatusError(String);

impl fmt::Display for ParseSlipStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown slip status `{}`", self.0)
    }
}

impl std::error::Error for ParseSlipStatusError {}

impl FromStr for SlipStatus {
    type Err = ParseSlipStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(SlipStatus::Pending),
            "Approved" => Ok(SlipStatus::Approved),
            "Rejected" => Ok(SlipStatus::Rejected),
            other => Err(ParseSlipStatusError(other.to_string())),
        }
    }
}

impl TryFrom<String> for SlipStatus {
    type Error = ParseSlipStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A slip row as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slip {
    pub slip_id: i32,
    pub reg_no: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub slip_type: String,
    pub address: Option<String>,
    pub reason: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub room_no: i32,
    #[sqlx(try_from = "String")]
    pub status: SlipStatus,
    pub comment: Option<String>,
    pub warning_comment: Option<String>,
    pub warning_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Slip as listed by `GET /api/slips`.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct SlipSummary {
    pub slip_id: i32,
    pub reg_no: String,
    #[sqlx(try_from = "String")]
    pub status: SlipStatus,
}

/// DTO for filing a new slip.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSlipDto {
    #[validate(
        length(min = 1, max = 20, message = "reg_no must be 1 to 20 characters"),
        custom(function = "not_blank", message = "reg_no is required")
    )]
    pub reg_no: String,
    #[serde(rename = "type")]
    #[validate(
        length(min = 1, max = 50, message = "type must be 1 to 50 characters"),
        custom(function = "not_blank", message = "type is required")
    )]
    #[schema(example = "Leave")]
    pub slip_type: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[schema(value_type = String, example = "2024-05-01")]
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_time")]
    #[schema(value_type = String, example = "18:30")]
    pub time: NaiveTime,
    pub room_no: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in [SlipStatus::Pending, SlipStatus::Approved, SlipStatus::Rejected] {
            assert_eq!(status.as_str().parse::<SlipStatus>().unwrap(), status);
        }
        assert!("Cancelled".parse::<SlipStatus>().is_err());
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(SlipStatus::default(), SlipStatus::Pending);
        assert_eq!(serde_json::to_value(SlipStatus::default()).unwrap(), "Pending");
    }

    #[test]
    fn test_create_slip_payload() {
        let dto: CreateSlipDto = serde_json::from_value(serde_json::json!({
            "reg_no": "2021-CS-1",
            "type": "Leave",
            "date": "2024-05-01",
            "time": "18:30",
            "room_no": 12
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.slip_type, "Leave");
        assert_eq!(dto.time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
        assert!(dto.address.is_none());
    }

    #[test]
    fn test_room_no_must_be_integer() {
        let result = serde_json::from_value::<CreateSlipDto>(serde_json::json!({
            "reg_no": "2021-CS-1",
            "type": "Leave",
            "date": "2024-05-01",
            "time": "18:30",
            "room_no": "twelve"
        }));
        assert!(result.is_err());
    }
}
