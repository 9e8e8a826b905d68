use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    #[sqlx(rename = "interview_date")]
    pub date: String,
    #[sqlx(rename = "interview_time")]
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "interview_type")]
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Phone,
    Video,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interview_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// Fields the client supplies when creating an interview. Required fields are
/// Option so a missing one produces a `<field> is required` error instead of
/// a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub company: Option<String>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub position: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub interview_type: Option<InterviewType>,
    pub status: Option<InterviewStatus>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub contact_person: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: Option<String>,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub position: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[validate(length(min = 1, max = 200, message = "must be 1 to 200 characters"))]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub interview_type: Option<InterviewType>,
    pub status: Option<InterviewStatus>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub contact_person: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: Option<String>,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub notes: Option<String>,
}

/// A validated interview ready for insertion. The store assigns the id and
/// both timestamps.
#[derive(Debug, Clone)]
pub struct NewInterview {
    pub company: String,
    pub position: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
}

impl CreateInterviewRequest {
    /// Checks every required field is present and non-empty, trims text
    /// fields and lowercases the contact email.
    pub fn into_new_interview(self) -> Result<NewInterview, AppError> {
        let company = require_text("company", self.company)?;
        let position = require_text("position", self.position)?;
        let date = require_text("date", self.date)?;
        let time = require_text("time", self.time)?;
        let location = require_text("location", self.location)?;
        let interview_type = self
            .interview_type
            .ok_or_else(|| AppError::Validation("type is required".to_string()))?;
        let status = self
            .status
            .ok_or_else(|| AppError::Validation("status is required".to_string()))?;

        Ok(NewInterview {
            company,
            position,
            date,
            time,
            location,
            interview_type,
            status,
            contact_person: trim_optional(self.contact_person),
            contact_email: trim_optional(self.contact_email).map(|e| e.to_lowercase()),
            notes: trim_optional(self.notes),
        })
    }
}

impl UpdateInterviewRequest {
    /// A required field may be omitted from a partial update, but a provided
    /// value must not trim down to nothing — that would empty a field the
    /// record is not allowed to lose.
    pub fn ensure_required_not_blank(&self) -> Result<(), AppError> {
        let required = [
            ("company", &self.company),
            ("position", &self.position),
            ("date", &self.date),
            ("time", &self.time),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if let Some(v) = value {
                if v.trim().is_empty() {
                    return Err(AppError::Validation(format!("{} is required", field)));
                }
            }
        }
        Ok(())
    }

    /// Merges the provided fields onto an existing record. The id and
    /// created_at are never touched; the caller refreshes updated_at.
    /// Optional fields get the same normalization as on create: a value
    /// that trims to empty clears the field.
    pub fn apply_to(&self, interview: &mut Interview) {
        if let Some(company) = &self.company {
            interview.company = company.trim().to_string();
        }
        if let Some(position) = &self.position {
            interview.position = position.trim().to_string();
        }
        if let Some(date) = &self.date {
            interview.date = date.trim().to_string();
        }
        if let Some(time) = &self.time {
            interview.time = time.trim().to_string();
        }
        if let Some(location) = &self.location {
            interview.location = location.trim().to_string();
        }
        if let Some(interview_type) = self.interview_type {
            interview.interview_type = interview_type;
        }
        if let Some(status) = self.status {
            interview.status = status;
        }
        if self.contact_person.is_some() {
            interview.contact_person = trim_optional(self.contact_person.clone());
        }
        if self.contact_email.is_some() {
            interview.contact_email =
                trim_optional(self.contact_email.clone()).map(|e| e.to_lowercase());
        }
        if self.notes.is_some() {
            interview.notes = trim_optional(self.notes.clone());
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

fn require_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateInterviewRequest {
        CreateInterviewRequest {
            company: Some("Google".to_string()),
            position: Some("Backend Engineer".to_string()),
            date: Some("2026-09-15".to_string()),
            time: Some("14:00".to_string()),
            location: Some("Remote".to_string()),
            interview_type: Some(InterviewType::Video),
            status: Some(InterviewStatus::Scheduled),
            contact_person: Some("  Jane Doe  ".to_string()),
            contact_email: Some("Jane.Doe@Google.com".to_string()),
            notes: None,
        }
    }

    #[test]
    fn missing_company_names_the_field() {
        let mut request = full_request();
        request.company = None;
        let err = request.into_new_interview().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "company is required"));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut request = full_request();
        request.position = Some("   ".to_string());
        let err = request.into_new_interview().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "position is required"));
    }

    #[test]
    fn optional_fields_are_trimmed_and_email_lowercased() {
        let new_interview = full_request().into_new_interview().unwrap();
        assert_eq!(new_interview.contact_person.as_deref(), Some("Jane Doe"));
        assert_eq!(
            new_interview.contact_email.as_deref(),
            Some("jane.doe@google.com")
        );
    }

    #[test]
    fn update_merge_leaves_absent_fields_alone() {
        let mut interview = Interview {
            id: Uuid::new_v4(),
            company: "Google".to_string(),
            position: "Backend Engineer".to_string(),
            date: "2026-09-15".to_string(),
            time: "14:00".to_string(),
            location: "Remote".to_string(),
            interview_type: InterviewType::Video,
            status: InterviewStatus::Scheduled,
            contact_person: None,
            contact_email: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let patch = UpdateInterviewRequest {
            company: None,
            position: None,
            date: None,
            time: None,
            location: None,
            interview_type: None,
            status: Some(InterviewStatus::Completed),
            contact_person: None,
            contact_email: None,
            notes: Some("went well".to_string()),
        };
        patch.apply_to(&mut interview);
        assert_eq!(interview.status, InterviewStatus::Completed);
        assert_eq!(interview.company, "Google");
        assert_eq!(interview.notes.as_deref(), Some("went well"));
    }

    #[test]
    fn blank_required_field_in_update_is_rejected() {
        let patch = UpdateInterviewRequest {
            company: Some("   ".to_string()),
            position: None,
            date: None,
            time: None,
            location: None,
            interview_type: None,
            status: None,
            contact_person: None,
            contact_email: None,
            notes: None,
        };
        let err = patch.ensure_required_not_blank().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "company is required"));

        let patch = UpdateInterviewRequest {
            company: Some("Google".to_string()),
            position: None,
            date: None,
            time: None,
            location: None,
            interview_type: None,
            status: None,
            contact_person: None,
            contact_email: None,
            notes: None,
        };
        assert!(patch.ensure_required_not_blank().is_ok());
    }

    #[test]
    fn update_clears_optional_field_given_blank_value() {
        let mut interview = Interview {
            id: Uuid::new_v4(),
            company: "Google".to_string(),
            position: "Backend Engineer".to_string(),
            date: "2026-09-15".to_string(),
            time: "14:00".to_string(),
            location: "Remote".to_string(),
            interview_type: InterviewType::Video,
            status: InterviewStatus::Scheduled,
            contact_person: Some("Jane Doe".to_string()),
            contact_email: Some("jane@google.com".to_string()),
            notes: Some("bring laptop".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let patch = UpdateInterviewRequest {
            company: None,
            position: None,
            date: None,
            time: None,
            location: None,
            interview_type: None,
            status: None,
            contact_person: Some("   ".to_string()),
            contact_email: None,
            notes: Some("".to_string()),
        };
        patch.apply_to(&mut interview);
        assert_eq!(interview.contact_person, None);
        assert_eq!(interview.notes, None);
        assert_eq!(interview.contact_email.as_deref(), Some("jane@google.com"));
    }
}
