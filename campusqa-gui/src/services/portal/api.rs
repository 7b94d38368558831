//! Typed payloads and responses of the portal backend. Every response
//! carries the `{ success, message, ... }` envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::UserId;

#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterPayload<'a> {
    pub fullname: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct OtpPayload<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EmailPayload<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordPayload<'a> {
    pub email: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyTokenPayload<'a> {
    pub token: &'a str,
}

/// Wraps a profile payload with the identifier of the active session.
#[derive(Debug, Serialize)]
pub struct WithUser<'a, T: Serialize> {
    pub user_id: &'a UserId,
    #[serde(flatten)]
    pub data: &'a T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub age: u32,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "designation_type", rename_all = "lowercase")]
pub enum Designation {
    Student {
        registration_no: String,
        program: String,
        department: String,
        current_year: u32,
        graduation_year: u32,
        college_email: String,
        #[serde(default)]
        is_college_email_verified: bool,
    },
    Faculty {
        faculty_id: String,
        faculty_department: String,
        post: String,
        courses_taught: String,
        office_location: String,
        experience: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        research: Option<String>,
    },
    Alumni {
        graduation_year: u32,
        program: String,
        department: String,
        job_title: String,
        company_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        linkedin: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralProfile {
    pub short_bio: String,
    pub skills: String,
    pub interests: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileData {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub designation: Option<Designation>,
    #[serde(default)]
    pub general_profile: Option<GeneralProfile>,
}

#[derive(Debug, Serialize)]
pub struct PhotoPayload<'a> {
    pub photo: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CollegeOtpPayload<'a> {
    pub email: &'a str,
    pub user_id: &'a UserId,
}

#[derive(Debug, Serialize)]
pub struct VerifyCollegeOtpPayload<'a> {
    pub email: &'a str,
    pub otp: &'a str,
    pub user_id: &'a UserId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollegeOtp {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// The backend short-circuits when the address was confirmed before.
    #[serde(default)]
    pub already_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(default)]
    pub answers_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub upvotes: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagCount {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionList {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerList {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagList {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagCount>,
}

#[derive(Debug, Serialize)]
pub struct NewQuestionPayload<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub tags: &'a [String],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostedQuestion {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub question: Option<Question>,
}

#[derive(Debug, Serialize)]
pub struct NewAnswerPayload<'a> {
    pub question_id: i64,
    pub body: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostedAnswer {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub answer: Option<Answer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

#[derive(Debug, Serialize)]
pub struct VotePayload {
    pub question_id: i64,
    pub vote: VoteKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoteResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designation_serializes_flat_with_tag() {
        let designation = Designation::Student {
            registration_no: "12100001".to_string(),
            program: "btech".to_string(),
            department: "computer_science".to_string(),
            current_year: 3,
            graduation_year: 2026,
            college_email: "jane@students.lpu.in".to_string(),
            is_college_email_verified: true,
        };
        let value = serde_json::to_value(&designation).unwrap();
        assert_eq!(value["designation_type"], "student");
        assert_eq!(value["registration_no"], "12100001");

        let parsed: Designation = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, designation);
    }

    #[test]
    fn designation_variants_deserialize() {
        let faculty: Designation = serde_json::from_str(
            r#"{"designation_type":"faculty","faculty_id":"F-7","faculty_department":"CSE",
                "post":"Professor","courses_taught":"CS101","office_location":"B-204",
                "experience":12}"#,
        )
        .unwrap();
        assert!(matches!(faculty, Designation::Faculty { research: None, .. }));

        let alumni: Designation = serde_json::from_str(
            r#"{"designation_type":"alumni","graduation_year":2019,"program":"mba",
                "department":"finance","job_title":"Analyst","company_name":"Acme"}"#,
        )
        .unwrap();
        assert!(matches!(alumni, Designation::Alumni { linkedin: None, .. }));
    }

    #[test]
    fn with_user_flattens_the_payload() {
        let info = PersonalInfo {
            full_name: "Jane Doe".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            age: 21,
            gender: "female".to_string(),
        };
        let user_id = crate::session::UserId::Number(42);
        let value = serde_json::to_value(WithUser {
            user_id: &user_id,
            data: &info,
        })
        .unwrap();
        assert_eq!(value["user_id"], 42);
        assert_eq!(value["full_name"], "Jane Doe");
    }

    #[test]
    fn college_otp_defaults() {
        let res: CollegeOtp =
            serde_json::from_str(r#"{"success":true,"message":"OTP sent"}"#).unwrap();
        assert!(res.success);
        assert!(!res.already_verified);
    }
}
