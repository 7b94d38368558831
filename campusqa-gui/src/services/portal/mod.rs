//! HTTP client for the portal backend. All authenticated calls carry the
//! credential as a bearer header; responses use the
//! `{ success, message, ... }` envelope and a reported failure is
//! surfaced as an [`ApiError`].

pub mod api;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use reqwest::{IntoUrl, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::session::{Credential, UserId};

#[derive(Debug, Clone)]
pub struct ApiError {
    pub http_status: Option<u16>,
    pub message: String,
}

impl ApiError {
    fn backend(message: Option<String>) -> Self {
        ApiError {
            http_status: None,
            message: message.unwrap_or_else(|| "Request failed".to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "{}: {}", status, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        ApiError {
            http_status: value.status().map(|s| s.as_u16()),
            message: value.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    url: String,
    credential: Option<Credential>,
    unauthenticated: Arc<AtomicBool>,
}

impl PortalClient {
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
            credential: None,
            unauthenticated: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_credential(url: String, credential: Credential) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
            credential: Some(credential),
            unauthenticated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the backend answered 401 to an earlier call.
    pub fn is_unauthenticated(&self) -> bool {
        self.unauthenticated.load(Ordering::Relaxed)
    }

    /// The OAuth entry point, opened in the system browser.
    pub fn oauth_entry_url(&self) -> String {
        format!("{}/auth/google", self.url)
    }

    fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("User-Agent", format!("campusqa-gui/{}", crate::VERSION));
        if let Some(credential) = &self.credential {
            req = req.header(
                "Authorization",
                format!("Bearer {}", credential.as_str()),
            );
        }
        tracing::debug!("Sending http request: {:?}", req);
        req
    }

    async fn call<P, D>(&self, method: Method, uri: &str, payload: Option<&P>) -> Result<D, ApiError>
    where
        P: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let mut req = self.request(method, format!("{}{}", self.url, uri));
        if let Some(payload) = payload {
            req = req.json(payload);
        }
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 401 {
                self.unauthenticated.store(true, Ordering::Relaxed);
            }
            return Err(ApiError {
                http_status: Some(status.as_u16()),
                message: error_text(response).await,
            });
        }
        // A non-JSON body is a decode error, reported like any other
        // failed call.
        response.json().await.map_err(|e| ApiError {
            http_status: None,
            message: format!("Failed to decode response: {}", e),
        })
    }

    async fn post<P, D>(&self, uri: &str, payload: &P) -> Result<D, ApiError>
    where
        P: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        self.call(Method::POST, uri, Some(payload)).await
    }

    async fn get<D: DeserializeOwned>(&self, uri: &str) -> Result<D, ApiError> {
        self.call::<(), D>(Method::GET, uri, None).await
    }

    // ---- Authentication ----

    pub async fn login(&self, username: &str, password: &str) -> Result<Credential, ApiError> {
        let res: api::LoginResponse = self
            .post("/api/login", &api::LoginPayload { username, password })
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        res.token
            .map(Credential::new)
            .ok_or_else(|| ApiError::backend(Some("No token in login response".to_string())))
    }

    pub async fn register(
        &self,
        fullname: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post(
                "/api/register",
                &api::RegisterPayload {
                    fullname,
                    email,
                    password,
                },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn verify_signup_otp(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post("/api/verify-otp", &api::OtpPayload { email, otp })
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn resend_signup_otp(&self, email: &str) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post("/api/resend-otp", &api::EmailPayload { email })
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post("/api/forgot-password", &api::EmailPayload { email })
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn verify_reset_otp(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post("/api/verify-reset-otp", &api::OtpPayload { email, otp })
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post(
                "/api/reset-password",
                &api::ResetPasswordPayload {
                    email,
                    new_password,
                },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    /// Asks the backend whether the held credential is currently valid.
    /// A transport failure is distinct from an explicit `false`.
    pub async fn verify_token(&self) -> Result<bool, ApiError> {
        let token = self
            .credential
            .as_ref()
            .map(|c| c.as_str())
            .unwrap_or_default();
        let res: api::Ack = self
            .post("/api/verify-token", &api::VerifyTokenPayload { token })
            .await?;
        Ok(res.success)
    }

    // ---- Profile ----

    pub async fn get_profile_data(&self) -> Result<api::ProfileData, ApiError> {
        let res: api::ProfileData = self.get("/api/get-profile-data").await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(res)
    }

    pub async fn save_personal_info(
        &self,
        user_id: &UserId,
        info: &api::PersonalInfo,
    ) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post(
                "/api/save-personal-info",
                &api::WithUser {
                    user_id,
                    data: info,
                },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn save_designation(
        &self,
        user_id: &UserId,
        designation: &api::Designation,
    ) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post(
                "/api/save-designation",
                &api::WithUser {
                    user_id,
                    data: designation,
                },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn save_general_profile(
        &self,
        user_id: &UserId,
        profile: &api::GeneralProfile,
    ) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post(
                "/api/save-general-profile",
                &api::WithUser {
                    user_id,
                    data: profile,
                },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    pub async fn save_profile_photo(&self, photo: &str) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post("/api/save-profile-photo", &api::PhotoPayload { photo })
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    // ---- College email OTP ----

    pub async fn send_college_otp(
        &self,
        user_id: &UserId,
        email: &str,
    ) -> Result<api::CollegeOtp, ApiError> {
        let res: api::CollegeOtp = self
            .post(
                "/api/send-college-otp",
                &api::CollegeOtpPayload { email, user_id },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(res)
    }

    pub async fn verify_college_otp(
        &self,
        user_id: &UserId,
        email: &str,
        otp: &str,
    ) -> Result<(), ApiError> {
        let res: api::Ack = self
            .post(
                "/api/verify-college-otp",
                &api::VerifyCollegeOtpPayload {
                    email,
                    otp,
                    user_id,
                },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(())
    }

    // ---- Forum ----

    pub async fn list_questions(&self) -> Result<Vec<api::Question>, ApiError> {
        let res: api::QuestionList = self.get("/api/questions").await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(res.questions)
    }

    pub async fn list_tags(&self) -> Result<Vec<api::TagCount>, ApiError> {
        let res: api::TagList = self.get("/api/tags").await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(res.tags)
    }

    pub async fn list_answers(&self, question_id: i64) -> Result<Vec<api::Answer>, ApiError> {
        let res: api::AnswerList = self
            .get(&format!("/api/questions/{}/answers", question_id))
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(res.answers)
    }

    pub async fn post_question(
        &self,
        title: &str,
        body: &str,
        tags: &[String],
    ) -> Result<api::Question, ApiError> {
        let res: api::PostedQuestion = self
            .post(
                "/api/questions",
                &api::NewQuestionPayload { title, body, tags },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        res.question
            .ok_or_else(|| ApiError::backend(Some("No question in response".to_string())))
    }

    pub async fn post_answer(&self, question_id: i64, body: &str) -> Result<api::Answer, ApiError> {
        let res: api::PostedAnswer = self
            .post(
                "/api/answers",
                &api::NewAnswerPayload { question_id, body },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        res.answer
            .ok_or_else(|| ApiError::backend(Some("No answer in response".to_string())))
    }

    pub async fn vote_question(
        &self,
        question_id: i64,
        vote: api::VoteKind,
    ) -> Result<api::VoteResult, ApiError> {
        let res: api::VoteResult = self
            .post(
                "/api/vote",
                &api::VotePayload { question_id, vote },
            )
            .await?;
        if !res.success {
            return Err(ApiError::backend(res.message));
        }
        Ok(res)
    }
}

async fn error_text(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error response".to_string())
}
