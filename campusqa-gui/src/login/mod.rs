//! Login, signup and the signup OTP entry.

mod view;

use std::time::Duration;

use iced::widget::text_input;
use iced::{Subscription, Task};
use tracing::warn;

use campusqa_ui::component::form;
use campusqa_ui::widget::Element;

use crate::{
    config::Config,
    dir::PortalDirectory,
    loader::Notice,
    services::portal::{ApiError, PortalClient},
    session::{
        self,
        cookies::CookieJar,
        otp::{OtpSession, OTP_CODE_LEN},
        Credential, Session,
    },
    settings::Settings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Login,
    Signup,
    SignupOtp,
    Forgot,
}

/// Stages of the password-reset flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForgotStep {
    Email,
    Code,
    NewPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    LoggedIn(Result<Credential, ApiError>),
    Registered(Result<(), ApiError>),
    OtpVerified(Result<(), ApiError>),
    OtpResent(Result<(), ApiError>),
    ForgotRequested(Result<(), ApiError>),
    ResetOtpVerified(Result<(), ApiError>),
    PasswordReset(Result<(), ApiError>),
    Tick,
    // Terminal messages, handled by the upper level.
    Run(Box<Session>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    ShowSignup,
    ShowLogin,
    ShowForgot,
    ForgotEmailEdited(String),
    ForgotCodeEdited(String),
    NewPasswordEdited(String),
    SubmitForgot,
    UsernameEdited(String),
    PasswordEdited(String),
    RememberToggled(bool),
    FullnameEdited(String),
    EmailEdited(String),
    SignupPasswordEdited(String),
    CodeEdited(String),
    SubmitLogin,
    SubmitSignup,
    VerifyCode,
    ResendCode,
    ContinueWithGoogle,
}

pub struct LoginPage {
    datadir: PortalDirectory,
    client: PortalClient,
    card: Card,
    processing: bool,
    toast: Option<(Level, String)>,

    username: form::Value<String>,
    password: form::Value<String>,
    remember: bool,

    fullname: form::Value<String>,
    signup_email: form::Value<String>,
    signup_password: form::Value<String>,

    otp: OtpSession,
    code: form::Value<String>,

    forgot_step: ForgotStep,
    forgot_email: form::Value<String>,
    forgot_code: form::Value<String>,
    new_password: form::Value<String>,
}

fn username_input_id() -> text_input::Id {
    text_input::Id::new("login-username")
}

impl LoginPage {
    pub fn new(
        datadir: PortalDirectory,
        config: &Config,
        notice: Option<Notice>,
    ) -> (Self, Task<Message>) {
        let settings = Settings::load_or_default(&datadir).unwrap_or_default();

        let mut username = form::Value::default();
        let remember = settings.remember_username.is_some();
        if let Some(saved) = &settings.remember_username {
            username.value = saved.clone();
        }

        // An interrupted signup drops the user back on the code entry.
        let (card, otp) = match &settings.pending_signup_email {
            Some(email) => (Card::SignupOtp, OtpSession::with_email(email.clone())),
            None => (Card::Login, OtpSession::new()),
        };

        let toast = notice.map(|n| match n {
            Notice::Offline => (
                Level::Error,
                "Could not reach the server. Please try again.".to_string(),
            ),
            Notice::SessionExpired => (
                Level::Info,
                "Your session has expired. Please log in again.".to_string(),
            ),
        });

        (
            Self {
                datadir,
                client: PortalClient::new(config.api_url()),
                card,
                processing: false,
                toast,
                username,
                password: form::Value::default(),
                remember,
                fullname: form::Value::default(),
                signup_email: form::Value::default(),
                signup_password: form::Value::default(),
                otp,
                code: form::Value::default(),
                forgot_step: ForgotStep::Email,
                forgot_email: form::Value::default(),
                forgot_code: form::Value::default(),
                new_password: form::Value::default(),
            },
            text_input::focus(username_input_id()),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.card == Card::SignupOtp && self.otp.is_counting() {
            iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view) => self.on_view(view),
            Message::LoggedIn(res) => {
                self.processing = false;
                match res {
                    Ok(credential) => {
                        let mut settings =
                            Settings::load_or_default(&self.datadir).unwrap_or_default();
                        let mut cookies =
                            CookieJar::from_file(&self.datadir).unwrap_or_default();
                        session::persist_credential(&credential, &mut settings, &mut cookies);
                        if let Err(e) = settings.to_file(&self.datadir) {
                            warn!("Failed to persist the credential: {}", e);
                        }
                        if let Err(e) = cookies.to_file(&self.datadir) {
                            warn!("Failed to persist the cookie jar: {}", e);
                        }
                        match Session::open(credential) {
                            Ok(session) => {
                                self.toast =
                                    Some((Level::Success, "Login successful!".to_string()));
                                Task::perform(async move { session }, |s| {
                                    Message::Run(Box::new(s))
                                })
                            }
                            Err(e) => {
                                warn!("Received an undecodable credential: {}", e);
                                let mut settings =
                                    Settings::load_or_default(&self.datadir).unwrap_or_default();
                                let mut cookies =
                                    CookieJar::from_file(&self.datadir).unwrap_or_default();
                                session::clear_credential(&mut settings, &mut cookies);
                                let _ = settings.to_file(&self.datadir);
                                let _ = cookies.to_file(&self.datadir);
                                self.toast = Some((
                                    Level::Error,
                                    "An error occurred. Please try again.".to_string(),
                                ));
                                Task::none()
                            }
                        }
                    }
                    Err(e) => {
                        self.toast = Some((Level::Error, e.to_string()));
                        Task::none()
                    }
                }
            }
            Message::Registered(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        let email = self.signup_email.value.clone();
                        let mut settings =
                            Settings::load_or_default(&self.datadir).unwrap_or_default();
                        settings.pending_signup_email = Some(email.clone());
                        if let Err(e) = settings.to_file(&self.datadir) {
                            warn!("Failed to persist the pending signup email: {}", e);
                        }
                        self.otp = OtpSession::with_email(email);
                        self.otp.sent();
                        self.code = form::Value::default();
                        self.card = Card::SignupOtp;
                        self.toast =
                            Some((Level::Success, "OTP sent to your email!".to_string()));
                    }
                    Err(e) => {
                        self.toast = Some((Level::Error, e.to_string()));
                    }
                }
                Task::none()
            }
            Message::OtpVerified(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.otp.verified();
                        let mut settings =
                            Settings::load_or_default(&self.datadir).unwrap_or_default();
                        settings.pending_signup_email = None;
                        if let Err(e) = settings.to_file(&self.datadir) {
                            warn!("Failed to clear the pending signup email: {}", e);
                        }
                        // The backend only issues tokens on login, so route
                        // the freshly verified user through it.
                        self.username.value = self.otp.email().to_string();
                        self.card = Card::Login;
                        self.toast =
                            Some((Level::Success, "OTP verified! Please log in.".to_string()));
                    }
                    Err(e) => {
                        self.toast = Some((Level::Error, e.to_string()));
                    }
                }
                Task::none()
            }
            Message::OtpResent(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.otp.sent();
                        self.code = form::Value::default();
                        self.toast = Some((
                            Level::Success,
                            "New OTP sent to your email!".to_string(),
                        ));
                    }
                    Err(e) => {
                        self.toast = Some((Level::Error, e.to_string()));
                    }
                }
                Task::none()
            }
            Message::ForgotRequested(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.forgot_step = ForgotStep::Code;
                        self.toast = Some((
                            Level::Success,
                            "Password reset OTP sent to your email.".to_string(),
                        ));
                    }
                    Err(e) => {
                        self.toast = Some((Level::Error, e.to_string()));
                    }
                }
                Task::none()
            }
            Message::ResetOtpVerified(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.forgot_step = ForgotStep::NewPassword;
                        self.toast = None;
                    }
                    Err(e) => {
                        self.toast = Some((Level::Error, e.to_string()));
                    }
                }
                Task::none()
            }
            Message::PasswordReset(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.username.value = self.forgot_email.value.clone();
                        self.forgot_step = ForgotStep::Email;
                        self.forgot_code = form::Value::default();
                        self.new_password = form::Value::default();
                        self.card = Card::Login;
                        self.toast = Some((
                            Level::Success,
                            "Password reset successful! You can login now.".to_string(),
                        ));
                    }
                    Err(e) => {
                        self.toast = Some((Level::Error, e.to_string()));
                    }
                }
                Task::none()
            }
            Message::Tick => {
                if self.otp.tick() {
                    self.toast = Some((
                        Level::Error,
                        "OTP has expired. Please request a new one.".to_string(),
                    ));
                }
                Task::none()
            }
            Message::Run(_) => Task::none(),
        }
    }

    fn on_view(&mut self, message: ViewMessage) -> Task<Message> {
        match message {
            ViewMessage::ShowSignup => {
                self.card = Card::Signup;
                self.toast = None;
            }
            ViewMessage::ShowLogin => {
                self.card = Card::Login;
                self.toast = None;
            }
            ViewMessage::ShowForgot => {
                self.card = Card::Forgot;
                self.forgot_step = ForgotStep::Email;
                self.toast = None;
            }
            ViewMessage::ForgotEmailEdited(value) => {
                self.forgot_email.value = value.trim().to_string();
                self.forgot_email.valid = true;
            }
            ViewMessage::ForgotCodeEdited(value) => {
                self.forgot_code.value = value.trim().to_string();
                self.forgot_code.valid = true;
            }
            ViewMessage::NewPasswordEdited(value) => {
                self.new_password.value = value;
                self.new_password.valid = true;
            }
            ViewMessage::SubmitForgot => return self.submit_forgot(),
            ViewMessage::UsernameEdited(value) => {
                self.username.value = value;
                self.username.valid = true;
            }
            ViewMessage::PasswordEdited(value) => {
                self.password.value = value;
                self.password.valid = true;
            }
            ViewMessage::RememberToggled(checked) => {
                self.remember = checked;
            }
            ViewMessage::FullnameEdited(value) => {
                self.fullname.value = value;
                self.fullname.valid = true;
            }
            ViewMessage::EmailEdited(value) => {
                self.signup_email.value = value.trim().to_string();
                self.signup_email.valid = true;
            }
            ViewMessage::SignupPasswordEdited(value) => {
                self.signup_password.value = value;
                self.signup_password.valid = true;
            }
            ViewMessage::CodeEdited(value) => {
                self.code.value = value.trim().to_string();
                self.code.valid = true;
            }
            ViewMessage::SubmitLogin => return self.submit_login(),
            ViewMessage::SubmitSignup => return self.submit_signup(),
            ViewMessage::VerifyCode => return self.verify_code(),
            ViewMessage::ResendCode => return self.resend_code(),
            ViewMessage::ContinueWithGoogle => {
                let url = self.client.oauth_entry_url();
                if let Err(e) = open::that(url) {
                    warn!("Failed to open the browser: {}", e);
                    self.toast = Some((
                        Level::Error,
                        "Failed to open your browser.".to_string(),
                    ));
                } else {
                    self.toast = Some((
                        Level::Info,
                        "Continue in your browser, then come back here.".to_string(),
                    ));
                }
            }
        }
        Task::none()
    }

    fn submit_login(&mut self) -> Task<Message> {
        self.username.valid = !self.username.value.trim().is_empty();
        self.password.valid = !self.password.value.is_empty();
        if !self.username.valid || !self.password.valid {
            return Task::none();
        }

        // Remember me saves or removes the username before the call.
        let mut settings = Settings::load_or_default(&self.datadir).unwrap_or_default();
        settings.remember_username = if self.remember {
            Some(self.username.value.trim().to_string())
        } else {
            None
        };
        if let Err(e) = settings.to_file(&self.datadir) {
            warn!("Failed to update the settings store: {}", e);
        }

        self.processing = true;
        self.toast = None;
        let client = self.client.clone();
        let username = self.username.value.trim().to_string();
        let password = self.password.value.clone();
        Task::perform(
            async move { client.login(&username, &password).await },
            Message::LoggedIn,
        )
    }

    fn submit_signup(&mut self) -> Task<Message> {
        self.fullname.valid = !self.fullname.value.trim().is_empty();
        self.signup_email.valid = !self.signup_email.value.is_empty()
            && email_address::EmailAddress::parse_with_options(
                &self.signup_email.value,
                email_address::Options::default().with_required_tld(),
            )
            .is_ok();
        self.signup_password.valid = !self.signup_password.value.is_empty();
        if !self.fullname.valid || !self.signup_email.valid || !self.signup_password.valid {
            return Task::none();
        }

        self.processing = true;
        self.toast = None;
        let client = self.client.clone();
        let fullname = self.fullname.value.trim().to_string();
        let email = self.signup_email.value.clone();
        let password = self.signup_password.value.clone();
        Task::perform(
            async move { client.register(&fullname, &email, &password).await },
            Message::Registered,
        )
    }

    fn verify_code(&mut self) -> Task<Message> {
        if self.code.value.len() != OTP_CODE_LEN {
            self.code.valid = false;
            self.toast = Some((Level::Error, "OTP must be 6 digits".to_string()));
            return Task::none();
        }
        self.processing = true;
        self.toast = None;
        let client = self.client.clone();
        let email = self.otp.email().to_string();
        let code = self.code.value.clone();
        Task::perform(
            async move { client.verify_signup_otp(&email, &code).await },
            Message::OtpVerified,
        )
    }

    fn submit_forgot(&mut self) -> Task<Message> {
        let client = self.client.clone();
        match self.forgot_step {
            ForgotStep::Email => {
                self.forgot_email.valid = !self.forgot_email.value.is_empty()
                    && email_address::EmailAddress::parse_with_options(
                        &self.forgot_email.value,
                        email_address::Options::default().with_required_tld(),
                    )
                    .is_ok();
                if !self.forgot_email.valid {
                    return Task::none();
                }
                self.processing = true;
                self.toast = None;
                let email = self.forgot_email.value.clone();
                Task::perform(
                    async move { client.forgot_password(&email).await },
                    Message::ForgotRequested,
                )
            }
            ForgotStep::Code => {
                if self.forgot_code.value.len() != OTP_CODE_LEN {
                    self.forgot_code.valid = false;
                    self.toast = Some((Level::Error, "OTP must be 6 digits".to_string()));
                    return Task::none();
                }
                self.processing = true;
                self.toast = None;
                let email = self.forgot_email.value.clone();
                let code = self.forgot_code.value.clone();
                Task::perform(
                    async move { client.verify_reset_otp(&email, &code).await },
                    Message::ResetOtpVerified,
                )
            }
            ForgotStep::NewPassword => {
                self.new_password.valid = !self.new_password.value.is_empty();
                if !self.new_password.valid {
                    return Task::none();
                }
                self.processing = true;
                self.toast = None;
                let email = self.forgot_email.value.clone();
                let password = self.new_password.value.clone();
                Task::perform(
                    async move { client.reset_password(&email, &password).await },
                    Message::PasswordReset,
                )
            }
        }
    }

    fn resend_code(&mut self) -> Task<Message> {
        self.processing = true;
        self.toast = None;
        let client = self.client.clone();
        let email = self.otp.email().to_string();
        Task::perform(
            async move { client.resend_signup_otp(&email).await },
            Message::OtpResent,
        )
    }

    pub fn view(&self) -> Element<Message> {
        view::login_page(
            self.card,
            self.toast.as_ref(),
            self.processing,
            &self.username,
            &self.password,
            self.remember,
            &self.fullname,
            &self.signup_email,
            &self.signup_password,
            &self.otp,
            &self.code,
            self.forgot_step,
            &self.forgot_email,
            &self.forgot_code,
            &self.new_password,
        )
        .map(Message::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::otp::OtpState;

    fn page() -> LoginPage {
        let datadir = PortalDirectory::new(std::path::PathBuf::from("/nonexistent/campusqa"));
        LoginPage::new(datadir, &Config::default(), None).0
    }

    #[test]
    fn empty_login_is_blocked_locally() {
        let mut page = page();
        let _ = page.update(Message::View(ViewMessage::SubmitLogin));
        assert!(!page.username.valid);
        assert!(!page.password.valid);
        assert!(!page.processing);
    }

    #[test]
    fn signup_email_validation() {
        let mut page = page();
        let _ = page.update(Message::View(ViewMessage::FullnameEdited(
            "Jane Doe".to_string(),
        )));
        let _ = page.update(Message::View(ViewMessage::EmailEdited(
            "not-an-email".to_string(),
        )));
        let _ = page.update(Message::View(ViewMessage::SignupPasswordEdited(
            "hunter2".to_string(),
        )));
        let _ = page.update(Message::View(ViewMessage::SubmitSignup));
        assert!(!page.signup_email.valid);
        assert!(!page.processing);
    }

    #[test]
    fn registration_enters_the_code_entry_with_a_countdown() {
        let mut page = page();
        page.signup_email.value = "jane@example.com".to_string();
        let _ = page.update(Message::Registered(Ok(())));
        assert_eq!(page.card, Card::SignupOtp);
        assert!(page.otp.is_counting());
        assert_eq!(page.otp.email(), "jane@example.com");
    }

    #[test]
    fn short_code_is_rejected_locally() {
        let mut page = page();
        page.card = Card::SignupOtp;
        page.otp = OtpSession::with_email("jane@example.com".to_string());
        page.otp.sent();
        let _ = page.update(Message::View(ViewMessage::CodeEdited("123".to_string())));
        let _ = page.update(Message::View(ViewMessage::VerifyCode));
        assert!(!page.code.valid);
        assert!(!page.processing);
    }

    #[test]
    fn verified_code_returns_to_login() {
        let mut page = page();
        page.card = Card::SignupOtp;
        page.otp = OtpSession::with_email("jane@example.com".to_string());
        page.otp.sent();
        let _ = page.update(Message::OtpVerified(Ok(())));
        assert_eq!(page.card, Card::Login);
        assert_eq!(*page.otp.state(), OtpState::Verified);
        assert_eq!(page.username.value, "jane@example.com");
    }

    #[test]
    fn password_reset_walks_its_three_stages() {
        let mut page = page();
        let _ = page.update(Message::View(ViewMessage::ShowForgot));
        assert_eq!(page.card, Card::Forgot);
        assert_eq!(page.forgot_step, ForgotStep::Email);

        // a malformed email is rejected locally
        let _ = page.update(Message::View(ViewMessage::ForgotEmailEdited(
            "nope".to_string(),
        )));
        let _ = page.update(Message::View(ViewMessage::SubmitForgot));
        assert!(!page.forgot_email.valid);
        assert!(!page.processing);

        let _ = page.update(Message::View(ViewMessage::ForgotEmailEdited(
            "jane@example.com".to_string(),
        )));
        let _ = page.update(Message::View(ViewMessage::SubmitForgot));
        assert!(page.processing);
        let _ = page.update(Message::ForgotRequested(Ok(())));
        assert_eq!(page.forgot_step, ForgotStep::Code);

        let _ = page.update(Message::View(ViewMessage::ForgotCodeEdited(
            "123456".to_string(),
        )));
        let _ = page.update(Message::View(ViewMessage::SubmitForgot));
        let _ = page.update(Message::ResetOtpVerified(Ok(())));
        assert_eq!(page.forgot_step, ForgotStep::NewPassword);

        let _ = page.update(Message::View(ViewMessage::NewPasswordEdited(
            "hunter2".to_string(),
        )));
        let _ = page.update(Message::View(ViewMessage::SubmitForgot));
        let _ = page.update(Message::PasswordReset(Ok(())));
        assert_eq!(page.card, Card::Login);
        assert_eq!(page.username.value, "jane@example.com");
    }

    #[test]
    fn expiry_disables_the_countdown() {
        let mut page = page();
        page.card = Card::SignupOtp;
        page.otp = OtpSession::with_email("jane@example.com".to_string());
        page.otp.sent();
        for _ in 0..crate::session::otp::OTP_VALIDITY.as_secs() {
            let _ = page.update(Message::Tick);
        }
        assert!(page.otp.is_expired());
        assert!(matches!(page.toast, Some((Level::Error, _))));
    }
}
