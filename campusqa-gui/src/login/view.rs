use iced::{Alignment, Length};

use campusqa_ui::{
    color,
    component::{button, card, form, notification, text::*},
    widget::{CheckBox, Column, Container, Element, Row},
};

use super::{Card, ForgotStep, Level, ViewMessage};
use crate::session::otp::OtpSession;

const LOW_TIME_SECS: u64 = 30;

#[allow(clippy::too_many_arguments)]
pub fn login_page<'a>(
    current: Card,
    toast: Option<&'a (Level, String)>,
    processing: bool,
    username: &'a form::Value<String>,
    password: &'a form::Value<String>,
    remember: bool,
    fullname: &'a form::Value<String>,
    signup_email: &'a form::Value<String>,
    signup_password: &'a form::Value<String>,
    otp: &'a OtpSession,
    code: &'a form::Value<String>,
    forgot_step: ForgotStep,
    forgot_email: &'a form::Value<String>,
    forgot_code: &'a form::Value<String>,
    new_password: &'a form::Value<String>,
) -> Element<'a, ViewMessage> {
    let content = match current {
        Card::Login => login_card(processing, username, password, remember),
        Card::Signup => signup_card(processing, fullname, signup_email, signup_password),
        Card::SignupOtp => otp_card(processing, otp, code),
        Card::Forgot => forgot_card(processing, forgot_step, forgot_email, forgot_code, new_password),
    };

    let mut col = Column::new().spacing(20).align_x(Alignment::Center);
    if let Some((level, message)) = toast {
        col = col.push(toast_view(*level, message.clone()));
    }
    col = col
        .push(h2("CampusQA"))
        .push(Container::new(card::simple(content)).max_width(500));

    Container::new(col)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(30)
        .into()
}

fn toast_view<'a>(level: Level, message: String) -> Container<'a, ViewMessage> {
    match level {
        Level::Success => notification::success(message),
        Level::Error => notification::error(message, None),
        Level::Info => notification::info(message),
    }
}

fn login_card<'a>(
    processing: bool,
    username: &'a form::Value<String>,
    password: &'a form::Value<String>,
    remember: bool,
) -> Column<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .push(h4_bold("Sign in"))
        .push(
            form::Form::new_trimmed("Email or username", username, ViewMessage::UsernameEdited)
                .id(super::username_input_id())
                .warning("Please fill in all required fields")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new("Password", password, ViewMessage::PasswordEdited)
                .secure()
                .on_submit(ViewMessage::SubmitLogin)
                .warning("Please fill in all required fields")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            CheckBox::new("Remember me", remember).on_toggle(ViewMessage::RememberToggled),
        )
        .push(
            button::primary(if processing {
                "Logging you in..."
            } else {
                "Login"
            })
            .width(Length::Fill)
            .on_press_maybe(if processing {
                None
            } else {
                Some(ViewMessage::SubmitLogin)
            }),
        )
        .push(
            button::secondary("Continue with Google")
                .width(Length::Fill)
                .on_press_maybe(if processing {
                    None
                } else {
                    Some(ViewMessage::ContinueWithGoogle)
                }),
        )
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(text("Don't have an account?").style(campusqa_ui::theme::text::secondary))
                .push(button::link("Register").on_press(ViewMessage::ShowSignup))
                .push(button::link("Forgot password?").on_press(ViewMessage::ShowForgot)),
        )
}

fn forgot_card<'a>(
    processing: bool,
    step: ForgotStep,
    email: &'a form::Value<String>,
    code: &'a form::Value<String>,
    new_password: &'a form::Value<String>,
) -> Column<'a, ViewMessage> {
    let mut col = Column::new().spacing(20).push(h4_bold("Reset your password"));
    col = match step {
        ForgotStep::Email => col.push(
            form::Form::new_trimmed("Account email", email, ViewMessage::ForgotEmailEdited)
                .on_submit(ViewMessage::SubmitForgot)
                .warning("Please enter a valid email address")
                .size(P1_SIZE)
                .padding(10),
        ),
        ForgotStep::Code => col
            .push(
                Column::new()
                    .spacing(5)
                    .push(text("A reset OTP was sent to:").style(campusqa_ui::theme::text::secondary))
                    .push(text(&email.value)),
            )
            .push(
                form::Form::new_trimmed("6-digit code", code, ViewMessage::ForgotCodeEdited)
                    .on_submit(ViewMessage::SubmitForgot)
                    .warning("OTP must be 6 digits")
                    .size(P1_SIZE)
                    .padding(10),
            ),
        ForgotStep::NewPassword => col.push(
            form::Form::new("New password", new_password, ViewMessage::NewPasswordEdited)
                .secure()
                .on_submit(ViewMessage::SubmitForgot)
                .warning("Please fill in all required fields")
                .size(P1_SIZE)
                .padding(10),
        ),
    };
    col.push(
        button::primary(match (processing, step) {
            (true, _) => "Please wait...",
            (false, ForgotStep::Email) => "Send reset OTP",
            (false, ForgotStep::Code) => "Verify OTP",
            (false, ForgotStep::NewPassword) => "Reset password",
        })
        .width(Length::Fill)
        .on_press_maybe(if processing {
            None
        } else {
            Some(ViewMessage::SubmitForgot)
        }),
    )
    .push(
        Row::new()
            .spacing(5)
            .align_y(Alignment::Center)
            .push(button::link("Back to login").on_press(ViewMessage::ShowLogin)),
    )
}

fn signup_card<'a>(
    processing: bool,
    fullname: &'a form::Value<String>,
    email: &'a form::Value<String>,
    password: &'a form::Value<String>,
) -> Column<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .push(h4_bold("Create your account"))
        .push(
            form::Form::new("Full name", fullname, ViewMessage::FullnameEdited)
                .warning("Please fill in all required fields")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new_trimmed("Email", email, ViewMessage::EmailEdited)
                .warning("Please enter a valid email address")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new("Password", password, ViewMessage::SignupPasswordEdited)
                .secure()
                .on_submit(ViewMessage::SubmitSignup)
                .warning("Please fill in all required fields")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            button::primary(if processing {
                "Sending OTP..."
            } else {
                "Register"
            })
            .width(Length::Fill)
            .on_press_maybe(if processing {
                None
            } else {
                Some(ViewMessage::SubmitSignup)
            }),
        )
        .push(
            button::secondary("Continue with Google")
                .width(Length::Fill)
                .on_press_maybe(if processing {
                    None
                } else {
                    Some(ViewMessage::ContinueWithGoogle)
                }),
        )
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(text("Already have an account?").style(campusqa_ui::theme::text::secondary))
                .push(button::link("Login").on_press(ViewMessage::ShowLogin)),
        )
}

fn otp_card<'a>(
    processing: bool,
    otp: &'a OtpSession,
    code: &'a form::Value<String>,
) -> Column<'a, ViewMessage> {
    let code_entry_enabled = otp.is_counting() && !processing;
    let timer = otp.remaining().map(|remaining| {
        let display = text(otp.format_remaining());
        if remaining < LOW_TIME_SECS {
            display.color(color::RED)
        } else {
            display
        }
    });

    Column::new()
        .spacing(20)
        .push(h4_bold("Verify your email"))
        .push(
            Column::new()
                .spacing(5)
                .push(text("An OTP was sent to:").style(campusqa_ui::theme::text::secondary))
                .push(text(otp.email())),
        )
        .push_maybe(timer)
        .push(if code_entry_enabled {
            form::Form::new_trimmed("6-digit code", code, ViewMessage::CodeEdited)
                .on_submit(ViewMessage::VerifyCode)
                .warning("OTP must be 6 digits")
                .size(P1_SIZE)
                .padding(10)
        } else {
            form::Form::new_disabled("6-digit code", code)
        })
        .push_maybe(if otp.is_expired() {
            Some(
                text("OTP has expired. Please request a new one.")
                    .style(campusqa_ui::theme::text::error),
            )
        } else {
            None
        })
        .push(
            button::primary(if processing {
                "Verifying..."
            } else {
                "Verify OTP"
            })
            .width(Length::Fill)
            .on_press_maybe(if code_entry_enabled {
                Some(ViewMessage::VerifyCode)
            } else {
                None
            }),
        )
        .push(
            button::secondary("Resend OTP")
                .width(Length::Fill)
                .on_press_maybe(if processing || otp.is_counting() {
                    None
                } else {
                    Some(ViewMessage::ResendCode)
                }),
        )
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(button::link("Back to login").on_press(ViewMessage::ShowLogin)),
        )
}
