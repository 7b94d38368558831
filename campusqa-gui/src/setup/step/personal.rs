use iced::widget::text_input;
use iced::Task;

use campusqa_ui::component::form;
use campusqa_ui::widget::Element;

use crate::{
    services::portal::{api, PortalClient},
    session::UserId,
    setup::{
        context::Context,
        message::{Message, PersonalMessage},
        step::{Step, StepId},
        view,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().find(|g| g.slug() == slug).copied()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
        }
    }
}

pub struct PersonalInfo {
    client: PortalClient,
    user_id: UserId,

    full_name: form::Value<String>,
    username: form::Value<String>,
    email: form::Value<String>,
    phone: form::Value<String>,
    age: form::Value<String>,
    gender: Option<Gender>,

    processing: bool,
    warning: Option<String>,
}

pub fn full_name_input_id() -> text_input::Id {
    text_input::Id::new("personal-full-name")
}

impl PersonalInfo {
    pub fn new(client: PortalClient, user_id: UserId) -> Self {
        Self {
            client,
            user_id,
            full_name: form::Value::default(),
            username: form::Value::default(),
            email: form::Value::default(),
            phone: form::Value::default(),
            age: form::Value::default(),
            gender: None,
            processing: false,
            warning: None,
        }
    }

    fn validate(&self) -> Option<String> {
        if self.full_name.value.trim().is_empty()
            || self.username.value.trim().is_empty()
            || self.email.value.trim().is_empty()
            || self.age.value.trim().is_empty()
            || self.gender.is_none()
        {
            return Some("Please fill in all required fields".to_string());
        }
        if email_address::EmailAddress::parse_with_options(
            self.email.value.trim(),
            email_address::Options::default().with_required_tld(),
        )
        .is_err()
        {
            return Some("Please enter a valid email address".to_string());
        }
        match self.age.value.trim().parse::<i64>() {
            Ok(age) if (1..=120).contains(&age) => {}
            _ => return Some("Please enter a valid age between 1 and 120".to_string()),
        }
        None
    }

    fn serialized(&self) -> Option<api::PersonalInfo> {
        if self.validate().is_some() {
            return None;
        }
        let phone = self.phone.value.trim();
        Some(api::PersonalInfo {
            full_name: self.full_name.value.trim().to_string(),
            username: self.username.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            phone: if phone.is_empty() {
                None
            } else {
                Some(phone.to_string())
            },
            age: self.age.value.trim().parse().unwrap_or_default(),
            gender: self
                .gender
                .map(|g| g.slug().to_string())
                .unwrap_or_default(),
        })
    }

    fn submit(&mut self) -> Task<Message> {
        if let Some(warning) = self.validate() {
            // Validation errors never reach the network.
            self.warning = Some(warning);
            return Task::none();
        }
        let info = match self.serialized() {
            Some(info) => info,
            None => return Task::none(),
        };
        self.warning = None;
        self.processing = true;
        let client = self.client.clone();
        let user_id = self.user_id.clone();
        Task::perform(
            async move { client.save_personal_info(&user_id, &info).await },
            |res| Message::Personal(PersonalMessage::Saved(res)),
        )
    }
}

impl From<PersonalInfo> for Box<dyn Step> {
    fn from(s: PersonalInfo) -> Box<dyn Step> {
        Box::new(s)
    }
}

impl Step for PersonalInfo {
    fn id(&self) -> StepId {
        StepId::PersonalInfo
    }

    fn load_context(&mut self, ctx: &Context) {
        if let Some(saved) = &ctx.personal {
            self.full_name.value = saved.full_name.clone();
            self.username.value = saved.username.clone();
            self.email.value = saved.email.clone();
            self.phone.value = saved.phone.clone().unwrap_or_default();
            self.age.value = saved.age.to_string();
            self.gender = Gender::from_slug(&saved.gender);
        }
    }

    fn load(&self) -> Task<Message> {
        text_input::focus(full_name_input_id())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Personal(message) = message {
            match message {
                PersonalMessage::FullNameEdited(value) => {
                    self.full_name.value = value;
                    self.full_name.valid = true;
                }
                PersonalMessage::UsernameEdited(value) => {
                    self.username.value = value;
                    self.username.valid = true;
                }
                PersonalMessage::EmailEdited(value) => {
                    self.email.value = value;
                    self.email.valid = true;
                }
                PersonalMessage::PhoneEdited(value) => {
                    self.phone.value = value;
                }
                PersonalMessage::AgeEdited(value) => {
                    self.age.value = value;
                    self.age.valid = true;
                }
                PersonalMessage::GenderSelected(gender) => {
                    self.gender = Some(gender);
                }
                PersonalMessage::Submit => return self.submit(),
                PersonalMessage::Saved(res) => {
                    // The submit control is restored on every outcome.
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            self.warning = None;
                            return Task::perform(async {}, |_| Message::Next);
                        }
                        Err(e) => {
                            self.warning = Some(e.to_string());
                        }
                    }
                }
            }
        }
        Task::none()
    }

    fn apply(&mut self, ctx: &mut Context) -> bool {
        if let Some(info) = self.serialized() {
            ctx.personal = Some(info);
        }
        true
    }

    fn view(&self) -> Element<Message> {
        view::personal_info(
            self.processing,
            self.warning.as_deref(),
            &self.full_name,
            &self.username,
            &self.email,
            &self.phone,
            &self.age,
            self.gender,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step() -> PersonalInfo {
        PersonalInfo::new(
            PortalClient::new("http://localhost:0".to_string()),
            UserId::Number(42),
        )
    }

    fn filled() -> PersonalInfo {
        let mut step = step();
        step.full_name.value = "Jane Doe".to_string();
        step.username.value = "jane".to_string();
        step.email.value = "jane@example.com".to_string();
        step.age.value = "21".to_string();
        step.gender = Some(Gender::Female);
        step
    }

    #[test]
    fn empty_fields_block_submission() {
        let mut step = step();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please fill in all required fields")
        );
        assert!(!step.processing);
    }

    #[test]
    fn email_shape_is_checked() {
        let mut step = filled();
        step.email.value = "jane@nodomain".to_string();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(!step.processing);
    }

    #[test]
    fn out_of_range_age_never_reaches_the_backend() {
        let mut step = filled();
        step.age.value = "150".to_string();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please enter a valid age between 1 and 120")
        );
        assert!(!step.processing);

        step.age.value = "0".to_string();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please enter a valid age between 1 and 120")
        );

        step.age.value = "abc".to_string();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please enter a valid age between 1 and 120")
        );
    }

    #[test]
    fn valid_submission_disables_the_control() {
        let mut step = filled();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        assert!(step.processing);
        assert_eq!(step.warning, None);
    }

    #[test]
    fn failed_save_restores_the_control_and_stays() {
        let mut step = filled();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        let _ = step.update(Message::Personal(PersonalMessage::Saved(Err(
            crate::services::portal::ApiError {
                http_status: None,
                message: "Failed to save personal info".to_string(),
            },
        ))));
        assert!(!step.processing);
        assert_eq!(
            step.warning.as_deref(),
            Some("Failed to save personal info")
        );
    }

    #[test]
    fn successful_save_restores_the_control() {
        let mut step = filled();
        let _ = step.update(Message::Personal(PersonalMessage::Submit));
        let _ = step.update(Message::Personal(PersonalMessage::Saved(Ok(()))));
        assert!(!step.processing);
        assert_eq!(step.warning, None);
    }

    #[test]
    fn optional_phone_serializes_as_absent() {
        let step = filled();
        let info = step.serialized().unwrap();
        assert_eq!(info.phone, None);
        assert_eq!(info.age, 21);
        assert_eq!(info.gender, "female");
    }
}
