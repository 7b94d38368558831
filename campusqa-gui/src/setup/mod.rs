//! The profile-setup wizard: a linear sequence of steps, each submitted
//! to the backend on its own, with a fixed progress share per step.

pub mod context;
pub mod message;
pub mod step;
pub mod view;

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::{Subscription, Task};
use tracing::warn;

use campusqa_ui::component::form;
use campusqa_ui::widget::Element;

pub use context::Context;
pub use message::Message;

use crate::{
    config::Config,
    session::Session,
    setup::{
        message::{DesignationMessage, GeneralMessage, PersonalMessage, PhotoMessage},
        step::{Designation, GeneralProfile, PersonalInfo, Step, StepId, Success},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

pub struct Setup {
    pub context: Context,
    steps: Vec<Box<dyn Step>>,
    current: usize,
    notice: Option<(Level, String)>,

    photo_path: form::Value<String>,
    photo_processing: bool,
}

impl Setup {
    pub fn new(
        config: Config,
        session: Session,
        offline: bool,
        welcome: bool,
    ) -> (Self, Task<Message>) {
        let context = Context::new(config.clone(), session, offline);
        let client = context.client.clone();
        let user_id = context.session.user_id().clone();

        let steps: Vec<Box<dyn Step>> = vec![
            PersonalInfo::new(client.clone(), user_id.clone()).into(),
            Designation::new(client.clone(), user_id.clone(), config).into(),
            GeneralProfile::new(client, user_id).into(),
            Success::new().into(),
        ];

        let notice = if offline {
            Some((
                Level::Info,
                "Connected in offline mode. Changes will sync when connection is restored."
                    .to_string(),
            ))
        } else if welcome {
            Some((
                Level::Info,
                "Welcome! Please complete your profile setup.".to_string(),
            ))
        } else {
            None
        };

        let setup = Setup {
            context,
            steps,
            current: 0,
            notice,
            photo_path: form::Value::default(),
            photo_processing: false,
        };

        let mut tasks = vec![setup.steps[0].load()];
        if !offline {
            let client = setup.context.client.clone();
            tasks.push(Task::perform(
                async move { client.get_profile_data().await },
                Message::Loaded,
            ));
        }
        (setup, Task::batch(tasks))
    }

    pub fn current_step(&self) -> StepId {
        self.steps[self.current].id()
    }

    /// Shows the target step: exactly one step is visible at a time, the
    /// progress indicator follows it and the input focus moves to its
    /// first field on the next UI tick.
    fn goto(&mut self, index: usize) -> Task<Message> {
        self.current = index.min(self.steps.len() - 1);
        let context = self.context.clone();
        let step = &mut self.steps[self.current];
        step.load_context(&context);
        step.load()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.steps.iter().map(|step| step.subscription()))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Save outcomes drive the page-level notification.
        match &message {
            Message::Personal(PersonalMessage::Saved(res)) => {
                self.notice = Some(match res {
                    Ok(()) => (
                        Level::Success,
                        "Personal information saved successfully!".to_string(),
                    ),
                    Err(e) => (Level::Error, e.to_string()),
                });
            }
            Message::Designation(DesignationMessage::Saved(res)) => {
                self.notice = Some(match res {
                    Ok(()) => (
                        Level::Success,
                        "Designation information saved successfully!".to_string(),
                    ),
                    Err(e) => (Level::Error, e.to_string()),
                });
            }
            Message::General(GeneralMessage::Saved(res)) => {
                self.notice = Some(match res {
                    Ok(()) => (Level::Success, "Profile setup complete!".to_string()),
                    Err(e) => (Level::Error, e.to_string()),
                });
            }
            _ => {}
        }

        match message {
            Message::Select(index) => {
                // the terminal step has no outgoing transition
                if index < self.steps.len() - 1 && self.current_step() != StepId::Success {
                    return self.goto(index);
                }
                Task::none()
            }
            Message::Next => {
                if self.steps[self.current].apply(&mut self.context) {
                    return self.goto(self.current + 1);
                }
                Task::none()
            }
            Message::Skip => self.goto(self.current + 1),
            Message::Loaded(res) => {
                match res {
                    Ok(data) => {
                        self.context.personal = data.personal_info;
                        self.context.designation = data.designation;
                        self.context.general = data.general_profile;
                        let context = self.context.clone();
                        for step in &mut self.steps {
                            step.load_context(&context);
                        }
                    }
                    Err(e) => {
                        warn!("Failed to load the saved profile data: {}", e);
                    }
                }
                Task::none()
            }
            Message::Personal(_) => self.steps[0].update(message),
            Message::Designation(_) => self.steps[1].update(message),
            Message::General(_) => self.steps[2].update(message),
            Message::Photo(msg) => self.on_photo(msg),
            // handled by the upper level
            Message::GoHome => Task::none(),
        }
    }

    fn on_photo(&mut self, message: PhotoMessage) -> Task<Message> {
        match message {
            PhotoMessage::PathEdited(value) => {
                self.photo_path.value = value;
                self.photo_path.valid = true;
            }
            PhotoMessage::Upload => {
                let path = self.photo_path.value.trim().to_string();
                if path.is_empty() {
                    return Task::none();
                }
                self.photo_processing = true;
                let client = self.context.client.clone();
                return Task::perform(
                    async move {
                        let encoded = encode_photo(&path)?;
                        client
                            .save_profile_photo(&encoded)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |res| Message::Photo(PhotoMessage::Uploaded(res)),
                );
            }
            PhotoMessage::Uploaded(res) => {
                self.photo_processing = false;
                self.notice = Some(match res {
                    Ok(()) => (Level::Success, "Profile photo updated!".to_string()),
                    Err(e) => (Level::Error, e),
                });
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        view::layout(
            self.current_step(),
            self.notice.as_ref(),
            self.context.session.email(),
            &self.photo_path,
            self.photo_processing,
            self.steps[self.current].view(),
        )
    }
}

fn encode_photo(path: &str) -> Result<String, String> {
    const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

    let metadata = std::fs::metadata(path).map_err(|e| e.to_string())?;
    if metadata.len() > MAX_PHOTO_BYTES {
        return Err("File size should be less than 5MB".to_string());
    }
    let kind = match Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "png",
        Some("jpg") | Some("jpeg") => "jpeg",
        Some("gif") => "gif",
        Some("webp") => "webp",
        _ => return Err("Please select an image file".to_string()),
    };
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    Ok(format!(
        "data:image/{};base64,{}",
        kind,
        STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Claims, Credential, UserId};

    fn session() -> Session {
        Session {
            credential: Credential::new("tok".to_string()),
            claims: Claims {
                user_id: UserId::Number(42),
                email: Some("jane@example.com".to_string()),
            },
        }
    }

    fn setup() -> Setup {
        Setup::new(Config::default(), session(), true, false).0
    }

    #[test]
    fn wizard_starts_on_personal_info() {
        let setup = setup();
        assert_eq!(setup.current_step(), StepId::PersonalInfo);
        assert_eq!(setup.current_step().progress(), 33.0);
    }

    #[test]
    fn selector_revisits_any_form_step() {
        let mut setup = setup();
        let _ = setup.update(Message::Select(2));
        assert_eq!(setup.current_step(), StepId::GeneralProfile);
        assert_eq!(setup.current_step().progress(), 100.0);
        let _ = setup.update(Message::Select(1));
        assert_eq!(setup.current_step(), StepId::Designation);
        assert_eq!(setup.current_step().progress(), 66.0);
        // the terminal step cannot be selected
        let _ = setup.update(Message::Select(3));
        assert_eq!(setup.current_step(), StepId::Designation);
    }

    #[test]
    fn next_and_skip_advance_linearly() {
        let mut setup = setup();
        let _ = setup.update(Message::Next);
        assert_eq!(setup.current_step(), StepId::Designation);
        let _ = setup.update(Message::Skip);
        assert_eq!(setup.current_step(), StepId::GeneralProfile);
        let _ = setup.update(Message::Skip);
        assert_eq!(setup.current_step(), StepId::Success);
        // no transition past the terminal step
        let _ = setup.update(Message::Next);
        assert_eq!(setup.current_step(), StepId::Success);
        let _ = setup.update(Message::Select(0));
        assert_eq!(setup.current_step(), StepId::Success);
    }

    #[test]
    fn save_outcome_drives_the_notification() {
        let mut setup = setup();
        let _ = setup.update(Message::Personal(PersonalMessage::Saved(Ok(()))));
        assert!(matches!(setup.notice, Some((Level::Success, _))));
        let _ = setup.update(Message::Personal(PersonalMessage::Saved(Err(
            crate::services::portal::ApiError {
                http_status: None,
                message: "boom".to_string(),
            },
        ))));
        assert!(matches!(setup.notice, Some((Level::Error, _))));
    }

    #[test]
    fn offline_entry_shows_the_degraded_notice() {
        let setup = setup();
        assert!(matches!(setup.notice, Some((Level::Info, _))));
    }

    #[test]
    fn loaded_profile_prefills_the_context() {
        let mut setup = setup();
        let _ = setup.update(Message::Loaded(Ok(
            crate::services::portal::api::ProfileData {
                success: true,
                message: None,
                personal_info: None,
                designation: Some(crate::services::portal::api::Designation::Alumni {
                    graduation_year: 2019,
                    program: "mba".to_string(),
                    department: "finance".to_string(),
                    job_title: "Analyst".to_string(),
                    company_name: "Acme".to_string(),
                    linkedin: None,
                }),
                general_profile: None,
            },
        )));
        assert!(setup.context.designation.is_some());
    }

    #[test]
    fn photo_upload_requires_a_readable_file() {
        assert!(encode_photo("/nonexistent/photo.png").is_err());
    }
}
