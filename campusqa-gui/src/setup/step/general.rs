use iced::widget::text_input;
use iced::Task;

use campusqa_ui::component::form;
use campusqa_ui::widget::Element;

use crate::{
    services::portal::{api, PortalClient},
    session::UserId,
    setup::{
        context::Context,
        message::{GeneralMessage, Message},
        step::{Step, StepId},
        view,
    },
};

const MIN_BIO_LEN: usize = 10;

/// Ordered set of free-text chips. Entries are only removed by the user;
/// uniqueness is not enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    tags: Vec<String>,
    pub input: form::Value<String>,
}

impl TagSet {
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Turns the current raw input into a chip, if any.
    pub fn push_input(&mut self) {
        let tag = self.input.value.trim().to_string();
        if !tag.is_empty() {
            self.tags.push(tag);
            self.input.value.clear();
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    /// Non-empty considering either existing chips or raw input text.
    pub fn has_content(&self) -> bool {
        !self.tags.is_empty() || !self.input.value.trim().is_empty()
    }

    /// Chips win over raw input, joined the way the backend stores them.
    pub fn serialized(&self) -> String {
        if !self.tags.is_empty() {
            self.tags.join(", ")
        } else {
            self.input.value.trim().to_string()
        }
    }

    /// Rebuilds chips from the backend's comma-separated form.
    pub fn load(&mut self, joined: &str) {
        self.tags = joined
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect();
        self.input = form::Value::default();
    }
}

pub struct GeneralProfile {
    client: PortalClient,
    user_id: UserId,

    pub(crate) bio: form::Value<String>,
    pub(crate) skills: TagSet,
    pub(crate) interests: TagSet,
    pub(crate) linkedin: form::Value<String>,
    pub(crate) github: form::Value<String>,
    pub(crate) portfolio: form::Value<String>,

    pub(crate) processing: bool,
    pub(crate) warning: Option<String>,
}

pub fn bio_input_id() -> text_input::Id {
    text_input::Id::new("general-short-bio")
}

impl GeneralProfile {
    pub fn new(client: PortalClient, user_id: UserId) -> Self {
        Self {
            client,
            user_id,
            bio: form::Value::default(),
            skills: TagSet::default(),
            interests: TagSet::default(),
            linkedin: form::Value::default(),
            github: form::Value::default(),
            portfolio: form::Value::default(),
            processing: false,
            warning: None,
        }
    }

    fn validate(&self) -> Option<String> {
        if self.bio.value.trim().is_empty()
            || !self.skills.has_content()
            || !self.interests.has_content()
        {
            return Some(
                "Please fill in all required fields (Bio, Skills, Interests)".to_string(),
            );
        }
        if self.bio.value.trim().len() < MIN_BIO_LEN {
            return Some(
                "Please write a more detailed bio (at least 10 characters)".to_string(),
            );
        }
        None
    }

    fn serialized(&self) -> Option<api::GeneralProfile> {
        if self.validate().is_some() {
            return None;
        }
        Some(api::GeneralProfile {
            short_bio: self.bio.value.trim().to_string(),
            skills: self.skills.serialized(),
            interests: self.interests.serialized(),
            linkedin: blank_to_none(&self.linkedin.value),
            github: blank_to_none(&self.github.value),
            portfolio: blank_to_none(&self.portfolio.value),
        })
    }

    fn submit(&mut self) -> Task<Message> {
        if let Some(warning) = self.validate() {
            self.warning = Some(warning);
            return Task::none();
        }
        let profile = match self.serialized() {
            Some(profile) => profile,
            None => return Task::none(),
        };
        self.warning = None;
        self.processing = true;
        let client = self.client.clone();
        let user_id = self.user_id.clone();
        Task::perform(
            async move { client.save_general_profile(&user_id, &profile).await },
            |res| Message::General(GeneralMessage::Saved(res)),
        )
    }
}

impl From<GeneralProfile> for Box<dyn Step> {
    fn from(s: GeneralProfile) -> Box<dyn Step> {
        Box::new(s)
    }
}

impl Step for GeneralProfile {
    fn id(&self) -> StepId {
        StepId::GeneralProfile
    }

    fn load_context(&mut self, ctx: &Context) {
        if let Some(saved) = &ctx.general {
            self.bio.value = saved.short_bio.clone();
            self.skills.load(&saved.skills);
            self.interests.load(&saved.interests);
            self.linkedin.value = saved.linkedin.clone().unwrap_or_default();
            self.github.value = saved.github.clone().unwrap_or_default();
            self.portfolio.value = saved.portfolio.clone().unwrap_or_default();
        }
    }

    fn load(&self) -> Task<Message> {
        text_input::focus(bio_input_id())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::General(message) = message {
            match message {
                GeneralMessage::BioEdited(value) => {
                    self.bio.value = value;
                    self.bio.valid = true;
                }
                GeneralMessage::SkillInputEdited(value) => {
                    self.skills.input.value = value;
                    self.skills.input.valid = true;
                }
                GeneralMessage::SkillAdded => self.skills.push_input(),
                GeneralMessage::SkillRemoved(index) => self.skills.remove(index),
                GeneralMessage::InterestInputEdited(value) => {
                    self.interests.input.value = value;
                    self.interests.input.valid = true;
                }
                GeneralMessage::InterestAdded => self.interests.push_input(),
                GeneralMessage::InterestRemoved(index) => self.interests.remove(index),
                GeneralMessage::LinkedinEdited(value) => self.linkedin.value = value,
                GeneralMessage::GithubEdited(value) => self.github.value = value,
                GeneralMessage::PortfolioEdited(value) => self.portfolio.value = value,
                GeneralMessage::Submit => return self.submit(),
                GeneralMessage::Saved(res) => {
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
        if let Some(profile) = self.serialized() {
            ctx.general = Some(profile);
        }
        true
    }

    fn view(&self) -> Element<Message> {
        view::general_profile(self)
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step() -> GeneralProfile {
        GeneralProfile::new(
            PortalClient::new("http://localhost:0".to_string()),
            UserId::Number(42),
        )
    }

    #[test]
    fn chips_are_ordered_and_allow_duplicates() {
        let mut tags = TagSet::default();
        tags.input.value = "rust".to_string();
        tags.push_input();
        tags.input.value = "python".to_string();
        tags.push_input();
        tags.input.value = "rust".to_string();
        tags.push_input();
        assert_eq!(tags.tags(), ["rust", "python", "rust"]);

        tags.remove(0);
        assert_eq!(tags.tags(), ["python", "rust"]);
        // out of range removal is ignored
        tags.remove(10);
        assert_eq!(tags.tags(), ["python", "rust"]);
    }

    #[test]
    fn blank_input_makes_no_chip() {
        let mut tags = TagSet::default();
        tags.input.value = "   ".to_string();
        tags.push_input();
        assert!(tags.tags().is_empty());
        assert!(!tags.has_content());
    }

    #[test]
    fn raw_input_counts_as_content_and_serializes() {
        let mut tags = TagSet::default();
        tags.input.value = "rust".to_string();
        assert!(tags.has_content());
        assert_eq!(tags.serialized(), "rust");

        tags.push_input();
        tags.input.value = "ignored once chips exist".to_string();
        assert_eq!(tags.serialized(), "rust");
    }

    #[test]
    fn chips_reload_from_the_joined_form() {
        let mut tags = TagSet::default();
        tags.load("rust, python , , sql");
        assert_eq!(tags.tags(), ["rust", "python", "sql"]);
    }

    #[test]
    fn empty_required_fields_block_submission() {
        let mut step = step();
        let _ = step.update(Message::General(GeneralMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please fill in all required fields (Bio, Skills, Interests)")
        );
        assert!(!step.processing);
    }

    #[test]
    fn short_bio_blocks_submission() {
        let mut step = step();
        step.bio.value = "too short".to_string();
        step.skills.input.value = "rust".to_string();
        step.interests.input.value = "chess".to_string();
        let _ = step.update(Message::General(GeneralMessage::Submit));
        assert_eq!(
            step.warning.as_deref(),
            Some("Please write a more detailed bio (at least 10 characters)")
        );
    }

    #[test]
    fn valid_submission_serializes_chips_or_raw_input() {
        let mut step = step();
        step.bio.value = "I build compilers for fun.".to_string();
        step.skills.input.value = "rust".to_string();
        step.skills.push_input();
        step.skills.input.value = "llvm".to_string();
        step.skills.push_input();
        step.interests.input.value = "chess".to_string();

        let profile = step.serialized().unwrap();
        assert_eq!(profile.skills, "rust, llvm");
        assert_eq!(profile.interests, "chess");
        assert_eq!(profile.linkedin, None);

        let _ = step.update(Message::General(GeneralMessage::Submit));
        assert!(step.processing);
    }
}
