pub mod designation;
pub mod general;
pub mod personal;

pub use designation::Designation;
pub use general::GeneralProfile;
pub use personal::PersonalInfo;

use iced::{Subscription, Task};

use campusqa_ui::{
    component::{button, card, text::*},
    widget::{Column, Container, Element},
};
use iced::{Alignment, Length};

use crate::setup::{context::Context, message::Message, view};

/// One step of the profile wizard. Exactly one step is visible at a time;
/// a fixed share of the progress bar belongs to each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    PersonalInfo,
    Designation,
    GeneralProfile,
    Success,
}

impl StepId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal information",
            Self::Designation => "Designation",
            Self::GeneralProfile => "General profile",
            Self::Success => "All done",
        }
    }

    /// The progress indicator is a deterministic function of the step.
    pub fn progress(&self) -> f32 {
        match self {
            Self::PersonalInfo => 33.0,
            Self::Designation => 66.0,
            Self::GeneralProfile => 100.0,
            Self::Success => 100.0,
        }
    }
}

pub trait Step {
    fn id(&self) -> StepId;
    fn update(&mut self, _message: Message) -> Task<Message> {
        Task::none()
    }
    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }
    fn view(&self) -> Element<Message>;

    fn load_context(&mut self, _ctx: &Context) {}
    /// Ran when the step becomes the visible one; moves the input focus on
    /// the next UI tick.
    fn load(&self) -> Task<Message> {
        Task::none()
    }
    fn apply(&mut self, _ctx: &mut Context) -> bool {
        true
    }
}

/// Terminal step: no outgoing transition except leaving the page.
pub struct Success {}

impl Success {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Success {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Success> for Box<dyn Step> {
    fn from(s: Success) -> Box<dyn Step> {
        Box::new(s)
    }
}

impl Step for Success {
    fn id(&self) -> StepId {
        StepId::Success
    }

    fn view(&self) -> Element<Message> {
        view::step_frame(
            StepId::Success,
            Container::new(card::simple(
                Column::new()
                    .spacing(20)
                    .align_x(Alignment::Center)
                    .push(h3("Profile setup complete!"))
                    .push(
                        text("Your profile is ready. Jump into the forum and ask your first question.")
                            .style(campusqa_ui::theme::text::secondary),
                    )
                    .push(
                        button::primary("Go to the forum")
                            .width(Length::Fixed(250.0))
                            .on_press(Message::GoHome),
                    ),
            ))
            .max_width(600)
            .into(),
        )
    }
}
