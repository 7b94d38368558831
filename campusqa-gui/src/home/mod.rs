//! The forum feed: questions, tag cloud, lazily fetched answers, votes
//! and new posts.

mod view;

use iced::Task;
use tracing::warn;

use campusqa_ui::component::form;
use campusqa_ui::widget::Element;

use crate::{
    config::Config,
    services::portal::{api, ApiError, PortalClient},
    session::Session,
};

pub const PLACEHOLDER_TITLE: &str = "Welcome to College Q&A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    QuestionsLoaded(Result<Vec<api::Question>, ApiError>),
    TagsLoaded(Result<Vec<api::TagCount>, ApiError>),
    AnswersLoaded(i64, Result<Vec<api::Answer>, ApiError>),
    Voted(i64, Result<api::VoteResult, ApiError>),
    QuestionPosted(Result<api::Question, ApiError>),
    AnswerPosted(i64, Result<api::Answer, ApiError>),
    // handled by the upper level
    GoProfile,
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    Refresh,
    ToggleAnswers(i64),
    Upvote(i64),
    Downvote(i64),
    OpenAsk,
    CloseAsk,
    AskTitleEdited(String),
    AskBodyEdited(String),
    AskTagsEdited(String),
    SubmitQuestion,
    AnswerEdited(i64, String),
    SubmitAnswer(i64),
    GoProfile,
}

pub struct QuestionCard {
    pub question: api::Question,
    pub expanded: bool,
    /// Fetched on first expansion only, cached afterwards.
    pub answers: Option<Vec<api::Answer>>,
    pub answers_loading: bool,
    pub answer_input: form::Value<String>,
    pub posting_answer: bool,
    pub voting: bool,
}

impl QuestionCard {
    fn new(question: api::Question) -> Self {
        Self {
            question,
            expanded: false,
            answers: None,
            answers_loading: false,
            answer_input: form::Value::default(),
            posting_answer: false,
            voting: false,
        }
    }

    /// The synthetic item shown when the backend is unreachable.
    pub fn is_placeholder(&self) -> bool {
        self.question.id == 0
    }
}

#[derive(Default)]
pub struct AskForm {
    pub open: bool,
    pub title: form::Value<String>,
    pub body: form::Value<String>,
    pub tags_input: form::Value<String>,
    pub processing: bool,
}

pub struct Home {
    session: Session,
    client: PortalClient,
    pub(crate) questions: Vec<QuestionCard>,
    pub(crate) tags: Vec<api::TagCount>,
    pub(crate) loading: bool,
    pub(crate) ask: AskForm,
    pub(crate) notice: Option<(Level, String)>,
}

fn placeholder_question() -> api::Question {
    api::Question {
        id: 0,
        title: PLACEHOLDER_TITLE.to_string(),
        body: "The forum could not be reached. Refresh once you are back online.".to_string(),
        author: "CampusQA".to_string(),
        created_at: chrono::DateTime::UNIX_EPOCH,
        tags: Vec::new(),
        upvotes: 0,
        downvotes: 0,
        answers_count: 0,
    }
}

impl Home {
    pub fn new(config: &Config, session: Session) -> (Self, Task<Message>) {
        let client = PortalClient::with_credential(config.api_url(), session.credential.clone());
        let home = Home {
            session,
            client: client.clone(),
            questions: Vec::new(),
            tags: Vec::new(),
            loading: true,
            ask: AskForm::default(),
            notice: None,
        };
        (home, load_feed(client))
    }

    pub fn user_email(&self) -> Option<&str> {
        self.session.email()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn card_mut(&mut self, id: i64) -> Option<&mut QuestionCard> {
        self.questions.iter_mut().find(|c| c.question.id == id)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view) => self.on_view(view),
            Message::QuestionsLoaded(res) => {
                self.loading = false;
                match res {
                    Ok(questions) => {
                        self.questions = questions.into_iter().map(QuestionCard::new).collect();
                    }
                    Err(e) => {
                        // The page never renders empty because of backend
                        // unavailability: exactly one synthetic item.
                        warn!("Failed to load the feed: {}", e);
                        self.questions = vec![QuestionCard::new(placeholder_question())];
                    }
                }
                Task::none()
            }
            Message::TagsLoaded(res) => {
                match res {
                    Ok(tags) => self.tags = tags,
                    Err(e) => warn!("Failed to load the tag cloud: {}", e),
                }
                Task::none()
            }
            Message::AnswersLoaded(id, res) => {
                if let Some(card) = self.card_mut(id) {
                    card.answers_loading = false;
                    match res {
                        Ok(answers) => card.answers = Some(answers),
                        Err(e) => {
                            card.expanded = false;
                            self.notice = Some((Level::Error, e.to_string()));
                        }
                    }
                }
                Task::none()
            }
            Message::Voted(id, res) => {
                if let Some(card) = self.card_mut(id) {
                    card.voting = false;
                    match res {
                        Ok(counts) => {
                            card.question.upvotes = counts.upvotes;
                            card.question.downvotes = counts.downvotes;
                        }
                        Err(e) => self.notice = Some((Level::Error, e.to_string())),
                    }
                }
                Task::none()
            }
            Message::QuestionPosted(res) => {
                self.ask.processing = false;
                match res {
                    Ok(question) => {
                        self.questions.insert(0, QuestionCard::new(question));
                        self.ask = AskForm::default();
                        self.notice = Some((Level::Success, "Question posted!".to_string()));
                    }
                    Err(e) => self.notice = Some((Level::Error, e.to_string())),
                }
                Task::none()
            }
            Message::AnswerPosted(id, res) => {
                if let Some(card) = self.card_mut(id) {
                    card.posting_answer = false;
                    match res {
                        Ok(answer) => {
                            if let Some(answers) = &mut card.answers {
                                answers.push(answer);
                            }
                            card.question.answers_count += 1;
                            card.answer_input = form::Value::default();
                        }
                        Err(e) => self.notice = Some((Level::Error, e.to_string())),
                    }
                }
                Task::none()
            }
            Message::GoProfile => Task::none(),
        }
    }

    fn on_view(&mut self, message: ViewMessage) -> Task<Message> {
        match message {
            ViewMessage::Refresh => {
                self.loading = true;
                self.notice = None;
                return load_feed(self.client.clone());
            }
            ViewMessage::ToggleAnswers(id) => {
                let client = self.client.clone();
                if let Some(card) = self.card_mut(id) {
                    if card.is_placeholder() {
                        return Task::none();
                    }
                    if card.expanded {
                        card.expanded = false;
                        return Task::none();
                    }
                    card.expanded = true;
                    // fetch on first expansion only, the cache check is
                    // whether the answer list is already present
                    if card.answers.is_none() && !card.answers_loading {
                        card.answers_loading = true;
                        return Task::perform(
                            async move { (id, client.list_answers(id).await) },
                            |(id, res)| Message::AnswersLoaded(id, res),
                        );
                    }
                }
            }
            ViewMessage::Upvote(id) => return self.vote(id, api::VoteKind::Up),
            ViewMessage::Downvote(id) => return self.vote(id, api::VoteKind::Down),
            ViewMessage::OpenAsk => {
                self.ask.open = true;
            }
            ViewMessage::CloseAsk => {
                self.ask = AskForm::default();
            }
            ViewMessage::AskTitleEdited(value) => {
                self.ask.title.value = value;
                self.ask.title.valid = true;
            }
            ViewMessage::AskBodyEdited(value) => {
                self.ask.body.value = value;
            }
            ViewMessage::AskTagsEdited(value) => {
                self.ask.tags_input.value = value;
            }
            ViewMessage::SubmitQuestion => return self.submit_question(),
            ViewMessage::AnswerEdited(id, value) => {
                if let Some(card) = self.card_mut(id) {
                    card.answer_input.value = value;
                    card.answer_input.valid = true;
                }
            }
            ViewMessage::SubmitAnswer(id) => return self.submit_answer(id),
            // handled by the upper level
            ViewMessage::GoProfile => {
                return Task::perform(async {}, |_| Message::GoProfile);
            }
        }
        Task::none()
    }

    fn vote(&mut self, id: i64, kind: api::VoteKind) -> Task<Message> {
        let client = self.client.clone();
        if let Some(card) = self.card_mut(id) {
            if card.is_placeholder() || card.voting {
                return Task::none();
            }
            card.voting = true;
            return Task::perform(
                async move { (id, client.vote_question(id, kind).await) },
                |(id, res)| Message::Voted(id, res),
            );
        }
        Task::none()
    }

    fn submit_question(&mut self) -> Task<Message> {
        if self.ask.title.value.trim().is_empty() {
            self.ask.title.valid = false;
            return Task::none();
        }
        self.ask.processing = true;
        let client = self.client.clone();
        let title = self.ask.title.value.trim().to_string();
        let body = self.ask.body.value.trim().to_string();
        let tags: Vec<String> = self
            .ask
            .tags_input
            .value
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Task::perform(
            async move { client.post_question(&title, &body, &tags).await },
            Message::QuestionPosted,
        )
    }

    fn submit_answer(&mut self, id: i64) -> Task<Message> {
        let client = self.client.clone();
        if let Some(card) = self.card_mut(id) {
            if card.is_placeholder() || card.posting_answer {
                return Task::none();
            }
            if card.answer_input.value.trim().is_empty() {
                card.answer_input.valid = false;
                return Task::none();
            }
            card.posting_answer = true;
            let body = card.answer_input.value.trim().to_string();
            return Task::perform(
                async move { (id, client.post_answer(id, &body).await) },
                |(id, res)| Message::AnswerPosted(id, res),
            );
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        view::home(self)
    }
}

fn load_feed(client: PortalClient) -> Task<Message> {
    let questions = {
        let client = client.clone();
        Task::perform(
            async move { client.list_questions().await },
            Message::QuestionsLoaded,
        )
    };
    let tags = Task::perform(
        async move { client.list_tags().await },
        Message::TagsLoaded,
    );
    Task::batch(vec![questions, tags])
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

    fn home() -> Home {
        Home::new(&Config::default(), session()).0
    }

    fn question(id: i64) -> api::Question {
        api::Question {
            id,
            title: format!("Question {}", id),
            body: "body".to_string(),
            author: "john".to_string(),
            created_at: chrono::DateTime::UNIX_EPOCH,
            tags: vec!["exams".to_string()],
            upvotes: 1,
            downvotes: 0,
            answers_count: 1,
        }
    }

    fn network_error() -> ApiError {
        ApiError {
            http_status: None,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn failed_feed_load_falls_back_to_one_placeholder() {
        let mut home = home();
        let _ = home.update(Message::QuestionsLoaded(Err(network_error())));
        assert_eq!(home.questions.len(), 1);
        assert!(home.questions[0].is_placeholder());
        assert_eq!(home.questions[0].question.title, PLACEHOLDER_TITLE);
    }

    #[test]
    fn answers_are_fetched_lazily_and_cached() {
        let mut home = home();
        let _ = home.update(Message::QuestionsLoaded(Ok(vec![question(7)])));

        let _ = home.update(Message::View(ViewMessage::ToggleAnswers(7)));
        assert!(home.questions[0].expanded);
        assert!(home.questions[0].answers_loading);

        let _ = home.update(Message::AnswersLoaded(
            7,
            Ok(vec![api::Answer {
                id: 1,
                question_id: 7,
                author: "jane".to_string(),
                body: "answer".to_string(),
                created_at: chrono::DateTime::UNIX_EPOCH,
                upvotes: 0,
            }]),
        ));
        assert_eq!(home.questions[0].answers.as_ref().unwrap().len(), 1);

        // collapsing and re-expanding must not refetch
        let _ = home.update(Message::View(ViewMessage::ToggleAnswers(7)));
        assert!(!home.questions[0].expanded);
        let _ = home.update(Message::View(ViewMessage::ToggleAnswers(7)));
        assert!(home.questions[0].expanded);
        assert!(!home.questions[0].answers_loading);
    }

    #[test]
    fn votes_update_the_counts_in_place() {
        let mut home = home();
        let _ = home.update(Message::QuestionsLoaded(Ok(vec![question(7)])));
        let _ = home.update(Message::View(ViewMessage::Upvote(7)));
        assert!(home.questions[0].voting);
        let _ = home.update(Message::Voted(
            7,
            Ok(api::VoteResult {
                success: true,
                message: None,
                upvotes: 2,
                downvotes: 0,
            }),
        ));
        assert!(!home.questions[0].voting);
        assert_eq!(home.questions[0].question.upvotes, 2);
    }

    #[test]
    fn the_placeholder_takes_no_interactions() {
        let mut home = home();
        let _ = home.update(Message::QuestionsLoaded(Err(network_error())));
        let _ = home.update(Message::View(ViewMessage::Upvote(0)));
        assert!(!home.questions[0].voting);
        let _ = home.update(Message::View(ViewMessage::ToggleAnswers(0)));
        assert!(!home.questions[0].expanded);
    }

    #[test]
    fn empty_question_title_is_blocked_locally() {
        let mut home = home();
        let _ = home.update(Message::View(ViewMessage::OpenAsk));
        let _ = home.update(Message::View(ViewMessage::SubmitQuestion));
        assert!(!home.ask.title.valid);
        assert!(!home.ask.processing);
    }

    #[test]
    fn posted_question_lands_on_top_of_the_feed() {
        let mut home = home();
        let _ = home.update(Message::QuestionsLoaded(Ok(vec![question(7)])));
        let _ = home.update(Message::QuestionPosted(Ok(question(8))));
        assert_eq!(home.questions[0].question.id, 8);
        assert!(matches!(home.notice, Some((Level::Success, _))));
    }

    #[test]
    fn posted_answer_extends_the_cache_and_count() {
        let mut home = home();
        let _ = home.update(Message::QuestionsLoaded(Ok(vec![question(7)])));
        let _ = home.update(Message::AnswersLoaded(7, Ok(Vec::new())));
        let _ = home.update(Message::View(ViewMessage::AnswerEdited(
            7,
            "An answer".to_string(),
        )));
        let _ = home.update(Message::View(ViewMessage::SubmitAnswer(7)));
        assert!(home.questions[0].posting_answer);
        let _ = home.update(Message::AnswerPosted(
            7,
            Ok(api::Answer {
                id: 2,
                question_id: 7,
                author: "jane".to_string(),
                body: "An answer".to_string(),
                created_at: chrono::DateTime::UNIX_EPOCH,
                upvotes: 0,
            }),
        ));
        assert_eq!(home.questions[0].question.answers_count, 2);
        assert_eq!(home.questions[0].answers.as_ref().unwrap().len(), 1);
        assert_eq!(home.questions[0].answer_input.value, "");
    }
}
