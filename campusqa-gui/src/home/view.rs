use chrono::Utc;
use iced::widget::scrollable;
use iced::{Alignment, Length};

use campusqa_ui::{
    component::{button, card, form, notification, tag, text::*},
    theme,
    widget::{Column, Container, Element, Row},
};

use super::{Home, Level, Message, QuestionCard, ViewMessage};
use crate::utils::relative_since;

pub fn home(home: &Home) -> Element<Message> {
    let mut col = Column::new().spacing(20);

    if let Some((level, message)) = &home.notice {
        col = col.push(match level {
            Level::Success => notification::success(message.clone()),
            Level::Error => notification::error(message.clone(), None),
        });
    }

    col = col.push(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(Container::new(h2("College Q&A")).width(Length::Fill))
            .push_maybe(
                home.user_email()
                    .map(|e| p2_regular(e).style(theme::text::success)),
            )
            .push(
                button::secondary("Refresh")
                    .width(Length::Fixed(120.0))
                    .on_press_maybe(if home.loading {
                        None
                    } else {
                        Some(Message::View(ViewMessage::Refresh))
                    }),
            )
            .push(
                button::secondary("My profile")
                    .width(Length::Fixed(130.0))
                    .on_press(Message::View(ViewMessage::GoProfile)),
            )
            .push(
                button::primary("Ask a question")
                    .width(Length::Fixed(170.0))
                    .on_press(Message::View(ViewMessage::OpenAsk)),
            ),
    );

    if !home.tags.is_empty() {
        let mut cloud = Row::new().spacing(5);
        for t in &home.tags {
            cloud = cloud.push(tag::simple(&t.name));
        }
        col = col.push(cloud);
    }

    if home.ask.open {
        col = col.push(ask_form(home));
    }

    let mut feed = Column::new().spacing(15);
    if home.loading && home.questions.is_empty() {
        feed = feed.push(text("Loading questions...").style(theme::text::secondary));
    }
    for card in &home.questions {
        feed = feed.push(question_card(card));
    }
    col = col.push(feed);

    Container::new(scrollable(Container::new(col).padding(30)))
        .height(Length::Fill)
        .width(Length::Fill)
        .style(theme::container::background)
        .into()
}

fn ask_form(home: &Home) -> Element<Message> {
    card::modal(
        Column::new()
            .spacing(15)
            .push(h4_bold("Ask a question"))
            .push(
                form::Form::new("Title", &home.ask.title, |v| {
                    Message::View(ViewMessage::AskTitleEdited(v))
                })
                .warning("A title is required")
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                form::Form::new("Describe your question (optional)", &home.ask.body, |v| {
                    Message::View(ViewMessage::AskBodyEdited(v))
                })
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                form::Form::new_trimmed(
                    "Tags, comma separated (optional)",
                    &home.ask.tags_input,
                    |v| Message::View(ViewMessage::AskTagsEdited(v)),
                )
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .push(
                        button::primary(if home.ask.processing {
                            "Posting..."
                        } else {
                            "Post question"
                        })
                        .width(Length::Fixed(180.0))
                        .on_press_maybe(if home.ask.processing {
                            None
                        } else {
                            Some(Message::View(ViewMessage::SubmitQuestion))
                        }),
                    )
                    .push(
                        button::transparent("Cancel")
                            .width(Length::Fixed(100.0))
                            .on_press(Message::View(ViewMessage::CloseAsk)),
                    ),
            ),
    )
    .into()
}

fn question_card(card: &QuestionCard) -> Element<Message> {
    let q = &card.question;
    let id = q.id;

    let mut content = Column::new()
        .spacing(10)
        .push(p1_bold(&q.title))
        .push(
            caption(format!(
                "{} · {} · {} answers",
                q.author,
                relative_since(Utc::now(), q.created_at),
                q.answers_count
            ))
            .style(theme::text::secondary),
        );

    if !q.body.is_empty() {
        content = content.push(p2_regular(&q.body));
    }

    if !q.tags.is_empty() {
        let mut tags = Row::new().spacing(5);
        for t in &q.tags {
            tags = tags.push(tag::simple(t));
        }
        content = content.push(tags);
    }

    let interactive = !card.is_placeholder();
    content = content.push(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                button::secondary("▲")
                    .width(Length::Fixed(50.0))
                    .on_press_maybe(if interactive && !card.voting {
                        Some(Message::View(ViewMessage::Upvote(id)))
                    } else {
                        None
                    }),
            )
            .push(text(q.upvotes - q.downvotes))
            .push(
                button::secondary("▼")
                    .width(Length::Fixed(50.0))
                    .on_press_maybe(if interactive && !card.voting {
                        Some(Message::View(ViewMessage::Downvote(id)))
                    } else {
                        None
                    }),
            )
            .push(
                button::link(if card.expanded {
                    "Hide answers"
                } else {
                    "Show answers"
                })
                .on_press_maybe(if interactive {
                    Some(Message::View(ViewMessage::ToggleAnswers(id)))
                } else {
                    None
                }),
            ),
    );

    if card.expanded {
        content = content.push(answers_view(card));
    }

    card::simple(content).into()
}

fn answers_view(card: &QuestionCard) -> Element<Message> {
    let id = card.question.id;
    let mut col = Column::new().spacing(10).padding(10);

    match &card.answers {
        None => {
            col = col.push(text("Loading answers...").style(theme::text::secondary));
        }
        Some(answers) if answers.is_empty() => {
            col = col.push(
                text("No answers yet. Be the first one!").style(theme::text::secondary),
            );
        }
        Some(answers) => {
            for answer in answers {
                col = col.push(card::border(
                    Column::new()
                        .spacing(5)
                        .push(
                            caption(format!(
                                "{} · {}",
                                answer.author,
                                relative_since(Utc::now(), answer.created_at)
                            ))
                            .style(theme::text::secondary),
                        )
                        .push(p2_regular(&answer.body)),
                ));
            }
        }
    }

    col = col.push(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                form::Form::new("Write an answer", &card.answer_input, move |v| {
                    Message::View(ViewMessage::AnswerEdited(id, v))
                })
                .on_submit(Message::View(ViewMessage::SubmitAnswer(id)))
                .warning("An answer cannot be empty")
                .size(P2_SIZE)
                .padding(10),
            )
            .push(
                button::primary(if card.posting_answer {
                    "Posting..."
                } else {
                    "Answer"
                })
                .width(Length::Fixed(120.0))
                .on_press_maybe(if card.posting_answer {
                    None
                } else {
                    Some(Message::View(ViewMessage::SubmitAnswer(id)))
                }),
            ),
    );

    col.into()
}
