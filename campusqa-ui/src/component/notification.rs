use crate::{component::text, theme, widget::*};
use iced::{Alignment, Length};

pub fn success<'a, T: 'a>(message: String) -> Container<'a, T> {
    banner(message, theme::notification::success)
}

pub fn info<'a, T: 'a>(message: String) -> Container<'a, T> {
    banner(message, theme::notification::info)
}

pub fn error<'a, T: 'a>(message: String, detail: Option<String>) -> Container<'a, T> {
    let mut row = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(text::p1_bold(message));
    if let Some(detail) = detail {
        row = row.push(text::p2_regular(detail));
    }
    Container::new(row)
        .padding(15)
        .style(theme::notification::error)
        .width(Length::Fill)
}

fn banner<'a, T: 'a>(
    message: String,
    style: fn(&theme::Theme) -> iced::widget::container::Style,
) -> Container<'a, T> {
    Container::new(text::p1_bold(message))
        .padding(15)
        .style(style)
        .width(Length::Fill)
}
