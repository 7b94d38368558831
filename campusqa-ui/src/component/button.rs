use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row};

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::secondary)
}

pub fn destructive<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::destructive)
}

pub fn transparent<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::transparent)
}

pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t).align_y(Vertical::Center)).padding(5))
        .style(theme::button::link)
}

pub fn menu<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content_menu(t).padding(10)).style(theme::button::menu)
}

pub fn menu_active<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content_menu(t).padding(10)).style(theme::button::menu_active)
}

fn content_menu<'a, T: 'a>(t: &'static str) -> Container<'a, T> {
    container(row![text(t)].align_y(Vertical::Center)).padding(5)
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
