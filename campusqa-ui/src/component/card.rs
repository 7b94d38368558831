use crate::{theme, widget::*};

pub fn simple<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::simple)
}

pub fn modal<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::modal)
}

pub fn border<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::border)
}

pub fn invalid<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(15)
        .style(theme::card::invalid)
}

pub fn error<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::error)
}
