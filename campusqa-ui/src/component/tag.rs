use crate::{component::text, theme, widget::*};
use iced::Alignment;

/// A removable chip, used for the skills and interests tag sets.
pub fn removable<'a, T: Clone + 'a>(label: &'a str, on_remove: T) -> Container<'a, T> {
    Container::new(
        Row::new()
            .spacing(5)
            .align_y(Alignment::Center)
            .push(text::p2_regular(label))
            .push(
                Button::new(text::p2_regular("×"))
                    .style(theme::button::transparent)
                    .padding(0)
                    .on_press(on_remove),
            ),
    )
    .padding([2.0, 10.0])
    .style(theme::pill::primary)
}

/// A plain chip, used for the tag cloud of the feed.
pub fn simple<'a, T: 'a>(label: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(label))
        .padding([2.0, 10.0])
        .style(theme::pill::simple)
}
