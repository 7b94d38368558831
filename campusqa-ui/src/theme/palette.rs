use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub pills: Pills,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
    pub progress_bars: ProgressBars,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub transparent: Button,
    pub link: Button,
    pub menu: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    pub border: ContainerPalette,
    pub invalid: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pills {
    pub simple: ContainerPalette,
    pub primary: ContainerPalette,
    pub success: ContainerPalette,
    pub warning: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
    pub info: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressBars {
    pub background: iced::Color,
    pub bar: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            general: General {
                background: color::NAVY,
                foreground: color::NAVY_LIGHT,
                scrollable: color::NAVY_BORDER,
            },
            text: Text {
                primary: color::GREY_1,
                secondary: color::INDIGO_PALE,
                warning: color::AMBER,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::INDIGO_LIGHT,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INDIGO,
                        text: color::GREY_1,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::NAVY_LIGHT,
                        text: color::GREY_2,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::NAVY_LIGHT,
                        text: color::GREY_1,
                        border: color::INDIGO_LIGHT.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::NAVY_BORDER,
                        text: color::WHITE,
                        border: color::INDIGO_LIGHT.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::NAVY_LIGHT,
                        text: color::GREY_3,
                        border: color::NAVY_BORDER.into(),
                    }),
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::NAVY_LIGHT,
                        text: color::RED,
                        border: color::RED.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_RED,
                        text: color::WHITE,
                        border: color::DARK_RED.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::NAVY_LIGHT,
                        text: color::GREY_3,
                        border: color::NAVY_BORDER.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_1,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_BLUE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                menu: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_1,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::NAVY_LIGHT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::NAVY_LIGHT,
                    text: None,
                    border: None,
                },
                modal: ContainerPalette {
                    background: color::NAVY_LIGHT,
                    text: None,
                    border: color::INDIGO_LIGHT.into(),
                },
                border: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: None,
                    border: color::NAVY_BORDER.into(),
                },
                invalid: ContainerPalette {
                    background: color::NAVY_LIGHT,
                    text: color::RED.into(),
                    border: color::RED.into(),
                },
                error: ContainerPalette {
                    background: color::NAVY_LIGHT,
                    text: color::RED.into(),
                    border: color::DARK_RED.into(),
                },
            },
            pills: Pills {
                simple: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::GREY_2.into(),
                    border: color::NAVY_BORDER.into(),
                },
                primary: ContainerPalette {
                    background: color::INDIGO,
                    text: color::WHITE.into(),
                    border: None,
                },
                success: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::GREEN.into(),
                    border: color::GREEN.into(),
                },
                warning: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::AMBER.into(),
                    border: color::AMBER.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::DARK_GREEN,
                    text: color::WHITE.into(),
                    border: color::GREEN.into(),
                },
                error: ContainerPalette {
                    background: color::DARK_RED,
                    text: color::WHITE.into(),
                    border: color::RED.into(),
                },
                info: ContainerPalette {
                    background: color::DARK_BLUE,
                    text: color::WHITE.into(),
                    border: color::BLUE.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::NAVY_LIGHT,
                        icon: color::GREY_2,
                        placeholder: color::GREY_3,
                        value: color::GREY_1,
                        selection: color::INDIGO_LIGHT,
                        border: color::NAVY_BORDER.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::NAVY,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::INDIGO,
                        border: color::NAVY_BORDER.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::NAVY_LIGHT,
                        icon: color::GREY_2,
                        placeholder: color::GREY_3,
                        value: color::GREY_1,
                        selection: color::INDIGO_LIGHT,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::NAVY,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::INDIGO,
                        border: color::RED.into(),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::WHITE,
                text: color::GREY_1,
                background: color::NAVY_LIGHT,
                border: color::INDIGO_LIGHT.into(),
            },
            progress_bars: ProgressBars {
                background: color::NAVY_LIGHT,
                bar: color::INDIGO_LIGHT,
                border: color::NAVY_BORDER.into(),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BG,
                foreground: color::LIGHT_FG,
                scrollable: color::LIGHT_BORDER,
            },
            text: Text {
                primary: color::DARK_TEXT,
                secondary: color::DARK_TEXT_SECONDARY,
                warning: color::AMBER,
                success: color::DARK_GREEN,
                error: color::DARK_RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::INDIGO_LIGHT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::LIGHT_BORDER,
                        text: color::DARK_TEXT_SECONDARY,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::LIGHT_FG,
                        text: color::INDIGO,
                        border: color::INDIGO.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_BORDER,
                        text: color::INDIGO,
                        border: color::INDIGO.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::LIGHT_FG,
                        text: color::DARK_TEXT_SECONDARY,
                        border: color::LIGHT_BORDER.into(),
                    }),
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::LIGHT_FG,
                        text: color::DARK_RED,
                        border: color::DARK_RED.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_RED,
                        text: color::WHITE,
                        border: color::DARK_RED.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::LIGHT_FG,
                        text: color::DARK_TEXT_SECONDARY,
                        border: color::LIGHT_BORDER.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_TEXT,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::INDIGO,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_TEXT_SECONDARY,
                        border: None,
                    }),
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                menu: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_TEXT,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_BORDER,
                        text: color::DARK_TEXT,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::LIGHT_FG,
                    text: None,
                    border: color::LIGHT_BORDER.into(),
                },
                modal: ContainerPalette {
                    background: color::LIGHT_FG,
                    text: None,
                    border: color::INDIGO.into(),
                },
                border: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: None,
                    border: color::LIGHT_BORDER.into(),
                },
                invalid: ContainerPalette {
                    background: color::LIGHT_FG,
                    text: color::DARK_RED.into(),
                    border: color::DARK_RED.into(),
                },
                error: ContainerPalette {
                    background: color::LIGHT_FG,
                    text: color::DARK_RED.into(),
                    border: color::DARK_RED.into(),
                },
            },
            pills: Pills {
                simple: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::DARK_TEXT_SECONDARY.into(),
                    border: color::LIGHT_BORDER.into(),
                },
                primary: ContainerPalette {
                    background: color::INDIGO,
                    text: color::WHITE.into(),
                    border: None,
                },
                success: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::DARK_GREEN.into(),
                    border: color::DARK_GREEN.into(),
                },
                warning: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::AMBER.into(),
                    border: color::AMBER.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREEN,
                    text: color::DARK_TEXT.into(),
                    border: color::DARK_GREEN.into(),
                },
                error: ContainerPalette {
                    background: color::RED,
                    text: color::WHITE.into(),
                    border: color::DARK_RED.into(),
                },
                info: ContainerPalette {
                    background: color::BLUE,
                    text: color::WHITE.into(),
                    border: color::DARK_BLUE.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_FG,
                        icon: color::DARK_TEXT_SECONDARY,
                        placeholder: color::DARK_TEXT_SECONDARY,
                        value: color::DARK_TEXT,
                        selection: color::LIGHT_BORDER,
                        border: color::LIGHT_BORDER.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::LIGHT_BG,
                        icon: color::DARK_TEXT_SECONDARY,
                        placeholder: color::DARK_TEXT_SECONDARY,
                        value: color::DARK_TEXT_SECONDARY,
                        selection: color::LIGHT_BORDER,
                        border: color::LIGHT_BORDER.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_FG,
                        icon: color::DARK_TEXT_SECONDARY,
                        placeholder: color::DARK_TEXT_SECONDARY,
                        value: color::DARK_TEXT,
                        selection: color::LIGHT_BORDER,
                        border: color::DARK_RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::LIGHT_BG,
                        icon: color::DARK_TEXT_SECONDARY,
                        placeholder: color::DARK_TEXT_SECONDARY,
                        value: color::DARK_TEXT_SECONDARY,
                        selection: color::LIGHT_BORDER,
                        border: color::DARK_RED.into(),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::WHITE,
                text: color::DARK_TEXT,
                background: color::INDIGO,
                border: color::INDIGO.into(),
            },
            progress_bars: ProgressBars {
                background: color::LIGHT_BORDER,
                bar: color::INDIGO,
                border: None,
            },
        }
    }
}
