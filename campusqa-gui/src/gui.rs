use iced::{Length, Subscription, Task};
use tracing::{error, warn};
use tracing_subscriber::filter::LevelFilter;

use campusqa_ui::{
    component::{button, text::*},
    theme,
    widget::{Column, Container, Element, Row},
};

use crate::{
    config::Config,
    dir::PortalDirectory,
    home::{self, Home},
    loader::{self, Gate, Loader},
    login::{self, LoginPage},
    logger::setup_logger,
    settings::{Settings, ThemePreference},
    setup::{self, Setup},
};

pub struct GUI {
    state: State,
    config: Config,
    datadir: PortalDirectory,
    theme: ThemePreference,
}

enum State {
    Loader(Box<Loader>),
    Login(Box<LoginPage>),
    Setup(Box<Setup>),
    Home(Box<Home>),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    ToggleTheme,
    Load(Box<loader::Message>),
    Login(Box<login::Message>),
    Setup(Box<setup::Message>),
    Run(Box<home::Message>),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    tracing::info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        match self.state {
            State::Loader(_) => String::from("CampusQA"),
            State::Login(_) => String::from("CampusQA — Sign in"),
            State::Setup(_) => String::from("CampusQA — Profile setup"),
            State::Home(_) => String::from("CampusQA — Forum"),
        }
    }

    #[allow(clippy::type_complexity)]
    pub fn new(
        (config, datadir, log_level, callback_url): (
            Config,
            PortalDirectory,
            Option<LevelFilter>,
            Option<String>,
        ),
    ) -> (GUI, Task<Message>) {
        if !datadir.exists() {
            if let Err(e) = datadir.init() {
                error!("Failed to create the data directory: {}", e);
            }
        }
        let log_level = log_level.unwrap_or_else(|| {
            config
                .log_level()
                .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO)
        });
        if let Err(e) = setup_logger(log_level, datadir.clone()) {
            warn!("Error while setting up the logger: {}", e);
        }

        let theme = Settings::load_or_default(&datadir)
            .unwrap_or_default()
            .theme
            .unwrap_or_default();

        let (loader, task) = Loader::new(datadir.clone(), config.clone(), callback_url);
        (
            Self {
                state: State::Loader(Box::new(loader)),
                config,
                datadir,
                theme,
            },
            Task::batch(vec![
                task.map(|msg| Message::Load(Box::new(msg))),
                Task::perform(ctrl_c(), |_| Message::CtrlC),
            ]),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.state, message) {
            (_, Message::CtrlC) => iced::window::get_latest().and_then(iced::window::close),
            (_, Message::ToggleTheme) => {
                self.theme = self.theme.toggle();
                let mut settings = Settings::load_or_default(&self.datadir).unwrap_or_default();
                settings.theme = Some(self.theme);
                if let Err(e) = settings.to_file(&self.datadir) {
                    warn!("Failed to persist the theme preference: {}", e);
                }
                Task::none()
            }
            (State::Loader(_), Message::Load(msg)) => {
                let loader::Message::Gated(gate) = *msg;
                self.apply_gate(*gate)
            }
            (State::Login(page), Message::Login(msg)) => {
                if let login::Message::Run(session) = *msg {
                    let (home, task) = Home::new(&self.config, *session);
                    self.state = State::Home(Box::new(home));
                    task.map(|msg| Message::Run(Box::new(msg)))
                } else {
                    page.update(*msg).map(|msg| Message::Login(Box::new(msg)))
                }
            }
            (State::Setup(wizard), Message::Setup(msg)) => {
                if let setup::Message::GoHome = *msg {
                    let session = wizard.context.session.clone();
                    let (home, task) = Home::new(&self.config, session);
                    self.state = State::Home(Box::new(home));
                    task.map(|msg| Message::Run(Box::new(msg)))
                } else {
                    wizard
                        .update(*msg)
                        .map(|msg| Message::Setup(Box::new(msg)))
                }
            }
            (State::Home(feed), Message::Run(msg)) => {
                if let home::Message::GoProfile = *msg {
                    let session = feed.session().clone();
                    let (wizard, task) = Setup::new(self.config.clone(), session, false, false);
                    self.state = State::Setup(Box::new(wizard));
                    task.map(|msg| Message::Setup(Box::new(msg)))
                } else {
                    feed.update(*msg).map(|msg| Message::Run(Box::new(msg)))
                }
            }
            _ => Task::none(),
        }
    }

    fn apply_gate(&mut self, gate: Gate) -> Task<Message> {
        match gate {
            Gate::Login { notice } => {
                let (page, task) = LoginPage::new(self.datadir.clone(), &self.config, notice);
                self.state = State::Login(Box::new(page));
                task.map(|msg| Message::Login(Box::new(msg)))
            }
            Gate::Setup {
                session,
                offline,
                welcome,
            } => {
                let (wizard, task) =
                    Setup::new(self.config.clone(), session, offline, welcome);
                self.state = State::Setup(Box::new(wizard));
                task.map(|msg| Message::Setup(Box::new(msg)))
            }
            Gate::Home { session } => {
                let (home, task) = Home::new(&self.config, session);
                self.state = State::Home(Box::new(home));
                task.map(|msg| Message::Run(Box::new(msg)))
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.state {
            State::Login(page) => page
                .subscription()
                .map(|msg| Message::Login(Box::new(msg))),
            State::Setup(wizard) => wizard
                .subscription()
                .map(|msg| Message::Setup(Box::new(msg))),
            _ => Subscription::none(),
        }
    }

    pub fn theme(&self) -> theme::Theme {
        match self.theme {
            ThemePreference::Dark => theme::Theme::dark(),
            ThemePreference::Light => theme::Theme::light(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let content: Element<Message> = match &self.state {
            State::Loader(loader) => loader
                .view()
                .map(|msg| Message::Load(Box::new(msg))),
            State::Login(page) => page.view().map(|msg| Message::Login(Box::new(msg))),
            State::Setup(wizard) => wizard.view().map(|msg| Message::Setup(Box::new(msg))),
            State::Home(feed) => feed.view().map(|msg| Message::Run(Box::new(msg))),
        };

        let top_bar = Row::new()
            .padding(10)
            .push(Container::new(p2_medium("CampusQA")).width(Length::Fill))
            .push(
                button::transparent(match self.theme {
                    ThemePreference::Dark => "Light mode",
                    ThemePreference::Light => "Dark mode",
                })
                .on_press(Message::ToggleTheme),
            );

        Column::new().push(top_bar).push(content).into()
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}
