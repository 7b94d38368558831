//! Startup gate: resolves the active credential, verifies it against the
//! backend and routes the user to the right page.
//!
//! The rules follow the portal behaviour: no credential or an invalid one
//! leads to the login page; a credential that cannot be verified because
//! the backend is unreachable degrades to an offline profile-setup session
//! for a first-time user, and to the login page otherwise.

use iced::{Alignment, Length, Task};
use tracing::warn;

use campusqa_ui::{
    component::text::*,
    widget::{Column, Container, Element},
};

use crate::{
    config::Config,
    dir::PortalDirectory,
    services::portal::PortalClient,
    session::{self, cookies::CookieJar, CallbackAuth, CredentialSource, Session},
    settings::Settings,
};

pub struct Loader {
    pub datadir: PortalDirectory,
    pub config: Config,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Consumed by the upper level to switch pages.
    Gated(Box<Gate>),
}

/// What the user was told on arrival at the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Offline,
    SessionExpired,
}

#[derive(Debug, Clone)]
pub enum Gate {
    Login {
        notice: Option<Notice>,
    },
    Setup {
        session: Session,
        offline: bool,
        welcome: bool,
    },
    Home {
        session: Session,
    },
}

impl Loader {
    pub fn new(
        datadir: PortalDirectory,
        config: Config,
        callback_url: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut settings = Settings::load_or_default(&datadir).unwrap_or_else(|e| {
            warn!("Failed to read the settings store: {}", e);
            Settings::default()
        });
        let mut cookies = CookieJar::from_file(&datadir).unwrap_or_else(|e| {
            warn!("Failed to read the cookie jar: {}", e);
            CookieJar::default()
        });

        let callback = callback_url.as_deref().and_then(CallbackAuth::parse);
        let new_user = callback.as_ref().map(|c| c.new_user).unwrap_or(false);
        let resolved = session::resolve_credential(callback.as_ref(), &cookies, &settings);

        let loader = Loader {
            datadir: datadir.clone(),
            config: config.clone(),
        };

        let (credential, source) = match resolved {
            Some(found) => found,
            None => {
                return (
                    loader,
                    Task::perform(async { Gate::Login { notice: None } }, |gate| {
                        Message::Gated(Box::new(gate))
                    }),
                );
            }
        };

        // A credential arriving through the callback URL is persisted right
        // away and the URL is never looked at again.
        if source == CredentialSource::CallbackUrl {
            session::persist_credential(&credential, &mut settings, &mut cookies);
            if let Err(e) = settings.to_file(&datadir) {
                warn!("Failed to persist the credential: {}", e);
            }
            if let Err(e) = cookies.to_file(&datadir) {
                warn!("Failed to persist the cookie jar: {}", e);
            }
        }

        let session = match Session::open(credential) {
            Ok(session) => session,
            Err(e) => {
                // An undecodable payload is an invalid credential.
                warn!("Failed to decode the credential payload: {}", e);
                session::clear_credential(&mut settings, &mut cookies);
                let _ = settings.to_file(&datadir);
                let _ = cookies.to_file(&datadir);
                return (
                    loader,
                    Task::perform(
                        async {
                            Gate::Login {
                                notice: Some(Notice::SessionExpired),
                            }
                        },
                        |gate| Message::Gated(Box::new(gate)),
                    ),
                );
            }
        };

        let task = Task::perform(gate(config, datadir, session, new_user), |gate| {
            Message::Gated(Box::new(gate))
        });
        (loader, task)
    }

    pub fn update(&mut self, _message: Message) -> Task<Message> {
        // The terminal Gated message is handled by the upper level.
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        Container::new(
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(h2("CampusQA"))
                .push(text("Connecting...")),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}

async fn gate(
    config: Config,
    datadir: PortalDirectory,
    session: Session,
    new_user: bool,
) -> Gate {
    let client = PortalClient::with_credential(config.api_url(), session.credential.clone());
    match client.verify_token().await {
        Ok(true) => {
            if new_user {
                Gate::Setup {
                    session,
                    offline: false,
                    welcome: true,
                }
            } else {
                Gate::Home { session }
            }
        }
        Ok(false) => {
            warn!("Credential rejected by the backend");
            clear_stores(&datadir);
            Gate::Login {
                notice: Some(Notice::SessionExpired),
            }
        }
        Err(e) => {
            warn!("Could not verify the credential: {}", e);
            if new_user {
                // Profile setup works in a degraded offline mode; the held
                // credential is kept for when the connection is restored.
                Gate::Setup {
                    session,
                    offline: true,
                    welcome: true,
                }
            } else {
                Gate::Login {
                    notice: Some(Notice::Offline),
                }
            }
        }
    }
}

fn clear_stores(datadir: &PortalDirectory) {
    let mut settings = Settings::load_or_default(datadir).unwrap_or_default();
    let mut cookies = CookieJar::from_file(datadir).unwrap_or_default();
    session::clear_credential(&mut settings, &mut cookies);
    if let Err(e) = settings.to_file(datadir) {
        warn!("Failed to clear the settings store: {}", e);
    }
    if let Err(e) = cookies.to_file(datadir) {
        warn!("Failed to clear the cookie jar: {}", e);
    }
}
