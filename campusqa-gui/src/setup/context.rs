use crate::{
    config::Config,
    services::portal::{api, PortalClient},
    session::Session,
};

/// Data passed through each step of the profile setup.
#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub session: Session,
    pub client: PortalClient,
    /// The backend could not be reached on entry; saves will be retried by
    /// the user once the connection is back.
    pub offline: bool,
    pub personal: Option<api::PersonalInfo>,
    pub designation: Option<api::Designation>,
    pub general: Option<api::GeneralProfile>,
}

impl Context {
    pub fn new(config: Config, session: Session, offline: bool) -> Self {
        let client =
            PortalClient::with_credential(config.api_url(), session.credential.clone());
        Self {
            config,
            session,
            client,
            offline,
            personal: None,
            designation: None,
            general: None,
        }
    }
}
