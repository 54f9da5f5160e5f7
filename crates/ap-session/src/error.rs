use ap_core::{CoreError, SignalId};
use ap_services::GeolocationError;
use ap_signal::SignalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("user location unavailable")]
    UserLocationUnavailable,

    #[error("geolocation failed: {0}")]
    GeolocationFailed(#[from] GeolocationError),

    #[error("no signals registered")]
    RegistryEmpty,

    #[error("signal {0} not found")]
    UnknownSignal(SignalId),

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("signal sites: {0}")]
    Sites(#[from] SignalError),
}

impl SessionError {
    /// The text shown to the user when this error ends an interaction.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::UserLocationUnavailable => "Click 'Show my location' first.".to_string(),
            SessionError::GeolocationFailed(GeolocationError::Unsupported) => {
                "Geolocation not supported.".to_string()
            }
            SessionError::GeolocationFailed(e)    => format!("Could not get location: {e}"),
            SessionError::RegistryEmpty           => "No signals found.".to_string(),
            other                                 => other.to_string(),
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
