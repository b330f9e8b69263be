use thiserror::Error;
use wcag_client::StoreError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid e-mail or password")]
    InvalidCredentials,

    #[error("an account with this e-mail already exists")]
    DuplicateEmail,

    #[error("session expired: run `wcag auth login` to sign in again")]
    SessionExpired,

    #[error("not signed in: run `wcag auth login`")]
    NotAuthenticated,

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("auth provider error: {0}")]
    Provider(String),

    #[error("auth provider unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session store error: {0}")]
    SessionStore(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Conflict(_) => Self::DuplicateEmail,
            other => Self::Store(other),
        }
    }
}
