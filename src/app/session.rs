use thiserror::Error;

use crate::domain::SessionUser;

pub const ANONYMOUS_REDIRECT: &str = "/";

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<SessionUser>;
}

/// Fixed identity, resolved once up front.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<SessionUser>,
}

impl StaticSession {
    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sign in to create a spot")]
pub struct SessionRequired;

impl SessionRequired {
    pub fn redirect_to(&self) -> &'static str {
        ANONYMOUS_REDIRECT
    }
}

/// Entry guard for the create-spot route. Anonymous visitors never reach the
/// form.
pub fn require_session<P>(provider: &P) -> Result<SessionUser, SessionRequired>
where
    P: SessionProvider + ?Sized,
{
    provider.current_user().ok_or(SessionRequired)
}
