mod controller;
mod options;
mod services;
mod session;
mod status;

pub use controller::SubmissionController;
pub use options::{DEFAULT_IMAGE_SUFFIXES, DEFAULT_MIN_DESCRIPTION_CHARS, FormOptions, OptionsError};
pub use services::{Navigator, Notifier, SpotCreator};
pub use session::{ANONYMOUS_REDIRECT, SessionProvider, SessionRequired, StaticSession, require_session};
pub use status::{READY_STATUS, StatusLine};
