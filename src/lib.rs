#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod io;
mod validation;

pub use app::{
    ANONYMOUS_REDIRECT, DEFAULT_IMAGE_SUFFIXES, DEFAULT_MIN_DESCRIPTION_CHARS, FormOptions,
    Navigator, Notifier, OptionsError, READY_STATUS, SessionProvider, SessionRequired, SpotCreator,
    StaticSession, StatusLine, SubmissionController, require_session,
};
pub use domain::{
    CreatedSpot, CreationPayload, FieldId, IMAGE_SLOTS, ImageSlot, Owner, SessionUser, SpotId,
    SpotImage, UnknownField,
};
pub use form::{
    BLOCKED_ALERT, FieldSet, FormCommand, FormSection, FormState, SubmissionPlan, SubmitError,
    apply_command, build_images, build_payload,
};
pub use io::{
    DocumentFormat, DraftError, OutputDestination, OutputOptions, draft_commands, emit,
    parse_document_any, parse_document_str, parse_override,
};
pub use validation::{ErrorKey, ErrorMap, ImageSuffixRule, Rule, ValidationEngine};

pub mod prelude {
    pub use super::{
        FieldId, FormCommand, FormOptions, SessionUser, SubmissionController, SubmitError,
        require_session,
    };
}
