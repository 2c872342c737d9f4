mod actions;
mod error;
mod fields;
mod payload;
mod reducers;
mod section;
mod state;

pub use actions::FormCommand;
pub use error::{BLOCKED_ALERT, SubmitError};
pub use fields::FieldSet;
pub use payload::{SubmissionPlan, build_images, build_payload};
pub use reducers::apply_command;
pub use section::FormSection;
pub use state::FormState;
