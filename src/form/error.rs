use thiserror::Error;

pub const BLOCKED_ALERT: &str = "Fix errors before creating spot!";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("Fix errors before creating spot! ({issues} issue(s) remaining)")]
    Blocked { issues: usize },
    #[error("could not create spot: {0:#}")]
    Service(#[source] anyhow::Error),
}
