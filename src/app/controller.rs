use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

use crate::{
    domain::{CreatedSpot, SessionUser},
    form::{BLOCKED_ALERT, FormCommand, FormState, SubmitError, apply_command},
    validation::ValidationEngine,
};

use super::{
    options::{FormOptions, OptionsError},
    services::{Navigator, Notifier, SpotCreator},
    status::StatusLine,
};

struct Session {
    form: FormState,
    status: StatusLine,
}

/// Drives one spot form: edits, validation, and the create request.
pub struct SubmissionController {
    session: Mutex<Session>,
    creator: Arc<dyn SpotCreator>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionController {
    pub fn new(
        options: &FormOptions,
        creator: Arc<dyn SpotCreator>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, OptionsError> {
        let engine = ValidationEngine::new(options)?;
        Ok(Self {
            session: Mutex::new(Session {
                form: FormState::new(engine),
                status: StatusLine::new(),
            }),
            creator,
            navigator,
            notifier,
        })
    }

    pub fn dispatch(&self, command: FormCommand) {
        let mut session = lock(&self.session);
        match &command {
            FormCommand::Edit { field, .. } | FormCommand::Clear { field } => {
                session.status.editing(field.label())
            }
            FormCommand::Reset => session.status.ready(),
        }
        apply_command(&mut session.form, command);
    }

    pub fn snapshot(&self) -> FormState {
        lock(&self.session).form.clone()
    }

    pub fn status_message(&self) -> String {
        lock(&self.session).status.message().to_string()
    }

    /// Validates, gates, and hands the spot to the creation service.
    ///
    /// A blocked or failed attempt leaves the input in place. Only one request
    /// can be in flight; a concurrent call returns [`SubmitError::InFlight`].
    pub async fn submit(&self, user: &SessionUser) -> Result<CreatedSpot, SubmitError> {
        let plan = {
            let mut session = lock(&self.session);
            let outcome = session.form.begin_submit(user);
            match outcome {
                Ok(plan) => {
                    session.status.submitting();
                    plan
                }
                Err(SubmitError::Blocked { issues }) => {
                    session.status.issues_remaining(issues);
                    drop(session);
                    warn!(issues, "spot submission blocked by validation");
                    self.notifier.alert(BLOCKED_ALERT);
                    return Err(SubmitError::Blocked { issues });
                }
                Err(err) => {
                    warn!("spot submission ignored: {err}");
                    return Err(err);
                }
            }
        };

        let in_flight = InFlight {
            session: &self.session,
            armed: true,
        };
        info!(
            owner = user.id,
            images = plan.images.len(),
            "submitting spot {:?}",
            plan.payload.name
        );

        match self.creator.create(plan.payload, plan.images).await {
            Ok(created) => {
                in_flight.finish(|session| {
                    session.form.complete_submit();
                    session.status.created(created.id);
                });
                info!(spot_id = %created.id, "spot created");
                self.navigator.go_to(&created.detail_path());
                Ok(created)
            }
            Err(err) => {
                let reason = format!("{err:#}");
                in_flight.finish(|session| {
                    session.form.abandon_submit();
                    session.status.failed(&reason);
                });
                error!(error = %reason, "spot creation failed");
                self.notifier
                    .alert(&format!("Could not create spot: {reason}"));
                Err(SubmitError::Service(err))
            }
        }
    }
}

/// Releases the in-flight flag even when the submit future is dropped.
struct InFlight<'a> {
    session: &'a Mutex<Session>,
    armed: bool,
}

impl InFlight<'_> {
    fn finish(mut self, apply: impl FnOnce(&mut Session)) {
        self.armed = false;
        apply(&mut lock(self.session));
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.session).form.abandon_submit();
        }
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
