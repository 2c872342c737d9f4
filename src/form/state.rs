use crate::{
    domain::{FieldId, SessionUser},
    validation::{ErrorMap, ValidationEngine},
};

use super::{error::SubmitError, fields::FieldSet, payload::SubmissionPlan};

/// One authoring session of the spot form.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: FieldSet,
    errors: ErrorMap,
    engine: ValidationEngine,
    attempted_submit: bool,
    submitting: bool,
    dirty: bool,
}

impl FormState {
    pub fn new(engine: ValidationEngine) -> Self {
        let fields = FieldSet::new();
        let errors = engine.validate(&fields);
        Self {
            fields,
            errors,
            engine,
            attempted_submit: false,
            submitting: false,
            dirty: false,
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.fields.get(field)
    }

    /// Current violations, whether or not they are shown yet.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Violations the user should see: none until the first submit attempt.
    pub fn visible_errors(&self) -> Option<&ErrorMap> {
        self.attempted_submit.then_some(&self.errors)
    }

    pub fn messages_for(&self, field: FieldId) -> Vec<&str> {
        match self.visible_errors() {
            Some(errors) => errors.messages_for(field).collect(),
            None => Vec::new(),
        }
    }

    pub fn has_attempted_submit(&self) -> bool {
        self.attempted_submit
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn set_value(&mut self, field: FieldId, value: String) {
        self.fields.set(field, value);
        self.dirty = true;
    }

    pub(crate) fn clear_value(&mut self, field: FieldId) {
        self.fields.clear(field);
        self.dirty = true;
    }

    pub(crate) fn reset_fields(&mut self) {
        self.fields = FieldSet::new();
        self.dirty = false;
    }

    /// Rebuilds the error map from scratch.
    pub(crate) fn revalidate(&mut self) {
        self.errors = self.engine.validate(&self.fields);
    }

    /// Marks the attempt, validates once, builds the plan, then gates on the
    /// errors from that single pass.
    pub fn begin_submit(&mut self, user: &SessionUser) -> Result<SubmissionPlan, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        self.attempted_submit = true;
        self.revalidate();
        let plan = SubmissionPlan::build(&self.fields, user);
        if !self.errors.is_empty() {
            return Err(SubmitError::Blocked {
                issues: self.errors.len(),
            });
        }
        self.submitting = true;
        Ok(plan)
    }

    pub fn complete_submit(&mut self) {
        self.submitting = false;
        self.attempted_submit = false;
        self.reset_fields();
        self.revalidate();
    }

    /// Leaves input and the attempted flag untouched so the user can retry.
    pub fn abandon_submit(&mut self) {
        self.submitting = false;
    }
}
