use crate::domain::SpotId;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Submit to create your spot.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn submitting(&mut self) {
        self.message = "Creating spot...".to_string();
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn created(&mut self, id: SpotId) {
        self.message = format!("Spot {id} created");
    }

    pub fn failed(&mut self, reason: &str) {
        self.message = format!("Could not create spot: {reason}");
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
