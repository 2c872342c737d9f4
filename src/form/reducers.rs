use super::{actions::FormCommand, state::FormState};

/// Single mutation path for form input. Every command is followed by a full
/// re-validation.
pub fn apply_command(state: &mut FormState, command: FormCommand) {
    match command {
        FormCommand::Edit { field, value } => state.set_value(field, value),
        FormCommand::Clear { field } => state.clear_value(field),
        FormCommand::Reset => state.reset_fields(),
    }
    state.revalidate();
}
