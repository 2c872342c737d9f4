use crate::domain::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Edit { field: FieldId, value: String },
    Clear { field: FieldId },
    Reset,
}

impl FormCommand {
    pub fn edit(field: FieldId, value: impl Into<String>) -> Self {
        FormCommand::Edit {
            field,
            value: value.into(),
        }
    }
}
