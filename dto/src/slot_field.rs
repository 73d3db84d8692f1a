/// One of the inputs of a manual slot row.
///
/// Field names end with `[]` so that all rows of the form are submitted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Start,
    End,
    Email,
    Timezone,
}

/// HTML control used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Input { input_type: &'static str },
    Select,
}

impl SlotField {
    pub const ALL: [SlotField; 4] = [
        SlotField::Start,
        SlotField::End,
        SlotField::Email,
        SlotField::Timezone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SlotField::Start => "start_times[]",
            SlotField::End => "end_times[]",
            SlotField::Email => "manual_emails[]",
            SlotField::Timezone => "timezones[]",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotField::Start => "Start",
            SlotField::End => "End",
            SlotField::Email => "Email",
            SlotField::Timezone => "Timezone",
        }
    }

    pub fn control(&self) -> FieldControl {
        match self {
            SlotField::Start | SlotField::End => FieldControl::Input {
                input_type: "datetime-local",
            },
            SlotField::Email => FieldControl::Input {
                input_type: "email",
            },
            SlotField::Timezone => FieldControl::Select,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            SlotField::Email => Some("you@example.com"),
            _ => None,
        }
    }
}
