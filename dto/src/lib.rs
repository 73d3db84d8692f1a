pub mod action;
pub mod slot_field;
pub mod timezone;
