use derive_getters::Getters;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Body sent to the action endpoint: `{"choice": "..."}`.
#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct ActionRequest {
    choice: String,
}

impl ActionRequest {
    pub fn new(choice: String) -> Self {
        Self { choice }
    }

    pub fn to_json(&self) -> String {
        json!(self).to_string()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ReplyError {
    #[error("The server sent back an empty reply.")]
    Empty,
    #[error("The server reply is not a JSON object: {0}")]
    Malformed(String),
    #[error("The server reply does not contain any message.")]
    MissingMessage,
    #[error("The server reply message is not a string.")]
    InvalidMessage,
}

/// Reply of the action endpoint. Only `msg` is read; any other field is ignored.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct ActionReply {
    msg: String,
}

impl ActionReply {
    pub fn new(msg: String) -> Self {
        Self { msg }
    }

    pub fn parse(body: Option<&str>) -> Result<Self, ReplyError> {
        let body = match body {
            Some(body) if !body.trim().is_empty() => body,
            _ => return Err(ReplyError::Empty),
        };

        let value = serde_json::from_str::<Value>(body)
            .map_err(|error| ReplyError::Malformed(error.to_string()))?;
        let fields = match value {
            Value::Object(fields) => fields,
            value => return Err(ReplyError::Malformed(format!("unexpected value `{value}`"))),
        };

        match fields.get("msg") {
            None => Err(ReplyError::MissingMessage),
            Some(Value::String(msg)) => Ok(Self::new(msg.to_owned())),
            Some(_) => Err(ReplyError::InvalidMessage),
        }
    }
}

#[cfg(test)]
mod tests {
    mod action_request {
        use crate::action::ActionRequest;

        #[test]
        fn should_serialize_choice_verbatim() {
            let request = ActionRequest::new("book \"now\"".to_owned());
            assert_eq!(r#"{"choice":"book \"now\""}"#, request.to_json());
        }
    }

    mod parse {
        use crate::action::{ActionReply, ReplyError};
        use parameterized::{ide, parameterized};

        ide!();

        #[test]
        fn success() {
            let result = ActionReply::parse(Some(r#"{"msg": "Booked!"}"#));
            assert_eq!(Ok(ActionReply::new("Booked!".to_owned())), result);
        }

        #[test]
        fn success_with_extra_fields() {
            let result = ActionReply::parse(Some(r#"{"status": "ok", "msg": "Done", "id": 4}"#));
            assert_eq!("Done", result.unwrap().msg());
        }

        #[parameterized(
            body = {None, Some(""), Some("  \n")},
        )]
        fn fail_when_empty(body: Option<&str>) {
            assert_eq!(Err(ReplyError::Empty), ActionReply::parse(body));
        }

        #[parameterized(
            body = {"<html>Internal error</html>", "[\"msg\"]", "\"Booked!\"", "{\"msg\": "},
        )]
        fn fail_when_malformed(body: &str) {
            let result = ActionReply::parse(Some(body));
            assert!(
                matches!(result, Err(ReplyError::Malformed(_))),
                "{result:?}"
            );
        }

        #[test]
        fn fail_when_message_is_missing() {
            let result = ActionReply::parse(Some(r#"{"message": "Booked!"}"#));
            assert_eq!(Err(ReplyError::MissingMessage), result);
        }

        #[parameterized(
            body = {r#"{"msg": null}"#, r#"{"msg": 12}"#, r#"{"msg": ["Booked!"]}"#},
        )]
        fn fail_when_message_is_not_a_string(body: &str) {
            assert_eq!(Err(ReplyError::InvalidMessage), ActionReply::parse(Some(body)));
        }
    }
}
