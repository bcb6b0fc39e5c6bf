use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommandOptionChoice {
    pub name: Box<str>,
    pub value: Value, // string or int
}

impl CommandOptionChoice {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> CommandOptionChoice {
        CommandOptionChoice {
            name: name.into().into_boxed_str(),
            value: value.into(),
        }
    }
}
