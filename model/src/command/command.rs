use crate::command::{CommandOption, CommandType};
use crate::PermissionBitSet;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Command {
    #[serde(rename = "type")]
    pub kind: CommandType,
    pub name: Box<str>,
    #[serde(default, skip_serializing_if = "str::is_empty")]
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<PermissionBitSet>,
    #[serde(default = "returns_true")]
    pub dm_permission: bool,
}

impl Command {
    fn new(kind: CommandType, name: impl Into<String>, description: impl Into<String>) -> Command {
        Command {
            kind,
            name: name.into().into_boxed_str(),
            description: description.into().into_boxed_str(),
            options: Vec::new(),
            default_member_permissions: None,
            dm_permission: true,
        }
    }

    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Command {
        Self::new(CommandType::ChatInput, name, description)
    }

    pub fn user_context(name: impl Into<String>) -> Command {
        Self::new(CommandType::User, name, "")
    }

    pub fn message_context(name: impl Into<String>) -> Command {
        Self::new(CommandType::Message, name, "")
    }

    pub fn option(mut self, option: CommandOption) -> Command {
        self.options.push(option);
        self
    }

    pub fn default_member_permissions(mut self, permissions: PermissionBitSet) -> Command {
        self.default_member_permissions = Some(permissions);
        self
    }

    pub fn dm_permission(mut self, allowed: bool) -> Command {
        self.dm_permission = allowed;
        self
    }
}

fn returns_true() -> bool {
    true
}
