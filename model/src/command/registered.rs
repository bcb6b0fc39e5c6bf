use crate::command::{CommandOption, CommandType};
use crate::{PermissionBitSet, Snowflake};
use serde::{Deserialize, Serialize};

/// A command as persisted by the registry, with its assigned identifiers.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisteredCommand {
    pub id: Snowflake,
    pub application_id: Snowflake,
    #[serde(rename = "type", default = "chat_input")]
    pub kind: CommandType,
    pub name: Box<str>,
    #[serde(default)]
    pub description: Box<str>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub default_member_permissions: Option<PermissionBitSet>,
    #[serde(default = "returns_true")]
    pub dm_permission: bool,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub version: Option<Snowflake>,
}

// The registry omits the type field for chat input commands registered
// before context menus existed.
fn chat_input() -> CommandType {
    CommandType::ChatInput
}

fn returns_true() -> bool {
    true
}
