use crate::command::CommandOptionChoice;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    pub name: Box<str>,
    #[serde(default, skip_serializing_if = "str::is_empty")]
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<CommandOptionChoice>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub autocomplete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CommandOption>>,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

impl CommandOptionType {
    pub fn is_sub_command_like(&self) -> bool {
        matches!(
            self,
            CommandOptionType::SubCommand | CommandOptionType::SubCommandGroup
        )
    }

    pub fn supports_choices(&self) -> bool {
        matches!(
            self,
            CommandOptionType::String | CommandOptionType::Integer | CommandOptionType::Number
        )
    }
}

impl CommandOption {
    fn new(
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CommandOption {
        CommandOption {
            kind,
            name: name.into().into_boxed_str(),
            description: description.into().into_boxed_str(),
            required: false,
            choices: Vec::new(),
            autocomplete: false,
            options: if kind.is_sub_command_like() {
                Some(Vec::new())
            } else {
                None
            },
        }
    }

    pub fn sub_command(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::SubCommand, name, description)
    }

    pub fn sub_command_group(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CommandOption {
        Self::new(CommandOptionType::SubCommandGroup, name, description)
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::String, name, description)
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::Integer, name, description)
    }

    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::Boolean, name, description)
    }

    pub fn user(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::User, name, description)
    }

    pub fn channel(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::Channel, name, description)
    }

    pub fn role(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::Role, name, description)
    }

    pub fn mentionable(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::Mentionable, name, description)
    }

    pub fn number(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::Number, name, description)
    }

    pub fn attachment(name: impl Into<String>, description: impl Into<String>) -> CommandOption {
        Self::new(CommandOptionType::Attachment, name, description)
    }

    pub fn required(mut self) -> CommandOption {
        self.required = true;
        self
    }

    pub fn choice(mut self, name: impl Into<String>, value: impl Into<Value>) -> CommandOption {
        self.choices.push(CommandOptionChoice::new(name, value));
        self
    }

    pub fn autocomplete(mut self) -> CommandOption {
        self.autocomplete = true;
        self
    }

    pub fn option(mut self, option: CommandOption) -> CommandOption {
        self.options.get_or_insert_with(Vec::new).push(option);
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
