use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandType {
    ChatInput = 1,
    User = 2,
    Message = 3,
}

impl CommandType {
    pub fn is_context_menu(&self) -> bool {
        matches!(self, CommandType::User | CommandType::Message)
    }
}
