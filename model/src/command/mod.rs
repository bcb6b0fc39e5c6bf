mod command;
pub use command::Command;

mod command_type;
pub use command_type::CommandType;

mod option;
pub use option::{CommandOption, CommandOptionType};

mod choice;
pub use choice::CommandOptionChoice;

mod registered;
pub use registered::RegisteredCommand;
