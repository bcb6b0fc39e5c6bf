use model::command::{Command, CommandOption};
use model::{Permission, PermissionBitSet};

pub fn commands() -> Vec<Command> {
    let mut commands = game_commands();
    commands.extend(admin_commands());
    commands
}

fn game_commands() -> Vec<Command> {
    vec![
        Command::chat_input("trivia", "Start a trivia round")
            .option(
                CommandOption::string("category", "Question category")
                    .choice("General knowledge", "general")
                    .choice("Science", "science")
                    .choice("History", "history")
                    .choice("Gaming", "gaming"),
            )
            .option(CommandOption::integer("rounds", "Number of questions to ask")),
        Command::chat_input("leaderboard", "Show the trivia leaderboard")
            .option(CommandOption::boolean("global", "Rank players across all servers")),
    ]
}

fn admin_commands() -> Vec<Command> {
    vec![
        Command::chat_input("warn", "Warn a member")
            .default_member_permissions(PermissionBitSet::of(&[Permission::ModerateMembers]))
            .dm_permission(false)
            .option(CommandOption::user("user", "Member to warn").required())
            .option(CommandOption::string("reason", "Reason for the warning")),
        Command::chat_input("purge", "Bulk delete recent messages")
            .default_member_permissions(PermissionBitSet::of(&[Permission::ManageMessages]))
            .dm_permission(false)
            .option(
                CommandOption::integer("count", "Number of messages to delete").required(),
            )
            .option(CommandOption::channel("channel", "Channel to delete messages from")),
        Command::chat_input("config", "Configure the bot for this server")
            .default_member_permissions(PermissionBitSet::of(&[Permission::ManageGuild]))
            .dm_permission(false)
            .option(
                CommandOption::sub_command_group("trivia", "Trivia settings")
                    .option(
                        CommandOption::sub_command("channel", "Restrict trivia to one channel")
                            .option(
                                CommandOption::channel("channel", "Channel to allow trivia in")
                                    .required(),
                            ),
                    )
                    .option(
                        CommandOption::sub_command("reset", "Reset all trivia scores"),
                    ),
            )
            .option(
                CommandOption::sub_command_group("kb", "Knowledge base settings")
                    .option(
                        CommandOption::sub_command("role", "Set the editor role")
                            .option(
                                CommandOption::role("role", "Role allowed to edit articles")
                                    .required(),
                            ),
                    ),
            ),
    ]
}
