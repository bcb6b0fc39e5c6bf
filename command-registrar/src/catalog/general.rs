use model::command::{Command, CommandOption};

pub fn commands() -> Vec<Command> {
    vec![
        Command::chat_input("ping", "Check the bot is alive"),
        Command::chat_input("help", "Show a summary of the available commands"),
        Command::chat_input("kb", "Search the knowledge base")
            .option(
                CommandOption::sub_command("search", "Search knowledge base articles")
                    .option(CommandOption::string("query", "Text to search for").required())
                    .option(CommandOption::integer("limit", "Maximum number of results")),
            )
            .option(
                CommandOption::sub_command("list", "List knowledge base articles")
                    .option(CommandOption::string("section", "Only list this section")),
            ),
        Command::chat_input("quote", "Look up a saved quote")
            .option(CommandOption::string("name", "Name of the quote").required().autocomplete()),
    ]
}
