use model::command::{Command, CommandOption, CommandType};
use std::collections::HashMap;
use std::fmt;

const MAX_NAME_LENGTH: usize = 32;
const MAX_DESCRIPTION_LENGTH: usize = 100;
const MAX_OPTIONS: usize = 25;
const MAX_CHOICES: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    UniqueName,
    NameFormat,
    Description,
    OptionOrdering,
    NestingDepth,
    ChoiceExclusivity,
    Cardinality,
    ContextMenuShape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub rule: Rule,
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(rule: Rule, path: impl Into<String>, message: impl Into<String>) -> Violation {
        Violation {
            rule,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

// The container an option sequence belongs to. Groups may only appear
// directly beneath a command, and sub-commands may not appear beneath
// other sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Command,
    Group,
    SubCommand,
}

pub fn validate(catalog: &[Command]) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_unique_names(catalog, &mut violations);

    for command in catalog {
        check_command(command, &mut violations);
    }

    violations
}

fn check_unique_names(catalog: &[Command], violations: &mut Vec<Violation>) {
    let mut seen: HashMap<(&str, CommandType), usize> = HashMap::new();

    for (position, command) in catalog.iter().enumerate() {
        match seen.get(&(&*command.name, command.kind)) {
            Some(first) => violations.push(Violation::new(
                Rule::UniqueName,
                &*command.name,
                format!(
                    "duplicate {:?} command \"{}\": declared at catalog positions {} and {}",
                    command.kind, command.name, first, position
                ),
            )),
            None => {
                seen.insert((&*command.name, command.kind), position);
            }
        }
    }
}

fn check_command(command: &Command, violations: &mut Vec<Violation>) {
    let path = &*command.name;

    if command.kind.is_context_menu() {
        check_context_menu_name(&command.name, path, violations);

        if !command.description.is_empty() {
            violations.push(Violation::new(
                Rule::Description,
                path,
                "context menu commands must not have a description",
            ));
        }

        if !command.options.is_empty() {
            violations.push(Violation::new(
                Rule::ContextMenuShape,
                path,
                "context menu commands must not declare options",
            ));
        }

        return;
    }

    check_chat_input_name(&command.name, path, violations);
    check_description(&command.description, path, violations);
    check_options(&command.options, path, Level::Command, violations);
}

fn check_options(
    options: &[CommandOption],
    path: &str,
    level: Level,
    violations: &mut Vec<Violation>,
) {
    if options.len() > MAX_OPTIONS {
        violations.push(Violation::new(
            Rule::Cardinality,
            path,
            format!(
                "at most {} options are allowed per nesting level, found {}",
                MAX_OPTIONS,
                options.len()
            ),
        ));
    }

    if level == Level::Command {
        let has_sub_commands = options.iter().any(|o| o.kind.is_sub_command_like());
        let has_leaves = options.iter().any(|o| !o.kind.is_sub_command_like());

        if has_sub_commands && has_leaves {
            violations.push(Violation::new(
                Rule::NestingDepth,
                path,
                "sub-commands cannot be mixed with leaf options in the same sequence",
            ));
        }
    }

    let mut seen_optional = false;
    for option in options {
        if option.required && seen_optional {
            violations.push(Violation::new(
                Rule::OptionOrdering,
                format!("{}/{}", path, option.name),
                "required options must be declared before optional options",
            ));
        }

        if !option.required {
            seen_optional = true;
        }
    }

    for option in options {
        check_option(option, path, level, violations);
    }
}

fn check_option(
    option: &CommandOption,
    parent_path: &str,
    level: Level,
    violations: &mut Vec<Violation>,
) {
    let path = format!("{}/{}", parent_path, option.name);

    check_chat_input_name(&option.name, &path, violations);
    check_description(&option.description, &path, violations);

    if option.choices.len() > MAX_CHOICES {
        violations.push(Violation::new(
            Rule::Cardinality,
            &path,
            format!(
                "at most {} choices are allowed per option, found {}",
                MAX_CHOICES,
                option.choices.len()
            ),
        ));
    }

    if !option.choices.is_empty() && option.autocomplete {
        violations.push(Violation::new(
            Rule::ChoiceExclusivity,
            &path,
            "an option may declare choices or autocomplete, not both",
        ));
    } else if (!option.choices.is_empty() || option.autocomplete)
        && !option.kind.supports_choices()
    {
        violations.push(Violation::new(
            Rule::ChoiceExclusivity,
            &path,
            format!(
                "{:?} options do not support choices or autocomplete",
                option.kind
            ),
        ));
    }

    use model::command::CommandOptionType::*;
    match option.kind {
        SubCommand => {
            if level == Level::SubCommand {
                violations.push(Violation::new(
                    Rule::NestingDepth,
                    &path,
                    "sub-commands cannot be nested inside other sub-commands",
                ));
            } else if let Some(children) = &option.options {
                check_options(children, &path, Level::SubCommand, violations);
            }
        }
        SubCommandGroup => {
            if level != Level::Command {
                violations.push(Violation::new(
                    Rule::NestingDepth,
                    &path,
                    "sub-command groups may only appear at the top level of a command",
                ));
                return;
            }

            match &option.options {
                Some(children) if !children.is_empty() => {
                    for child in children {
                        if !child.kind.is_sub_command_like() {
                            violations.push(Violation::new(
                                Rule::NestingDepth,
                                format!("{}/{}", path, child.name),
                                "children of a sub-command group must be sub-commands",
                            ));
                        }
                    }

                    check_options(children, &path, Level::Group, violations);
                }
                _ => violations.push(Violation::new(
                    Rule::NestingDepth,
                    &path,
                    "a sub-command group must contain at least one sub-command",
                )),
            }
        }
        _ => {
            if option.options.as_ref().map_or(false, |o| !o.is_empty()) {
                violations.push(Violation::new(
                    Rule::NestingDepth,
                    &path,
                    "only sub-commands and sub-command groups may contain nested options",
                ));
            }
        }
    }
}

fn check_chat_input_name(name: &str, path: &str, violations: &mut Vec<Violation>) {
    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        violations.push(Violation::new(
            Rule::NameFormat,
            path,
            format!("names must be 1-{} characters long", MAX_NAME_LENGTH),
        ));
        return;
    }

    let valid = name
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_'));

    if !valid {
        violations.push(Violation::new(
            Rule::NameFormat,
            path,
            "names may only contain lowercase letters, digits, dashes and underscores",
        ));
    }
}

fn check_context_menu_name(name: &str, path: &str, violations: &mut Vec<Violation>) {
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        violations.push(Violation::new(
            Rule::NameFormat,
            path,
            format!(
                "context menu names must be 1-{} characters long",
                MAX_NAME_LENGTH
            ),
        ));
    }
}

fn check_description(description: &str, path: &str, violations: &mut Vec<Violation>) {
    if description.is_empty() || description.chars().count() > MAX_DESCRIPTION_LENGTH {
        violations.push(Violation::new(
            Rule::Description,
            path,
            format!(
                "a description of 1-{} characters is required",
                MAX_DESCRIPTION_LENGTH
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_only_violation(catalog: &[Command], rule: Rule) -> Violation {
        let violations = validate(catalog);

        assert_eq!(
            violations.len(),
            1,
            "expected exactly one violation, got {:?}",
            violations
        );
        assert_eq!(violations[0].rule, rule);

        violations[0].clone()
    }

    fn kb() -> Command {
        Command::chat_input("kb", "Search the knowledge base")
            .option(
                CommandOption::sub_command("search", "Search knowledge base articles")
                    .option(CommandOption::string("query", "Text to search for").required()),
            )
            .option(
                CommandOption::sub_command("list", "List knowledge base articles")
                    .option(CommandOption::string("section", "Only list this section")),
            )
    }

    #[test]
    fn test_valid_catalog_passes() {
        let catalog = vec![Command::chat_input("ping", "Check the bot is alive"), kb()];

        assert!(validate(&catalog).is_empty());
    }

    #[test]
    fn test_duplicate_name_and_kind() {
        let catalog = vec![
            Command::chat_input("ping", "Check the bot is alive"),
            kb(),
            Command::chat_input("ping", "Measure latency"),
        ];

        let violation = assert_only_violation(&catalog, Rule::UniqueName);
        assert!(violation.message.contains("positions 0 and 2"));
    }

    #[test]
    fn test_same_name_different_kind_is_allowed() {
        let catalog = vec![
            Command::chat_input("stats", "Show your stats"),
            Command::user_context("stats"),
        ];

        assert!(validate(&catalog).is_empty());
    }

    #[test]
    fn test_chat_input_name_format() {
        let catalog = vec![Command::chat_input("Ping", "Check the bot is alive")];
        assert_only_violation(&catalog, Rule::NameFormat);

        let catalog = vec![Command::chat_input("my command", "Has a space in the name")];
        assert_only_violation(&catalog, Rule::NameFormat);

        let catalog = vec![Command::chat_input(
            "a".repeat(33),
            "Thirty-three characters",
        )];
        assert_only_violation(&catalog, Rule::NameFormat);
    }

    #[test]
    fn test_context_menu_name_is_looser() {
        let catalog = vec![Command::user_context("View Trivia Stats")];

        assert!(validate(&catalog).is_empty());
    }

    #[test]
    fn test_missing_description() {
        let catalog = vec![Command::chat_input("ping", "")];
        assert_only_violation(&catalog, Rule::Description);
    }

    #[test]
    fn test_overlong_description() {
        let catalog = vec![Command::chat_input("ping", "a".repeat(101))];
        assert_only_violation(&catalog, Rule::Description);
    }

    #[test]
    fn test_option_missing_description() {
        let catalog = vec![Command::chat_input("echo", "Repeat a message")
            .option(CommandOption::string("message", "").required())];

        assert_only_violation(&catalog, Rule::Description);
    }

    #[test]
    fn test_context_menu_description_is_forbidden() {
        let mut command = Command::message_context("Save as Quote");
        command.description = "Saves this message as a quote".into();

        assert_only_violation(&[command], Rule::Description);
    }

    #[test]
    fn test_required_after_optional() {
        let catalog = vec![Command::chat_input("purge", "Bulk delete recent messages")
            .option(CommandOption::integer("count", "Number of messages to delete"))
            .option(CommandOption::user("user", "Only delete messages by this user").required())];

        let violation = assert_only_violation(&catalog, Rule::OptionOrdering);
        assert_eq!(violation.path, "purge/user");
    }

    #[test]
    fn test_required_after_optional_inside_sub_command() {
        let catalog = vec![Command::chat_input("kb", "Search the knowledge base").option(
            CommandOption::sub_command("search", "Search knowledge base articles")
                .option(CommandOption::integer("limit", "Maximum number of results"))
                .option(CommandOption::string("query", "Text to search for").required()),
        )];

        let violation = assert_only_violation(&catalog, Rule::OptionOrdering);
        assert_eq!(violation.path, "kb/search/query");
    }

    #[test]
    fn test_sub_command_inside_sub_command() {
        let catalog = vec![Command::chat_input("config", "Configure the bot").option(
            CommandOption::sub_command("set", "Set a value")
                .option(CommandOption::sub_command("nested", "Too deep")),
        )];

        let violation = assert_only_violation(&catalog, Rule::NestingDepth);
        assert_eq!(violation.path, "config/set/nested");
    }

    #[test]
    fn test_group_inside_group() {
        let catalog = vec![Command::chat_input("config", "Configure the bot").option(
            CommandOption::sub_command_group("settings", "Bot settings").option(
                CommandOption::sub_command_group("nested", "Too deep")
                    .option(CommandOption::sub_command("value", "A value")),
            ),
        )];

        let violation = assert_only_violation(&catalog, Rule::NestingDepth);
        assert_eq!(violation.path, "config/settings/nested");
    }

    #[test]
    fn test_group_with_leaf_child() {
        let catalog = vec![Command::chat_input("config", "Configure the bot").option(
            CommandOption::sub_command_group("settings", "Bot settings")
                .option(CommandOption::string("key", "Setting to change")),
        )];

        let violation = assert_only_violation(&catalog, Rule::NestingDepth);
        assert_eq!(violation.path, "config/settings/key");
    }

    #[test]
    fn test_empty_group() {
        let catalog = vec![Command::chat_input("config", "Configure the bot")
            .option(CommandOption::sub_command_group("settings", "Bot settings"))];

        assert_only_violation(&catalog, Rule::NestingDepth);
    }

    #[test]
    fn test_leaf_with_children() {
        let catalog = vec![Command::chat_input("echo", "Repeat a message").option(
            CommandOption::string("message", "Message to repeat")
                .option(CommandOption::string("nested", "Not allowed here")),
        )];

        let violation = assert_only_violation(&catalog, Rule::NestingDepth);
        assert_eq!(violation.path, "echo/message");
    }

    #[test]
    fn test_sub_commands_mixed_with_leaves() {
        let catalog = vec![Command::chat_input("kb", "Search the knowledge base")
            .option(CommandOption::sub_command("search", "Search articles"))
            .option(CommandOption::string("query", "Text to search for"))];

        let violation = assert_only_violation(&catalog, Rule::NestingDepth);
        assert_eq!(violation.path, "kb");
    }

    #[test]
    fn test_choices_and_autocomplete_are_exclusive() {
        let catalog = vec![Command::chat_input("quote", "Look up a saved quote").option(
            CommandOption::string("name", "Name of the quote")
                .choice("First", "first")
                .autocomplete(),
        )];

        assert_only_violation(&catalog, Rule::ChoiceExclusivity);
    }

    #[test]
    fn test_choices_on_unsupported_option_type() {
        let catalog = vec![Command::chat_input("toggle", "Toggle a setting").option(
            CommandOption::boolean("enabled", "New state").choice("On", 1),
        )];

        assert_only_violation(&catalog, Rule::ChoiceExclusivity);
    }

    #[test]
    fn test_choice_cardinality() {
        let over = (0..26).fold(
            CommandOption::integer("page", "Page to jump to"),
            |option, i| option.choice(format!("Page {}", i), i),
        );
        let catalog = vec![Command::chat_input("pages", "Jump to a page").option(over)];
        assert_only_violation(&catalog, Rule::Cardinality);

        let at_limit = (0..25).fold(
            CommandOption::integer("page", "Page to jump to"),
            |option, i| option.choice(format!("Page {}", i), i),
        );
        let catalog = vec![Command::chat_input("pages", "Jump to a page").option(at_limit)];
        assert!(validate(&catalog).is_empty());
    }

    #[test]
    fn test_option_cardinality() {
        let command = (0..26).fold(
            Command::chat_input("big", "Too many options"),
            |command, i| {
                command.option(CommandOption::string(
                    format!("option_{}", i),
                    "One of many",
                ))
            },
        );

        assert_only_violation(&[command], Rule::Cardinality);
    }

    #[test]
    fn test_context_menu_with_options() {
        let mut command = Command::user_context("View Trivia Stats");
        command.options = vec![CommandOption::string("detail", "Level of detail")];

        assert_only_violation(&[command], Rule::ContextMenuShape);
    }

    #[test]
    fn test_all_violations_are_reported() {
        let catalog = vec![
            Command::chat_input("Bad Name", "Upper case and a space"),
            Command::chat_input("ping", ""),
            Command::chat_input("ping", "Duplicate of the above"),
        ];

        let violations = validate(&catalog);
        let rules: Vec<Rule> = violations.iter().map(|v| v.rule).collect();

        assert!(rules.contains(&Rule::UniqueName));
        assert!(rules.contains(&Rule::NameFormat));
        assert!(rules.contains(&Rule::Description));
    }
}
