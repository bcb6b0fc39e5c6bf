use model::command::Command;
use model::{Permission, PermissionBitSet};

pub fn commands() -> Vec<Command> {
    vec![
        Command::user_context("View Trivia Stats").dm_permission(false),
        Command::message_context("Save as Quote")
            .default_member_permissions(PermissionBitSet::of(&[Permission::ManageMessages]))
            .dm_permission(false),
        Command::message_context("Report Message").dm_permission(false),
    ]
}
