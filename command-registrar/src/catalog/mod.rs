use model::command::Command;

pub mod context;
pub mod extended;
pub mod general;

// Sources are concatenated in priority order; the validator rejects any
// (name, kind) collision between them before the catalog can be published.
pub fn assemble() -> Vec<Command> {
    let mut catalog = Vec::new();

    catalog.extend(general::commands());
    catalog.extend(extended::commands());
    catalog.extend(context::commands());

    catalog
}
