use command_registrar::{catalog, Config, Error, Registrar, Result, Scope};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        report(e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_envvar()?;

    let catalog = catalog::assemble();

    let scope = match config.guild_id {
        Some(guild_id) => Scope::Guild(guild_id),
        None => Scope::Global,
    };

    info!("Publishing {} commands to {} scope", catalog.len(), scope);

    let registrar = Registrar::new(config.application_id, config.bot_token);
    let registered = registrar.publish(&catalog, scope).await?;

    info!("Registry now holds {} commands", registered.len());

    Ok(())
}

fn report(e: Error) {
    match e {
        Error::Validation(violations) => {
            error!(
                "Catalog failed validation with {} violation(s):",
                violations.len()
            );

            for violation in &violations {
                error!("  {}", violation);
            }
        }
        Error::RateLimited { retry_after } => {
            error!("Rate limited by registry, re-run after {}s", retry_after);
        }
        e => error!("{}", e),
    }
}
