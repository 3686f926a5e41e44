//! guildroster-player: load a saved editor page and preview, submit or
//! delete its roster.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guildroster_domain::Password;
use guildroster_player::config::{load_dotenv_from_repo_root, PASSWORD_CONFIRM_VAR, PASSWORD_VAR};
use guildroster_player::{
    ConsolePlatform, HttpRosterApi, PageSnapshot, PlayerConfig, RosterController,
};

const USAGE: &str = "Usage: guildroster-player <command> <page.json>\n\nCommands:\n  preview   print the roster payload and composition\n  submit    validate the password and save the roster\n  delete    validate the password and delete the group";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guildroster_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let command = args.next();
    let page = args.next();

    match (command.as_deref(), page) {
        (Some("preview"), Some(page)) => preview(Path::new(&page)),
        (Some("submit"), Some(page)) => submit(Path::new(&page)).await,
        (Some("delete"), Some(page)) => delete(Path::new(&page)).await,
        (Some(cmd @ ("preview" | "submit" | "delete")), None) => {
            anyhow::bail!("Missing page file for `{cmd}`\n\n{USAGE}")
        }
        (Some(cmd), _) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        (None, _) => anyhow::bail!(USAGE),
    }
}

fn controller(path: &Path, config: &PlayerConfig) -> anyhow::Result<RosterController> {
    let state = PageSnapshot::load(path)
        .with_context(|| format!("loading page {}", path.display()))?
        .into_form_state()
        .context("building form state")?;

    let api = Arc::new(HttpRosterApi::with_timeout(
        &config.base_url,
        config.timeout_secs,
    ));
    let platform = Arc::new(ConsolePlatform::new(&config.base_url));
    Ok(RosterController::new(state, api, platform))
}

fn preview(path: &Path) -> anyhow::Result<()> {
    let config = PlayerConfig::from_env();
    let ctrl = controller(path, &config)?;

    let state = ctrl.state();
    let document = state.document();
    for id in document.display_order() {
        let Some(row) = document.get(id) else {
            continue;
        };
        println!(
            "{:<30} {:<10} {:<6} {}",
            row.name().map(|name| name.as_str()).unwrap_or("(blank)"),
            row.role().label(),
            row.status().label(),
            state.realm_display(id).unwrap_or(row.realm().as_str()),
        );
    }

    let composition = document.composition();
    println!("{}", ctrl.payload_json()?);
    println!(
        "mains: {} (tanks {}, healers {}, melee {}, ranged {}), bench: {}, alts: {}",
        composition.mains(),
        composition.tanks,
        composition.healers,
        composition.melee,
        composition.ranged,
        composition.bench,
        composition.alts,
    );
    Ok(())
}

async fn submit(path: &Path) -> anyhow::Result<()> {
    let config = PlayerConfig::from_env();
    let password = require_password(config.password.clone(), PASSWORD_VAR)?;
    let mut ctrl = controller(path, &config)?;

    tracing::info!(group = %ctrl.state().group(), "Submitting roster");
    ctrl.on_submit(password).await?;
    Ok(())
}

async fn delete(path: &Path) -> anyhow::Result<()> {
    let config = PlayerConfig::from_env();
    let password = require_password(config.password.clone(), PASSWORD_VAR)?;
    let confirmation = require_password(config.password_confirmation.clone(), PASSWORD_CONFIRM_VAR)?;
    let mut ctrl = controller(path, &config)?;

    tracing::info!(group = %ctrl.state().group(), "Deleting group");
    ctrl.on_delete_group(password, confirmation).await?;
    Ok(())
}

fn require_password(password: Option<Password>, var: &str) -> anyhow::Result<Password> {
    password.with_context(|| format!("{var} must be set"))
}
