use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use walletview::analytics::{
    AnalyticsCommand, AnalyticsHandler, AnalyticsLayer, JsonLinesBridge, NoKeyDeriver,
};
use walletview::config::Config;
use walletview::exchange::Coin;
use walletview::logging::init_tracing;
use walletview::remote::RemoteValue;
use walletview::selectors::{coin_display, info, interest, lockbox, three_ds};
use walletview::state::{AppState, BaseAmount, StateStore};
use walletview::validation::{maximum_withdrawal_amount, minimum_withdrawal_amount};

/// Derive wallet view models from a state snapshot
#[derive(Parser)]
#[command(name = "walletview")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one view model
    View {
        /// JSON state snapshot
        #[arg(long)]
        state: PathBuf,

        #[command(subcommand)]
        view: View,
    },

    /// Replay analytics commands, printing bridge messages as JSON lines
    Analytics {
        /// JSON state snapshot
        #[arg(long)]
        state: PathBuf,

        /// JSON array of analytics commands
        #[arg(long)]
        commands: PathBuf,
    },
}

#[derive(Subcommand)]
enum View {
    /// 3DS challenge modal
    ThreeDs,
    /// Wallet info balances
    Info,
    /// Lockbox transaction list
    Lockbox,
    /// Interest withdrawal form, optionally validating an amount
    Withdrawal {
        #[arg(long)]
        coin: Coin,
        /// Amounts are entered in fiat instead of coin units
        #[arg(long)]
        fiat: bool,
        #[arg(long)]
        amount: Option<String>,
    },
    /// Format a base-unit amount
    Coin {
        #[arg(long)]
        coin: Coin,
        #[arg(long)]
        amount: u128,
        #[arg(long)]
        hide_ticker: bool,
    },
}

fn load_state(path: &Path) -> Result<AppState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file '{}'", path.display()))
}

/// Render a remote view: JSON on success, a status line otherwise.
fn render<T: Serialize>(view: RemoteValue<T>) -> Result<()> {
    let text = view.fold(
        || Ok("not asked".to_string()),
        || Ok("loading".to_string()),
        |error| Ok(format!("error: {}", error)),
        |value| serde_json::to_string_pretty(&value),
    )?;
    println!("{}", text);
    Ok(())
}

fn run_view(config: &Config, state: &AppState, view: View) -> Result<()> {
    let defaults = &config.defaults;
    match view {
        View::ThreeDs => render(three_ds::get_data(state, defaults))?,
        View::Info => render(info::get_data(state))?,
        View::Lockbox => render(lockbox::get_data(state, defaults))?,
        View::Coin {
            coin,
            amount,
            hide_ticker,
        } => render(coin_display::get_data(coin, BaseAmount(amount), hide_ticker))?,
        View::Withdrawal { coin, fiat, amount } => {
            let form = interest::get_data(state, coin, !fiat, defaults);
            let validated = match (form.success(), amount) {
                (Some(props), Some(amount)) => {
                    let messages: Vec<_> = [
                        maximum_withdrawal_amount(&amount, props),
                        minimum_withdrawal_amount(&amount, props),
                    ]
                    .into_iter()
                    .flatten()
                    .collect();
                    Some(messages)
                }
                _ => None,
            };
            render(form)?;
            for message in validated.into_iter().flatten() {
                eprintln!("{}: {}", message.id, message.render());
            }
        }
    };
    Ok(())
}

async fn run_analytics(config: &Config, state: AppState, commands: &Path) -> Result<()> {
    let content = std::fs::read_to_string(commands)
        .with_context(|| format!("Failed to read commands file '{}'", commands.display()))?;
    let commands: Vec<AnalyticsCommand> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse commands file '{}'", commands.display()))?;

    let (client, service) = AnalyticsLayer::new(config.analytics.channel_capacity);
    let handler = AnalyticsHandler::new(
        StateStore::new(state),
        Arc::new(JsonLinesBridge::new(std::io::stdout())),
        Arc::new(NoKeyDeriver),
        config.analytics.clone(),
    );
    let service_task = tokio::spawn(service.run(handler));

    let mut failures = 0usize;
    for command in commands {
        let name = command.name();
        if let Err(err) = client.send(command).await {
            eprintln!("{}: {}", name, err);
            failures += 1;
        }
    }

    drop(client);
    service_task.await.context("Analytics service panicked")?;

    if failures > 0 {
        anyhow::bail!("{} analytics command(s) failed", failures);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::View { state, view } => {
            let state = load_state(&state)?;
            run_view(&config, &state, view)
        }
        Command::Analytics { state, commands } => {
            let state = load_state(&state)?;
            run_analytics(&config, state, &commands).await
        }
    }
}
