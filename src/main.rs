use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marina::config::{self, MarinaConfig};
use marina::inventory;
use marina::registry::{Registry, RegistryError};
use marina::shell::Shell;
use marina::store::Store;

#[derive(Parser)]
#[command(name = "marina")]
#[command(about = "Keep track of the boats at a marina and what they owe")]
struct Cli {
    /// Data file. Defaults to $MARINA_DATA_FILE, then the config file.
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Registry(RegistryCommand),
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum RegistryCommand {
    /// Start the interactive menu (the default)
    Shell,
    /// List every boat, sorted by name
    Inventory {
        /// Print JSON instead of the fixed-width listing
        #[arg(long)]
        json: bool,
    },
    /// Add a boat from a line such as "Jones,21,land,A,0.00"
    Add { line: String },
    /// Remove a boat by name
    Remove { name: String },
    /// Take a payment against a boat's balance
    Pay { name: String, amount: f64 },
    /// Charge one month of fees to every boat
    Month,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file location and contents
    Show,
    /// Remember a default data file
    SetFile { path: PathBuf },
}

/// Initialize tracing. Output goes to stderr so stdout stays clean for the menu.
fn init_tracing(filter: &str) {
    let filter = tracing_subscriber::EnvFilter::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MarinaConfig::load();
    init_tracing(&config.log_filter());

    match cli.command {
        Some(Commands::Config { action }) => run_config(config, action),
        Some(Commands::Registry(command)) => run_registry(&config, cli.file, command),
        None => run_registry(&config, cli.file, RegistryCommand::Shell),
    }
}

fn run_registry(
    config: &MarinaConfig,
    file: Option<PathBuf>,
    command: RegistryCommand,
) -> Result<()> {
    let path = config.resolve_data_file(file).with_context(|| {
        format!(
            "Usage: marina --file datafile.csv (or set {})",
            config::DATA_FILE_ENV
        )
    })?;

    let store = Store::new(path);
    let (mut registry, report) = store
        .load()
        .with_context(|| format!("Could not load file {}", store.path().display()))?;

    if report.skipped > 0 {
        tracing::warn!(skipped = report.skipped, "ignored malformed lines");
    }

    match command {
        RegistryCommand::Shell => {
            let stdin = io::stdin();
            let registry = Shell::new(registry, stdin.lock(), io::stdout()).run()?;
            save(&store, &registry)?;
        }
        RegistryCommand::Inventory { json } => {
            if json {
                let boats = serde_json::to_string_pretty(&registry.ordered_view())?;
                println!("{}", boats);
            } else {
                print!("{}", inventory::render_inventory(&registry));
            }
        }
        RegistryCommand::Add { line } => {
            let name = registry.add_line(&line)?.name.clone();
            save(&store, &registry)?;
            println!("Added {}", name);
        }
        RegistryCommand::Remove { name } => {
            let boat = registry
                .remove(&name)
                .ok_or_else(|| RegistryError::NotFound(name.clone()))?;
            save(&store, &registry)?;
            println!("Removed {}", boat.name);
        }
        RegistryCommand::Pay { name, amount } => {
            if !amount.is_finite() {
                anyhow::bail!("Invalid amount {}", amount);
            }
            let balance = registry.apply_payment(&name, amount)?;
            save(&store, &registry)?;
            println!("{} now owes ${:.2}", name, balance);
        }
        RegistryCommand::Month => {
            registry.charge_monthly_fees();
            save(&store, &registry)?;
            println!("Charged monthly fees to {} boats", registry.len());
        }
    }

    Ok(())
}

fn save(store: &Store, registry: &Registry) -> Result<()> {
    store
        .save(registry)
        .with_context(|| format!("Could not save file {}", store.path().display()))?;
    Ok(())
}

fn run_config(mut config: MarinaConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config::get_config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetFile { path } => {
            config.data_file = Some(path);
            let written = config.save()?;
            println!("Saved {}", written.display());
        }
    }
    Ok(())
}
