//! # Tienda
//!
//! Product inventory screen for a small shop, backed by a local SQLite file.
//!
//! ## Module Organization
//! ```text
//! tienda/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── main.rs         ◄─── Binary entry, runtime + exit code
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── tienda.toml + TIENDA_* overrides
//! ├── controller/
//! │   ├── mod.rs      ◄─── ScreenController<S: ProductStore>
//! │   └── alert.rs    ◄─── Alert, AlertKind, Confirmation
//! ├── terminal.rs     ◄─── Rendering, interactive menu, one-shot commands
//! └── error.rs        ◄─── AppError for process-level failures
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod terminal;

use tienda_db::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::AppConfig;
use controller::{Alert, ScreenController};
use error::{AppError, AppResult};

/// Runs one invocation of the app.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load config (file → TIENDA_* env → --db flag)                      │
/// │  2. Open the SQLite file (WAL, created if missing)                     │
/// │  3. Controller start(): create table, seed if empty, load list        │
/// │     └── any failure: Fatal alert, exit non-zero                        │
/// │  4. Dispatch: interactive menu, or one subcommand                     │
/// │  5. Close the pool                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::load(cli.config)?;
    if let Some(path) = cli.db {
        config.database.path = Some(path);
    }

    let db_config = config.db_config()?;
    info!(path = %db_config.database_path.display(), "Database path determined");

    let db = match Database::new(db_config).await {
        Ok(db) => db,
        Err(e) => {
            terminal::show_alert(&Alert::fatal("Could not open the product database.", &e));
            return Err(e.into());
        }
    };

    let mut controller = ScreenController::new(db.products());
    if let Err(alert) = controller.start().await {
        terminal::show_alert(&alert);
        db.close().await;
        return Err(AppError::Rejected(alert.message));
    }

    let command = cli.command.unwrap_or(Command::Interactive);
    let result = terminal::run_command(command, &mut controller, &config).await;

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with `list --json` output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tienda=trace` - Show trace for tienda crates only
/// - Default: warnings only, the terminal is the user's screen
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,sqlx=error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
