//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tienda")]
#[command(author, version, about = "Product inventory for a small shop")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database file (overrides config and TIENDA_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to tienda.toml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Runs the interactive screen when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive product screen
    Interactive,

    /// List products, newest first
    List {
        /// Only products in this category (exact match)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Add a product
    Add(AddArgs),

    /// Change an existing product
    Edit(EditArgs),

    /// Delete a product
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Field values are taken as typed and go through the same checks as the
/// interactive form.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub stock: String,

    /// Defaults to "General" when blank
    #[arg(long, default_value = "")]
    pub category: String,
}

/// Omitted fields keep their stored values.
#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,

    #[arg(long)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["tienda"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_keeps_raw_values() {
        let cli = Cli::try_parse_from([
            "tienda", "--db", "shop.db", "add", "--name", "Mouse", "--price", "abc",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("shop.db")));
        match cli.command {
            Some(Command::Add(args)) => {
                assert_eq!(args.price, "abc");
                assert_eq!(args.stock, "0");
                assert_eq!(args.category, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_reaches_validation() {
        let cli = Cli::try_parse_from(["tienda", "add", "--name", "X", "--price", "-5"]).unwrap();
        match cli.command {
            Some(Command::Add(args)) => assert_eq!(args.price, "-5"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_delete_flags() {
        let cli = Cli::try_parse_from(["tienda", "delete", "3", "-y"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Delete { id: 3, yes: true })));
    }
}
