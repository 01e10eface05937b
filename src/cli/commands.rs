use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "invtrack",
    version,
    about = "Single-operator inventory tracker backed by a JSON file",
    after_help = "The inventory lives in ./inventory.json unless .invtrack/config.toml says \
                  otherwise. Every command except hash-password requires the operator login."
)]
pub struct Cli {
    /// Operator username
    #[arg(long, global = true, env = "INVTRACK_USER")]
    pub user: Option<String>,

    /// Operator password
    #[arg(long, global = true, env = "INVTRACK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Inventory(InventoryCommand),

    /// Print an Argon2 hash for auth.password_hash in the config file
    HashPassword {
        /// Password to hash
        password: String,
    },
}

/// Commands that require the operator login.
#[derive(Subcommand)]
pub enum InventoryCommand {
    /// Add a product; its ID is assigned automatically
    Add {
        /// Product name
        name: String,
        /// Product category
        category: String,
        /// Units in stock
        #[arg(allow_hyphen_values = true)]
        quantity: String,
        /// Unit price
        #[arg(allow_hyphen_values = true)]
        price: String,
    },

    /// Overwrite a product's quantity
    SetQuantity {
        /// Product ID
        id: String,
        /// New quantity
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Add units to a product's stock
    Increase {
        /// Product ID
        id: String,
        /// Units to add
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove units from a product's stock; never below zero
    Decrease {
        /// Product ID
        id: String,
        /// Units to remove
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },

    /// List all products with value and stock status
    List,

    /// Find products whose name contains a term (case-insensitive)
    Search {
        /// Search term
        term: String,
    },

    /// List products in a category (case-insensitive)
    Category {
        /// Category name
        name: String,
    },

    /// List products below a stock threshold
    LowStock {
        /// Threshold (default: store.low_stock_threshold, normally 5)
        #[arg(short, long)]
        threshold: Option<u64>,
    },

    /// Total value of all stock
    Total,

    /// Product count, total value and low-stock count
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_password_is_a_top_level_command() {
        let cli = Cli::try_parse_from(["invtrack", "hash-password", "pw"]).unwrap();
        assert!(matches!(cli.command, Command::HashPassword { ref password } if password == "pw"));
    }

    #[test]
    fn inventory_commands_are_flattened() {
        let cli = Cli::try_parse_from(["invtrack", "--user", "admin", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Inventory(InventoryCommand::List)
        ));
        assert_eq!(cli.user.as_deref(), Some("admin"));

        let cli = Cli::try_parse_from(["invtrack", "add", "Widget", "Hardware", "-1", "2.50"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Inventory(InventoryCommand::Add { ref quantity, .. }) if quantity == "-1"
        ));
    }
}
