#![allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]

use clap::Parser;
use serde::Serialize;

use invtrack::auth;
use invtrack::cli::commands::{Cli, Command, InventoryCommand};
use invtrack::cli::{self, output};
use invtrack::config::{Config, OperatorEnv};
use invtrack::error::{InventoryError, Result};
use invtrack::operations;
use invtrack::store::validate::{parse_amount, parse_id, parse_quantity};

fn main() {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();
    cli::init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::HashPassword { password } => {
            let hash = auth::hash_password(&password)?;
            println!("{}", output::format_json(&serde_json::json!({ "hash": hash })));
            Ok(())
        }
        Command::Inventory(command) => {
            run_inventory(cli.user.as_deref(), cli.password.as_deref(), command)
        }
    }
}

fn run_inventory(
    user: Option<&str>,
    password: Option<&str>,
    command: InventoryCommand,
) -> Result<()> {
    let config = Config::from_cwd()?;
    login(&config, user, password)?;
    let store = config.store();
    let threshold = config.settings.store.low_stock_threshold;

    match command {
        InventoryCommand::Add {
            name,
            category,
            quantity,
            price,
        } => {
            let result = operations::add_product_input(&store, &name, &category, &quantity, &price)?;
            print(&config, &result);
        }
        InventoryCommand::SetQuantity { id, quantity } => {
            let result =
                operations::set_quantity(&store, parse_id(&id)?, parse_quantity(&quantity)?)?;
            print(&config, &result);
        }
        InventoryCommand::Increase { id, amount } => {
            let result =
                operations::increase_stock(&store, parse_id(&id)?, parse_amount(&amount)?)?;
            print(&config, &result);
        }
        InventoryCommand::Decrease { id, amount } => {
            let result =
                operations::decrease_stock(&store, parse_id(&id)?, parse_amount(&amount)?)?;
            print(&config, &result);
        }
        InventoryCommand::Delete { id } => {
            let result = operations::delete_product(&store, parse_id(&id)?)?;
            print(&config, &result);
        }
        InventoryCommand::List => print(&config, &operations::list_all(&store)?),
        InventoryCommand::Search { term } => print(&config, &operations::search_by_name(&store, &term)?),
        InventoryCommand::Category { name } => {
            print(&config, &operations::filter_by_category(&store, &name)?);
        }
        InventoryCommand::LowStock { threshold: t } => {
            print(&config, &operations::low_stock(&store, t.unwrap_or(threshold))?);
        }
        InventoryCommand::Total => {
            let total = operations::total_value(&store)?;
            print(&config, &serde_json::json!({ "total_value": total }));
        }
        InventoryCommand::Summary => print(&config, &operations::get_summary(&store, threshold)?),
    }
    Ok(())
}

/// Check the submitted login against the configured operator.
fn login(config: &Config, user: Option<&str>, password: Option<&str>) -> Result<()> {
    let operator = config.operator(&OperatorEnv::from_env())?;
    let (Some(user), Some(password)) = (user, password) else {
        return Err(InventoryError::MissingCredentials);
    };
    operator.authenticate(user, password)
}

fn print<T: Serialize>(config: &Config, result: &T) {
    println!("{}", output::render(result, config.settings.output.format));
}
