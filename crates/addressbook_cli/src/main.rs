//! `addressbook` command-line tool.
//!
//! # Usage
//!
//! ```bash
//! addressbook --db customers.db import customer.json
//! addressbook --db customers.db show CustID#1
//! addressbook --db customers.db delete-address CustID#1 AdrID#1
//! ```
//!
//! Settings also resolve from `ADDRESSBOOK_DB`, `ADDRESSBOOK_LOG_LEVEL` and
//! `ADDRESSBOOK_LOG_DIR`.

use addressbook_core::db::open_db;
use addressbook_core::{
    default_log_level, init_logging, AddressService, Customer, CustomerService, CustomerStore,
    SqliteCustomerStore,
};
use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "addressbook")]
#[command(version, about = "Inspect and edit customer address books")]
struct Cli {
    /// Customer document store file
    #[arg(long, env = "ADDRESSBOOK_DB")]
    db: PathBuf,

    /// Log level (`trace`, `debug`, `info`, `warn`, `error`)
    #[arg(long, env = "ADDRESSBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "ADDRESSBOOK_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored customer ids
    Customers,
    /// Insert or replace a customer document from a JSON file
    Import {
        /// Path to a customer JSON document
        file: PathBuf,
    },
    /// Print a customer's address book as JSON
    Show { customer_id: String },
    /// Delete one address from a customer's address book
    DeleteAddress {
        customer_id: String,
        address_id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let store = SqliteCustomerStore::new(&conn);

    match cli.command {
        Commands::Customers => {
            for id in store.list_customer_ids()? {
                writeln!(out, "{id}")?;
            }
        }
        Commands::Import { file } => {
            let document = std::fs::read_to_string(&file)?;
            let customer: Customer = serde_json::from_str(&document)?;
            store.put_customer(&customer)?;
            info!(
                "event=customer_import module=cli status=ok customer_id={} addresses={}",
                customer.id,
                customer.address_book.len()
            );
            writeln!(out, "imported customer {}", customer.id)?;
        }
        Commands::Show { customer_id } => {
            let service = AddressService::new(CustomerService::new(&store));
            let book = service.get_address_book(&customer_id)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&book)?)?;
        }
        Commands::DeleteAddress {
            customer_id,
            address_id,
        } => {
            let service = AddressService::new(CustomerService::new(&store));
            service.delete_address(&customer_id, &address_id)?;
            writeln!(out, "deleted address {address_id} of customer {customer_id}")?;
        }
    }

    Ok(())
}
