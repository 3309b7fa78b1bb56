//! CLI argument definitions using clap
//!
//! Commands:
//! - shopdb init
//! - shopdb item add|list|remove
//! - shopdb category add|list|remove
//! - shopdb order add|list|show|remove|summary
//! - shopdb user add|list|remove
//! - shopdb login --email <email> --password <password>
//! - shopdb next-id <users|items|categories|orders>
//!
//! Every command accepts `--config <path>`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::model::{DataFile, UserRole};
use crate::schema::Symbol;

/// shopdb - record files for a small shop
#[derive(Parser, Debug)]
#[command(name = "shopdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./shopdb.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and empty record files
    Init,

    /// Manage items
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Check a user's credentials
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Print the id the next record in a file would get
    NextId {
        /// users, items, categories or orders
        file: DataFile,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemAction {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: f64,
    },
    List,
    Remove {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    Add {
        #[arg(long)]
        name: String,
    },
    List,
    Remove {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderAction {
    Add {
        #[arg(long)]
        item: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        quantity: i64,
    },
    List,
    Show {
        #[arg(long)]
        id: i64,
    },
    Remove {
        #[arg(long)]
        id: i64,
    },
    /// Order count, units sold and revenue
    Summary,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    Add {
        /// CASHIER or MANAGER
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    List,
    Remove {
        #[arg(long)]
        id: i64,
    },
}

fn parse_role(s: &str) -> Result<UserRole, String> {
    UserRole::from_name(&s.to_uppercase()).ok_or_else(|| {
        let names: Vec<_> = UserRole::VARIANTS.iter().map(|r| r.name()).collect();
        format!("unknown role '{}', expected one of {}", s, names.join(", "))
    })
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
