//! CLI command implementations
//!
//! Each invocation loads the configuration, builds the stores it needs,
//! runs one operation and prints one JSON response.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::identity::next_available_id;
use crate::model::{Category, DataFile, Item, Order, User};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::schema::Record;
use crate::service::{
    AuthService, InventoryService, OrderService, PasswordPolicy, ServiceError, UserService,
};
use crate::storage::{ReadPolicy, RecordStore};

use super::args::{CategoryAction, Cli, Command, ItemAction, OrderAction, UserAction};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (required)
    pub data_dir: String,

    /// Behavior on unreadable record files (optional, default "degrade")
    #[serde(default)]
    pub read_policy: ReadPolicy,

    /// Minimum log severity (optional, default "info")
    #[serde(default)]
    pub log_level: Severity,

    /// Minimum password length for new users (optional, default 8)
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

fn default_password_min_length() -> usize {
    PasswordPolicy::default().min_length
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        if self.password_min_length == 0 {
            return Err(CliError::config_error("password_min_length must be > 0"));
        }

        Ok(())
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Store for one record file in the data directory
    pub fn store<R: Record>(&self, file: DataFile) -> RecordStore<R> {
        RecordStore::with_policy(file.path_in(self.data_path()), self.read_policy)
    }

    fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.password_min_length,
        }
    }

    fn inventory(&self) -> InventoryService {
        InventoryService::new(self.store(DataFile::Items), self.store(DataFile::Categories))
    }

    fn orders(&self) -> OrderService {
        OrderService::new(self.store(DataFile::Orders))
    }

    fn users(&self) -> UserService {
        UserService::with_policy(self.store(DataFile::Users), self.password_policy())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Load configuration, run the command and print its response
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::load(&cli.config)?;
    Logger::set_min_severity(config.log_level);

    let shown = cli.config.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);

    let data = execute(&config, cli.command)?;
    write_response(data)
}

/// Run one command against the configured data directory
///
/// Returns the `data` payload of the response.
pub fn execute(config: &Config, command: Command) -> CliResult<Value> {
    match command {
        Command::Init => init(config),
        Command::Item { action } => item(config, action),
        Command::Category { action } => category(config, action),
        Command::Order { action } => order(config, action),
        Command::User { action } => user(config, action),
        Command::Login { email, password } => login(config, &email, &password),
        Command::NextId { file } => next_id(config, file),
    }
}

/// Create the data directory and any missing record files
///
/// Existing files are left untouched.
pub fn init(config: &Config) -> CliResult<Value> {
    let data_dir = config.data_path();

    fs::create_dir_all(data_dir).map_err(|e| {
        CliError::io_error(format!("Failed to create directory {:?}: {}", data_dir, e))
    })?;

    let mut created = Vec::new();
    for file in DataFile::ALL {
        let path: PathBuf = file.path_in(data_dir);
        if !path.exists() {
            fs::write(&path, "").map_err(|e| {
                CliError::io_error(format!("Failed to create {:?}: {}", path, e))
            })?;
            created.push(file.file_name());
        }
    }

    Ok(json!({
        "initialized": true,
        "data_dir": config.data_dir,
        "created": created
    }))
}

fn item(config: &Config, action: ItemAction) -> CliResult<Value> {
    let inventory = config.inventory();

    match action {
        ItemAction::Add {
            name,
            category,
            price,
        } => Ok(serde_json::to_value(inventory.add_item(&name, &category, price)?)?),
        ItemAction::List => Ok(serde_json::to_value(inventory.all_items()?)?),
        ItemAction::Remove { id } => {
            let name = inventory.remove_item(id)?;
            Ok(json!({"removed": id, "name": name}))
        }
    }
}

fn category(config: &Config, action: CategoryAction) -> CliResult<Value> {
    let inventory = config.inventory();

    match action {
        CategoryAction::Add { name } => Ok(serde_json::to_value(inventory.add_category(&name)?)?),
        CategoryAction::List => Ok(serde_json::to_value(inventory.all_categories()?)?),
        CategoryAction::Remove { id } => {
            let name = inventory.remove_category(id)?;
            Ok(json!({"removed": id, "name": name}))
        }
    }
}

fn order(config: &Config, action: OrderAction) -> CliResult<Value> {
    let orders = config.orders();

    match action {
        OrderAction::Add {
            item,
            price,
            quantity,
        } => Ok(serde_json::to_value(orders.add_order(&item, price, quantity)?)?),
        OrderAction::List => Ok(serde_json::to_value(orders.all_orders()?)?),
        OrderAction::Show { id } => Ok(serde_json::to_value(orders.find_order(id)?)?),
        OrderAction::Remove { id } => Ok(serde_json::to_value(orders.remove_order(id)?)?),
        OrderAction::Summary => Ok(serde_json::to_value(orders.summary()?)?),
    }
}

fn user(config: &Config, action: UserAction) -> CliResult<Value> {
    let users = config.users();

    match action {
        UserAction::Add {
            role,
            first_name,
            last_name,
            email,
            password,
        } => {
            let created = users.add_user(role, &first_name, &last_name, &email, &password)?;
            Ok(serde_json::to_value(created)?)
        }
        UserAction::List => Ok(serde_json::to_value(users.all_users()?)?),
        UserAction::Remove { id } => {
            let name = users.remove_user(id)?;
            Ok(json!({"removed": id, "name": name}))
        }
    }
}

/// Verify credentials; a wrong password is reported as a failed command
pub fn login(config: &Config, email: &str, password: &str) -> CliResult<Value> {
    let users = config.users();
    let mut session = AuthService::new(&users);

    if !session.login(email, password)? {
        return Err(CliError::command_failed("Invalid email or password"));
    }

    Ok(json!({
        "authenticated": true,
        "manager": session.is_manager(),
        "user": session.logged_user()
    }))
}

/// Next id that would be allocated in `file`
pub fn next_id(config: &Config, file: DataFile) -> CliResult<Value> {
    let id = match file {
        DataFile::Users => ids_in::<User>(config, file, |u| u.id)?,
        DataFile::Items => ids_in::<Item>(config, file, |i| i.id)?,
        DataFile::Categories => ids_in::<Category>(config, file, |c| c.id)?,
        DataFile::Orders => ids_in::<Order>(config, file, |o| o.id)?,
    };

    Ok(json!({"file": file.as_str(), "next_id": id}))
}

fn ids_in<R: Record>(config: &Config, file: DataFile, id_of: fn(&R) -> Option<i64>) -> CliResult<i64> {
    let records = config
        .store::<R>(file)
        .load_all()
        .map_err(ServiceError::from)?;

    Ok(next_available_id(records.iter().map(id_of)))
}
