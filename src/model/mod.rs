//! Shop record types
//!
//! Every field is optional so a record can be assigned field by field
//! while parsing. File keys keep the camelCase names of the shop's
//! existing data files.

mod category;
mod item;
mod order;
mod user;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use category::Category;
pub use item::Item;
pub use order::Order;
pub use user::{User, UserRole};

/// The record files kept in a data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFile {
    Users,
    Items,
    Categories,
    Orders,
}

impl DataFile {
    /// All record files
    pub const ALL: [DataFile; 4] = [
        DataFile::Users,
        DataFile::Items,
        DataFile::Categories,
        DataFile::Orders,
    ];

    /// File name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DataFile::Users => "users.txt",
            DataFile::Items => "items.txt",
            DataFile::Categories => "categories.txt",
            DataFile::Orders => "orders.txt",
        }
    }

    /// Full path of this file under `data_dir`
    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    /// Lowercase name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFile::Users => "users",
            DataFile::Items => "items",
            DataFile::Categories => "categories",
            DataFile::Orders => "orders",
        }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataFile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataFile::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown data file '{}'", s))
    }
}
