mod db;
mod error;
mod helpers;
mod icon_resolver;
mod literal;
mod parser;
mod types;

pub use error::{Error, Result};
pub use icon_resolver::{resolve_device_icon, IconResolver};
pub use types::*;
