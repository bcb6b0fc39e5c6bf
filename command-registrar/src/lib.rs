mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod catalog;
pub mod validate;

mod client;
pub use client::{Registrar, Scope};
