pub mod collections;
pub mod config;
pub mod constants;
pub mod container;
pub mod error;
pub mod git;
pub mod portal;
pub mod process;
pub mod registry;

#[cfg(test)]
mod testing;

pub use error::{ExecutionError, PortalError, Result};
pub use portal::Portal;
