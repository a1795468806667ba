pub mod config;
pub mod error;
pub mod llm;
pub mod relay;
pub mod server;
pub mod storage;
pub mod telegram;

pub use error::{Error, Result};
