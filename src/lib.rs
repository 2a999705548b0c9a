pub mod catalog;
pub mod config;
pub mod deserializers;
pub mod error;
pub mod schemas;
pub mod server;
pub mod thinking;
pub mod tools;

pub use catalog::{SEQUENTIAL_THINKING_TOOL, ToolCatalog, ToolDescriptor};
pub use config::Config;
pub use error::{Result, SequentialToolsError};
pub use server::SequentialToolsServer;
pub use thinking::{ThinkingEngine, ThoughtOutcome, ThoughtRecord};
