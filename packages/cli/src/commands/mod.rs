mod generate;
mod init;
mod schema;

pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use schema::{schema, SchemaArgs};
