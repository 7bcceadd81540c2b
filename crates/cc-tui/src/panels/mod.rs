pub mod agents;
pub mod console;
pub mod header;
pub mod infrastructure;
pub mod mcp;
pub mod metrics;
pub mod projects;
