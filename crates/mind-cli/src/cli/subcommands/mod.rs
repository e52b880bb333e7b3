mod journal;
mod tools;

pub use journal::JournalCommands;
pub use tools::ToolCommands;
