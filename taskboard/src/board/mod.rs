//! Board state commands: initialization and task creation

mod add;
mod init;

pub use add::AddTask;
