mod clipboard;
mod command;
mod run;
mod settings;
mod state;
mod types;


pub use state::App;
pub use types::{Command, CommandOutcome};
