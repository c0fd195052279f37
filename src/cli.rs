pub mod command;
pub mod handlers;
pub mod run;

pub use run::{run_app, run_session};
