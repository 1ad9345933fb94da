pub mod output;
mod shell;

pub use shell::{run_cli, run_session, WELCOME_BANNER};
