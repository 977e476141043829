//! Interactive Coulomb force calculator.
//!
//! Reads two charges and their separation from stdin, reports the force and interaction
//! type, and optionally charts the force over a distance sweep.

mod config;
mod error;
mod format;
mod plot;
mod session;

use config::SessionConfig;
use session::Session;
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SessionConfig::default());
    let outcome = session.run();
    log::info!("Session finished: {outcome:?}");
}
