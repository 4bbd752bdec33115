//! Prints which LiveKit environment variables are set, masking secrets.
//!
//! Exits with status 1 when any of them is missing.

use voxa_server::env_check::{check_vars, render_report};

fn main() {
    // Exported variables are enough; a missing .env is not worth reporting.
    dotenvy::dotenv().ok();

    let statuses = check_vars(|name| std::env::var(name).ok());
    for line in render_report(&statuses) {
        println!("{line}");
    }

    if !statuses.iter().all(|status| status.is_set()) {
        std::process::exit(1);
    }
}
