use std::{env::args, path::PathBuf};

use is_terminal::IsTerminal;
use steam_simple::{library::scan_library, paths::SteamPaths, profiles::get_profiles};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// NOTE: run with, e.g. `RUST_LOG=trace cargo run --example 02_env_logger -- <steam root> > logs.txt`
fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_line_number(true)
                // Don't output colours for logs not being printed to a terminal
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .with(EnvFilter::from_default_env())
        .init();

    let paths = args()
        .nth(1)
        .map(|root| SteamPaths::new(PathBuf::from(root)))
        .unwrap_or_default();

    get_profiles(&paths.login_users_vdf());
    scan_library(&paths.default_library_dir());
}
