use std::{
    env::args,
    io::{Write, stdout},
    path::PathBuf,
};

use steam_simple::{library::scan_library, paths::SteamPaths};

fn main() {
    let path_library = args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| SteamPaths::default().default_library_dir());

    let games = scan_library(&path_library);

    if games.is_empty() {
        println!("No games detected.")
    } else {
        let serialized = serde_json::to_string_pretty(&games).expect("failed to serialize games");
        let mut stdout = stdout().lock();
        writeln!(&mut stdout, "{serialized}").expect("failed to write to stdout");
    }
}
