use steam_simple::{
    get_shell,
    shell::{LibraryRoute, StartupRoute},
};

fn main() -> Result<(), steam_simple::error::SteamSimpleError> {
    let shell = get_shell()?;

    let next = match shell.startup() {
        StartupRoute::SelectProfile(profiles) => {
            println!("Profiles ({}):", profiles.len());
            for profile in &profiles {
                println!(
                    "\t- {} (account: {})",
                    profile.display_name(),
                    profile.account_label()
                );
            }
            // Steam is not logged into here, only the configured library is looked up
            shell.library_route()
        }
        StartupRoute::Continue { profile, next } => {
            println!("Steam is running, welcome {}", profile.display_name());
            next
        }
    };

    let LibraryRoute::Library(path_library) = next else {
        println!("No library directory configured.");
        return Ok(());
    };

    let games = shell.games(&path_library);
    if games.is_empty() {
        println!("No games detected.")
    } else {
        println!("Detected games ({}):", games.len());

        for game in games {
            let update = if game.update_available { " [update available]" } else { "" };
            println!("\t- {}{update}", game.name);
        }
    }

    Ok(())
}
