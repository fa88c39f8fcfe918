//! Interactive main menu shown when no subcommand is given

use gitsnap_core::Config;

use crate::commands::{ImportArgs, RestoreArgs};
use crate::prompt::Prompter;

/// Show the menu and dispatch to import, restore, or exit.
pub async fn menu(config: &Config) -> anyhow::Result<()> {
    println!("=============================================");
    println!("      GIT REPO MIGRATION TOOL");
    println!("=============================================");
    println!("1. IMPORT (Scan source -> Save JSON)");
    println!("2. RESTORE (Read JSON -> Clone -> Checkout)");
    println!("3. Exit");
    println!();

    let answer = Prompter::stdio().ask("Select option (1-3): ")?;

    match answer.as_str() {
        "1" => ImportArgs::default().execute(false, config).await,
        "2" => RestoreArgs::default().execute(false, config).await,
        _ => {
            println!("Exiting...");
            Ok(())
        }
    }
}
