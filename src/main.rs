//! Entry point for the contact book shell.
//! Opens the database and hands control to the interactive menu.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use rolo::infra::cli::Menu;
use rolo::infra::db::Database;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Text-menu contact book backed by a local SQLite file", long_about = None)]
#[command(version)]
struct Args {
    /// Path of the contact database file
    #[arg(long, default_value = "contacts.db")]
    db: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let database = Database::open_at(&args.db)?;
    log::debug!("contact database ready at {}", args.db.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), database.contact_repo());
    menu.run()?;
    Ok(())
}
