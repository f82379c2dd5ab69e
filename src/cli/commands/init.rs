use crate::cli::parser::Cli;
use crate::config::Settings;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the settings file with the default weekly schedule
///    (standard service every day, Tuesday closed)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Settings::init_all(cli.hours.as_deref())?;

    println!("⚙️  Initializing ropensign…");
    println!("📄 Settings file : {}", path.display());
    messages::success("Default weekly schedule written.");

    Ok(())
}
