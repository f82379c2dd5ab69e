use crate::cli::parser::{Cli, Commands};
use crate::config::Settings;
use crate::core::evaluator;
use crate::errors::{AppError, AppResult};
use crate::models::weekday::Weekday;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::time::parse_required_hhmm;

/// Handle the `status` command: evaluate the schedule for now (or for the
/// explicit --day/--at instant) and print the badge.
pub fn handle(cli: &Cli, cmd: &Commands) -> AppResult<()> {
    if let Commands::Status { day, at, json } = cmd {
        let settings = Settings::load(cli.hours.as_deref())?;

        //
        // 1. Resolve the weekday (default: today)
        //
        let weekday = match day {
            Some(name) => Weekday::wd_from_str(name)
                .ok_or_else(|| AppError::InvalidWeekday(name.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Resolve the instant (default: now, as minutes since midnight)
        //
        let minutes = match at {
            Some(hhmm) => parse_required_hhmm(hhmm)?,
            None => date::now_minutes(),
        };

        //
        // 3. Evaluate
        //
        let verdict = evaluator::evaluate(&settings.opening_hours, weekday, minutes);

        if *json {
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            return Ok(());
        }

        println!(
            "{} : {}",
            settings.restaurant_name,
            crate::ui::messages::badge(verdict.is_open)
        );
        if !verdict.is_open {
            println!("{}{}{}", GREY, verdict.status_label, RESET);
            if let Some(note) = &settings.closure_note {
                println!("{}{}{}", GREY, note, RESET);
            }
        }
    }

    Ok(())
}
