use crate::cli::parser::{Cli, Commands};
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::models::weekday::Weekday;
use crate::ui::messages;
use crate::utils::time::parse_time_range;

/// Edit one day of the weekly schedule and save the settings file.
pub fn handle(cli: &Cli, cmd: &Commands) -> AppResult<()> {
    if let Commands::Set {
        day,
        closed,
        open,
        lunch,
        no_lunch,
        dinner,
        no_dinner,
    } = cmd
    {
        //
        // 1. Parse weekday (mandatory)
        //
        let wd =
            Weekday::wd_from_str(day).ok_or_else(|| AppError::InvalidWeekday(day.to_string()))?;

        //
        // 2. Parse window ranges before touching the settings
        //
        let lunch_range = match lunch {
            Some(r) => Some(parse_time_range(r)?),
            None => None,
        };
        let dinner_range = match dinner {
            Some(r) => Some(parse_time_range(r)?),
            None => None,
        };

        //
        // 3. Apply to the loaded settings
        //
        let mut settings = Settings::load(cli.hours.as_deref())?;
        let entry = settings.opening_hours.day_mut(wd);

        if *closed {
            entry.enabled = false;
        }
        if *open {
            entry.enabled = true;
        }

        if let Some((start, end)) = lunch_range {
            entry.lunch.enabled = true;
            entry.lunch.start = start;
            entry.lunch.end = end;
        }
        if *no_lunch {
            entry.lunch.enabled = false;
        }

        if let Some((start, end)) = dinner_range {
            entry.dinner.enabled = true;
            entry.dinner.start = start;
            entry.dinner.end = end;
        }
        if *no_dinner {
            entry.dinner.enabled = false;
        }

        //
        // 4. Persist
        //
        settings.save(cli.hours.as_deref())?;
        messages::success(format!("Schedule updated for {}.", wd.display_name()));
    }

    Ok(())
}
