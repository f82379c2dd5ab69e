use crate::cli::parser::Cli;
use crate::config::Settings;
use crate::errors::AppResult;
use crate::models::weekday::Weekday;
use crate::utils::colors::colorize_optional;
use crate::utils::describe_window;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// Handle the `week` command: print the whole weekly schedule as a table.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let settings = Settings::load(cli.hours.as_deref())?;

    println!("{}", bold(&settings.restaurant_name));
    println!();

    let mut table = Table::new(vec![
        Column {
            header: "Day".to_string(),
            width: 10,
        },
        Column {
            header: "Lunch".to_string(),
            width: 12,
        },
        Column {
            header: "Dinner".to_string(),
            width: 12,
        },
    ]);

    for wd in Weekday::ALL {
        let day = settings.opening_hours.day(wd);

        let (lunch, dinner) = if day.enabled {
            (
                describe_window(day.lunch.enabled, &day.lunch.start, &day.lunch.end),
                describe_window(day.dinner.enabled, &day.dinner.start, &day.dinner.end),
            )
        } else {
            // Day-level override: the windows are irrelevant
            ("closed".to_string(), "closed".to_string())
        };

        table.add_row(vec![
            wd.display_name().to_string(),
            colorize_optional(&lunch),
            colorize_optional(&dinner),
        ]);
    }

    print!("{}", table.render());

    if let Some(note) = &settings.closure_note {
        println!();
        println!("{}", note);
    }

    Ok(())
}
