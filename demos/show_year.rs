//! example to show holidays as well as early closes of an exchange
use chrono::{Datelike, NaiveDate};
use std::env::args;
use tracing_subscriber::EnvFilter;
use tradecal::{get_calendar, TradingCalendar};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} CODE first [last]", args[0]);
        std::process::exit(2);
    }
    let code = &args[1];
    let first: i32 = args[2].parse().expect("first year must be a number");
    let last: i32 = match args.get(3) {
        Some(year) => year.parse().expect("last year must be a number"),
        None => first,
    };
    let cal = match get_calendar(code) {
        Ok(cal) => cal,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let (Some(first_date), Some(last_date)) = (
        NaiveDate::from_ymd_opt(first, 1, 1),
        NaiveDate::from_ymd_opt(last, 12, 31),
    ) else {
        eprintln!("year out of range");
        std::process::exit(2);
    };
    let mut holidays: Vec<NaiveDate> = Vec::new();
    let mut halfdays: Vec<NaiveDate> = Vec::new();
    for date in first_date.iter_days().take_while(|d| *d <= last_date) {
        if cal.is_holiday(date) && !cal.is_weekend(date) {
            holidays.push(date);
        } else if cal.is_early_close(date) {
            halfdays.push(date);
        }
    }
    println!("{} ({}) {}-{}", cal.name(), cal.timezone(), first_date.year(), last_date.year());
    println!("holidays: {:?}", holidays);
    println!("early closes at {}: {:?}", cal.early_close_time(), halfdays);
}
