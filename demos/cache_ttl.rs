use minutes_rs::{days, hours, months, resolve_alias, weeks, years, UnitCount};
use std::{env, process};

fn main() {
    // Usage: cargo run --example cache_ttl -- <unit> [count]
    // e.g. `cache_ttl hours 6`, `cache_ttl weeks 2.5` or just `cache_ttl day`
    let args: Vec<String> = env::args().collect();

    let unit = match args.get(1) {
        Some(unit) => unit.as_str(),
        None => {
            eprintln!("Usage: cache_ttl <unit> [count]");
            process::exit(1);
        }
    };

    let count = UnitCount::from(args.get(2).map(|count| count.as_str()));

    let minutes = match unit {
        "hours" => hours(count),
        "days" => days(count),
        "weeks" => weeks(count),
        "months" => months(count),
        "years" => years(count),
        singular => match resolve_alias(singular) {
            Ok(minutes) => minutes,
            Err(error) => {
                eprintln!("{error}");
                process::exit(2);
            }
        },
    };

    println!("{unit} -> {minutes} minutes");
}
