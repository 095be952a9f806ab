use anyhow::Result;
use clap::{Parser, ValueEnum};
use day_count::{difference, Date, LeapYearPolicy};
use std::io::{self, BufRead};

/// Failures of the input layer itself. Invalid date lines are not errors
/// here; they are reported and the line is re-requested.
#[derive(Debug, thiserror::Error)]
enum InputError {
    #[error("failed to read from stdin")]
    Read(#[from] io::Error),
    #[error("unexpected end of input: expected a date")]
    UnexpectedEof,
}

#[derive(Parser)]
#[command(name = "day-count")]
#[command(version)]
#[command(about = "Count the days between two calendar dates")]
#[command(
    long_about = "Reads two dates from stdin, one per line, in day/month/year \
form (dashes work too), and prints how many days after the first date the \
second one is. Invalid lines are reported on stderr and re-requested."
)]
struct Cli {
    /// Leap-year rule applied to both dates
    #[arg(long, value_enum, default_value = "naive")]
    leap: LeapRule,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LeapRule {
    /// Every year has 365 days
    None,
    /// Any year divisible by four is a leap year
    Naive,
}

impl From<LeapRule> for LeapYearPolicy {
    fn from(rule: LeapRule) -> Self {
        match rule {
            LeapRule::None => Self::Ignore,
            LeapRule::Naive => Self::NaiveModFour,
        }
    }
}

/// Reads lines until one parses as a valid date. Rejected lines are
/// reported on stderr and the next line is requested.
fn read_date(input: &mut impl BufRead, policy: LeapYearPolicy) -> Result<Date, InputError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof);
        }
        match Date::parse(line.trim_end_matches(['\n', '\r']), policy) {
            Ok(date) => return Ok(date),
            Err(err) => eprintln!("{err}, please enter date again"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let policy = LeapYearPolicy::from(cli.leap);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let first = read_date(&mut input, policy)?;
    let second = read_date(&mut input, policy)?;

    println!("{}", difference(first, second, policy));
    Ok(())
}
