use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Duration, OffsetDateTime};

use expense_tracker::{NewExpense, insert_expense, open_database};

/// A utility for creating a database with sample expenses for manual testing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = open_database(output_path)?;

    println!("Creating sample expenses...");

    let today = OffsetDateTime::now_utc().date();
    let samples = [
        (0, 4.5, "Coffee", "Flat white"),
        (1, 62.35, "Groceries", "Weekly shop"),
        (3, 1450.0, "Rent", ""),
        (7, 12.0, "", "Parking"),
        (14, -20.0, "Refund", "Returned shoes"),
    ];

    for (days_ago, amount, category, note) in samples {
        let expense = NewExpense::new(today - Duration::days(days_ago), amount).note(note);
        let expense = if category.is_empty() {
            expense
        } else {
            expense.category(category)
        };

        insert_expense(expense, &conn)?;
    }

    println!("Success!");

    Ok(())
}
