use crate::prelude::{println, *};
use sift_core::classify::{classify_tokens, Classification};

#[derive(Debug, clap::Parser)]
#[command(name = "classify")]
#[command(about = "Classify tokens from the command line")]
#[command(after_help = "EXAMPLES:
  # Classify a handful of tokens:
  sift classify a 1 334 4 R '$'

  # Same, but print the raw JSON record:
  sift classify --json a1b2")]
pub struct App {
    /// Tokens to classify
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Classifying {} token(s)", app.tokens.len());
        println!();
    }

    let classification = classify_tokens(&app.tokens);

    if app.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    print_classification(&classification);

    Ok(())
}

fn print_classification(classification: &Classification) {
    let mut table = new_table();

    table.add_row(prettytable::row![
        "Odd numbers",
        classification.odd_numbers.join(", ")
    ]);
    table.add_row(prettytable::row![
        "Even numbers",
        classification.even_numbers.join(", ")
    ]);
    table.add_row(prettytable::row![
        "Alphabets",
        classification.alphabets.join(", ")
    ]);
    table.add_row(prettytable::row![
        "Special characters",
        classification.special_characters.join(", ")
    ]);
    table.add_row(prettytable::row!["Sum", classification.sum]);
    table.add_row(prettytable::row![
        "Concat string",
        classification.concat_string
    ]);

    table.printstd();
}
