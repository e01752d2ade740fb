//! Customizing output with HumanOptions.
//!
//! Run with: cargo run --example custom_options

use serde_human::{human, to_string, to_string_with_options, Encoder, Field, HumanOptions, Struct};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let nested = human!({
        "fruits": ["apple", "pear"],
        "vegetables": { "root": ["carrot"], "leaf": ["kale", "chard"] }
    });

    println!("Default (\"*\", indent 2):");
    println!("{}", to_string(&nested)?);

    println!("Cycling symbols per depth:");
    let options = HumanOptions::new().with_list_symbols(["-", "+", "~"]);
    println!("{}", to_string_with_options(&nested, options)?);

    println!("Indent 4:");
    let options = HumanOptions::new().with_indent(4);
    println!("{}", to_string_with_options(&nested, options)?);

    // Fields can carry annotations for several consumers.
    let record = Struct::new()
        .with(Field::new("UserName", "alice").tag("human", "user").tag("log", "u"))
        .with(Field::new("Token", "s3cr3t").tag("log", "-"));

    println!("Tag name \"log\":");
    let options = HumanOptions::new().with_tag_name("log");
    println!("{}", to_string_with_options(&record, options)?);

    // Invalid options are all reported at once.
    let invalid = HumanOptions::new()
        .with_tag_name("")
        .with_list_symbols(Vec::<String>::new());
    if let Err(e) = Encoder::with_options(std::io::stdout(), invalid) {
        print!("Rejected options: {}", e);
    }

    Ok(())
}
