use serde::Serialize;

use tzclock_core::catalog;
use tzclock_core::{ControlSet, config};

/// One row of `tzclock list` output.
#[derive(Serialize)]
struct Entry<'a> {
    number: usize,
    key: &'a str,
    label: &'a str,
    id: &'a str,
}

/// Prints every selectable timezone with its number and key.
pub fn execute(json: bool) {
    let config = config::load();
    let zones = catalog::list_timezones(config.zone_source());
    let controls = ControlSet::from_catalog(&zones);

    let entries: Vec<Entry<'_>> = controls
        .iter()
        .enumerate()
        .map(|(i, c)| Entry {
            number: i + 1,
            key: &c.key,
            label: &c.label,
            id: c.id.as_str(),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "{:>4}  {:<width$}  {}",
            entry.number, entry.key, entry.label
        );
    }
    println!("\n{} timezones", entries.len());
}
