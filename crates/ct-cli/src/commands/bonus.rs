use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ct_mechanics::{DeckComposition, compute_bonus};

pub fn run(attribute: &str, successes: u32, json: bool) -> Result<(), String> {
    let attr = super::parse_attribute(attribute)?;
    let sheet = compute_bonus(attr, successes);

    if json {
        let out = serde_json::to_string_pretty(&sheet).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} ({}) with {} common successes: {}",
        attr.name().bold(),
        attr.native_name(),
        successes,
        DeckComposition::for_successes(successes)
    );

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Bonus", "Value"]);
    for stat in &sheet.stats {
        table.add_row(vec![stat.label.to_string(), stat.formatted_value()]);
    }
    println!("{table}");
    Ok(())
}
