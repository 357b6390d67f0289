use comfy_table::{ContentArrangement, Table};

use ct_mechanics::bonus::affinity_table;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Charisma successes", "Affinity"]);

    for (min, max, affinity) in affinity_table() {
        let range = match max {
            Some(max) => format!("{min}-{max}"),
            None => format!("{min}+"),
        };
        table.add_row(vec![range, affinity.to_string()]);
    }

    println!("{table}");
    Ok(())
}
