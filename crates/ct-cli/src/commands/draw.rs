use colored::Colorize;

use ct_mechanics::CardKind;
use ct_session::{GameTable, TableConfig};

pub fn run(attribute: &str, count: u32, config: TableConfig) -> Result<(), String> {
    let attr = super::parse_attribute(attribute)?;
    let mut table = GameTable::new(config);

    for i in 1..=count {
        match table.draw(attr) {
            Ok(card) => {
                let label = match card.kind {
                    CardKind::CriticalSuccess => card.to_string().green().bold(),
                    CardKind::Success => card.to_string().green(),
                    CardKind::Failure => card.to_string().red(),
                    CardKind::CriticalFailure => card.to_string().red().bold(),
                };
                println!(
                    "  {i:>3}. {label} ({} left)",
                    table.session().deck(attr).len()
                );
            }
            Err(e) => {
                println!("{}", e.to_string().yellow());
                break;
            }
        }
    }

    Ok(())
}
