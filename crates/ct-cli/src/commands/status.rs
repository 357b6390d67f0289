use ct_session::table::format_status;
use ct_session::{GameTable, TableConfig};

pub fn run(config: TableConfig, json: bool) -> Result<(), String> {
    let table = GameTable::new(config);

    if json {
        let out = serde_json::to_string_pretty(table.session()).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("{}", format_status(table.session()));
    }
    Ok(())
}
