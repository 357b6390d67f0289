use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use ct_session::{Command, GameTable, TableConfig};

pub fn run(config: TableConfig) -> Result<(), String> {
    let seed = config.seed;
    let mut table = GameTable::new(config);

    println!("  {} Clock Tan-Tan table", "Opening".bold());
    match seed {
        Some(seed) => println!(
            "  Level {} | Points: {} | Seed: {seed}",
            table.session().level(),
            table.session().unspent_points()
        ),
        None => println!(
            "  Level {} | Points: {}",
            table.session().level(),
            table.session().unspent_points()
        ),
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        debug!(input, "table command");

        match table.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if matches!(Command::parse(input), Ok(Command::Quit)) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
