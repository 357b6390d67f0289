pub mod affinity;
pub mod bonus;
pub mod draw;
pub mod play;
pub mod status;

use ct_mechanics::Attribute;

/// Parse an attribute argument into a CLI error message on failure.
fn parse_attribute(name: &str) -> Result<Attribute, String> {
    Attribute::parse(name).map_err(|e| {
        format!("{e} (expected one of: strength, dexterity, constitution, intelligence, wisdom, charisma)")
    })
}
