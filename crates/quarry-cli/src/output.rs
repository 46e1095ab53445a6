//! Rendering of command results.

use std::io::Write;

use anyhow::{Context, Result};
use quarry::Entity;

use crate::cli::Format;

/// Writes `entities` one per line (text) or as a JSON array.
pub fn write_list<W: Write>(out: &mut W, entities: &[Entity], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for entity in entities {
                writeln!(out, "{}", entity)?;
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(entities).context("serializing entities")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

/// Writes a single optional match. Text prints nothing when there is none;
/// JSON prints `null`.
pub fn write_one<W: Write>(out: &mut W, entity: Option<&Entity>, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            if let Some(entity) = entity {
                writeln!(out, "{}", entity)?;
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&entity).context("serializing entity")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
