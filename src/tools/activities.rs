//! Activity table listing

use std::io::{self, Write};

use serde::Serialize;

use crate::energy::ActivityLevel;

/// One row of the activity factor table
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRow {
    pub key: &'static str,
    pub name: &'static str,
    pub factor: f64,
    pub description: &'static str,
}

/// All activity levels with their multipliers, in table order
pub fn list_activity_levels() -> Vec<ActivityRow> {
    ActivityLevel::all()
        .map(|level| ActivityRow {
            key: level.as_str(),
            name: level.display_name(),
            factor: level.factor(),
            description: level.description(),
        })
        .collect()
}

pub fn write_activity_table<W: Write>(out: &mut W) -> io::Result<()> {
    for row in list_activity_levels() {
        writeln!(
            out,
            "{:<18} {:>5}  {} ({})",
            row.key, row.factor, row.name, row.description
        )?;
    }
    Ok(())
}
