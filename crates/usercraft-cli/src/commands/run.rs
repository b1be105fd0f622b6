//! Run command: the full workshop on stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use usercraft::Workshop;
use usercraft_config::UsercraftConfig;

use crate::style::SemanticStyle;

pub fn run(config: &UsercraftConfig) -> Result<()> {
    let workshop = Workshop::new(super::workshop_settings(config));

    println!("{}\n", "Usercraft workshop".header());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = workshop
        .run(&mut out)
        .context("Workshop run failed")?;

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!(
            "{} users in the map, {} in the vector, {} in the custom container",
            report.ages.len(),
            report.users.len(),
            report.roster.len()
        )
        .muted()
    )?;

    Ok(())
}
