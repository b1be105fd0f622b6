//! Users command: the final user list as a table or JSON.

use std::io;

use anyhow::{Context, Result};
use usercraft::{SortOrder, Workshop, query};
use usercraft_config::{OutputFormat, UsercraftConfig};

use crate::style::print_users_table;

pub fn run(config: &UsercraftConfig, format: OutputFormat, order: SortOrder) -> Result<()> {
    let workshop = Workshop::new(super::workshop_settings(config));
    let mut report = workshop
        .run(&mut io::sink())
        .context("Workshop run failed")?;

    query::sort_by_followers(&mut report.users, order);
    tracing::debug!(users = report.users.len(), ?order, ?format, "printing users");

    match format {
        OutputFormat::Table => print_users_table(&report.users),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.users)
                .context("Failed to serialize users")?;
            println!("{json}");
        }
    }

    Ok(())
}
