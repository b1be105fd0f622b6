//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use usercraft::User;

use super::colors::SemanticStyle;

/// Creates a styled table of users.
pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = ["Name", "Age", "Followers"]
        .into_iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for user in users {
        table.add_row(vec![
            Cell::new(user.name()),
            Cell::new(user.age()).set_alignment(CellAlignment::Right),
            Cell::new(user.followers_count()).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Prints users as a formatted table with a count footer.
pub fn print_users_table(users: &[User]) {
    if users.is_empty() {
        println!("{}", "No users.".muted());
        return;
    }

    println!("{}", users_table(users));

    let count = users.len();
    let noun = if count == 1 { "user" } else { "users" };
    println!("{}", format!("({count} {noun})").muted());
}
