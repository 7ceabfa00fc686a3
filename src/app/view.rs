//! Plain-text rendering of the controller state.

use crate::app::controller::{Controller, Mode};
use crate::app::store::RestaurantStore;
use crate::domain::{Field, Restaurant};
use std::fmt::Write;

pub const EMPTY_LIST: &str = "No restaurants available.";

/// Renders the records as a table with a 1-based row column.
pub fn render_table(records: &[Restaurant]) -> String {
    let headers = ["#", "Name", "Address", "Contact"];
    let rows: Vec<[String; 4]> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                r.name.clone(),
                r.address.clone(),
                r.contact.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |cells: [&str; 4]| -> String {
        let mut s = String::new();
        for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                s.push_str(" | ");
            }
            // contact is right-aligned
            if i == 3 {
                let _ = write!(s, "{:>w$}", cell, w = w);
            } else {
                let _ = write!(s, "{:<w$}", cell, w = w);
            }
        }
        s.trim_end().to_string()
    };

    out.push_str(&line(headers));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(EMPTY_LIST);
        out.push('\n');
        return out;
    }
    for row in &rows {
        out.push_str(&line([&row[0], &row[1], &row[2], &row[3]]));
        out.push('\n');
    }
    out
}

/// Renders the open form, or `None` when no form is shown.
pub fn render_form<S: RestaurantStore>(controller: &Controller<S>) -> Option<String> {
    let (heading, action) = match controller.mode() {
        Mode::Idle => return None,
        Mode::CreateOpen => ("Add New Restaurant", "Add"),
        Mode::EditOpen(_) => ("Edit Restaurant", "Update"),
    };

    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", heading);
    push_messages(&mut out, controller);
    for field in Field::ALL {
        let _ = writeln!(out, "  {:<16} [{}]", field.label(), controller.draft().get(field));
        if let Some(msg) = controller.errors().field(field) {
            let _ = writeln!(out, "    ! {}", msg);
        }
    }
    let _ = writeln!(out, "  [{}]  [Cancel]", action);
    Some(out)
}

fn push_messages<S: RestaurantStore>(out: &mut String, controller: &Controller<S>) {
    if let Some(general) = controller.errors().general() {
        let _ = writeln!(out, "error: {}", general);
    }
    if let Some(notice) = controller.notice() {
        let _ = writeln!(out, "{}", notice);
    }
}

/// Full screen: the form when open, then the table. Messages go inside the
/// form when one is open, above the table otherwise.
pub fn render<S: RestaurantStore>(controller: &Controller<S>) -> String {
    let mut out = String::new();
    match render_form(controller) {
        Some(form) => out.push_str(&form),
        None => push_messages(&mut out, controller),
    }
    out.push_str(&render_table(controller.records()));
    out
}
