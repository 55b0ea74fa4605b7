//! Plain-text rendering of the controller's `View`.

use todo_core::{ItemView, View};

pub fn render(view: &View) -> String {
    let mut out = String::from("Todo List\n");
    if view.is_empty() {
        out.push_str("  (nothing to do)\n");
        return out;
    }
    for row in &view.items {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

pub fn render_row(row: &ItemView) -> String {
    let mark = if row.completed { 'x' } else { ' ' };
    let mut line = format!("  [{mark}] #{:<4} {}  ({})", row.id, row.text, row.status());
    if let Some(draft) = &row.draft {
        line.push_str(&format!("  editing: {draft}"));
    }
    line
}
