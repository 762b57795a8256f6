use crate::app::AppState;
use crate::domain::{AgendaEntry, Pane};
use crate::ui::styles::{
    border_style, date_style, default_style, focused_border_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the agenda pane, sorted ascending by date with undated entries
/// first
pub fn render_agenda_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Pane::Agenda;

    let items: Vec<ListItem> = app
        .agenda
        .sorted()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let line = create_agenda_line(entry);
            let style = if focused && idx == app.selected_agenda {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Agenda ({}) ", app.agenda.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                focused_border_style()
            } else {
                border_style()
            })
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for an agenda entry
/// Format: 2026-09-01 – exam registration  (undated entries show a dash)
fn create_agenda_line(entry: &AgendaEntry) -> Line<'static> {
    let date = if entry.when.is_empty() {
        "—".to_string()
    } else {
        entry.when.clone()
    };

    Line::from(vec![
        Span::styled(date, date_style()),
        Span::raw(" – "),
        Span::raw(entry.text.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_agenda_line_with_date() {
        let entry = AgendaEntry::new("Final exam".to_string(), "2026-09-01".to_string());
        let line_str = format!("{:?}", create_agenda_line(&entry));

        assert!(line_str.contains("2026-09-01"));
        assert!(line_str.contains("Final exam"));
    }

    #[test]
    fn test_create_agenda_line_without_date() {
        let entry = AgendaEntry::new("Sometime".to_string(), String::new());
        let line_str = format!("{:?}", create_agenda_line(&entry));

        assert!(line_str.contains("—"));
    }
}
