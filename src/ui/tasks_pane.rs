use crate::app::AppState;
use crate::domain::{Pane, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, focused_border_style, selected_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the to-do list pane
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Pane::Tasks;

    let items: Vec<ListItem> = app
        .tasks
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if focused && idx == app.selected_task {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let date = Local::now().format("%a %b %d");
    let title = format!(" To-Do ({}) — {} ", app.tasks.len(), date);

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

/// Create a single line for a task
/// Format: [x] finish flashcards
fn create_task_line(task: &Task) -> Line<'static> {
    let checkbox = if task.done { "[x] " } else { "[ ] " };
    let text_span = if task.done {
        Span::styled(task.text.clone(), done_style())
    } else {
        Span::raw(task.text.clone())
    };

    Line::from(vec![Span::raw(checkbox), text_span])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_line() {
        let task = Task::new("Write summary".to_string());
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[ ]"));
        assert!(line_str.contains("Write summary"));
    }

    #[test]
    fn test_done_task_line_is_checked() {
        let mut task = Task::new("Done thing".to_string());
        task.done = true;
        let line = create_task_line(&task);

        assert!(format!("{:?}", line).contains("[x]"));
    }
}
