use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form modal for the current UI mode
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let title_text = match app.ui_mode {
        UiMode::AddingTask => " Add Task ",
        UiMode::AddingAgenda => " Add Agenda Entry ",
        UiMode::EditingWorkMinutes => " Work Minutes ",
        UiMode::EditingBreakMinutes => " Break Minutes ",
        UiMode::Normal => return,
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    let text_label = match app.ui_mode {
        UiMode::AddingTask => "Task:",
        UiMode::AddingAgenda => "Description:",
        _ => "Minutes:",
    };
    lines.push(Line::raw(text_label));
    lines.push(field_line(&form.text, form.editing_field == 0));
    lines.push(Line::raw(""));

    if app.ui_mode == UiMode::AddingAgenda {
        lines.push(Line::raw("Date (YYYY-MM-DD, optional):"));
        lines.push(field_line(&form.when, form.editing_field == 1));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));
    } else {
        lines.push(Line::raw("Enter to save  ·  Esc to cancel"));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// A single input field line with a block cursor on the active field
fn field_line(value: &str, active: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if active {
        spans.push(Span::styled("█", modal_title_style()));
    }
    Line::from(spans)
}
