use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Tab pane   "),
        Span::raw("Space done   "),
        Span::raw("a add task   "),
        Span::raw("A add date   "),
        Span::raw("x delete   "),
        Span::raw("s start   "),
        Span::raw("p pause   "),
        Span::raw("r reset   "),
        Span::raw("w/b durations   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
