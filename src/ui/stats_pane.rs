use crate::app::AppState;
use crate::ui::styles::{border_style, counter_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the lifetime achievements pane
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw(" Tasks done:  "),
            Span::styled(app.stats.done.to_string(), counter_style()),
        ]),
        Line::from(vec![
            Span::raw(" Pomodoros:   "),
            Span::styled(app.stats.pomos.to_string(), counter_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Achievements ", title_style())),
    );

    f.render_widget(paragraph, area);
}
