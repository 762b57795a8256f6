use crate::app::AppState;
use crate::domain::Phase;
use crate::ui::styles::{
    border_style, break_phase_style, countdown_style, hint_style, title_style, work_phase_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the interval timer pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = &app.pomodoro;

    let phase_style = match timer.phase {
        Phase::Work => work_phase_style(),
        Phase::Break => break_phase_style(),
    };

    let state = if timer.running { "running" } else { "paused" };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format!("   {}", timer.display()), countdown_style())),
        Line::raw(""),
        Line::from(vec![
            Span::raw("   Phase: "),
            Span::styled(timer.phase.label(), phase_style),
            Span::styled(format!("  ({state})"), hint_style()),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            format!(
                "   work {} min · break {} min",
                timer.work_minutes(),
                timer.break_minutes()
            ),
            hint_style(),
        )),
        Line::raw(""),
        Line::from(Span::styled("   s start · p pause · r reset", hint_style())),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Pomodoro ", title_style())),
    );

    f.render_widget(paragraph, area);
}
