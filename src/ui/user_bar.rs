use crate::app::AppState;
use crate::ui::styles::{admin_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the user bar: app name, resolved username, the admin badge when
/// granted, and the logout link. The badge is display-only; authorization is
/// enforced upstream of this process.
pub fn render_user_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(" StudyHelper ", title_style())];

    match &app.user {
        None if app.user_rx.is_some() => {
            spans.push(Span::styled("· signing in…", hint_style()));
        }
        None => {
            spans.push(Span::styled("· offline", hint_style()));
        }
        Some(user) if user.username.is_empty() => {
            spans.push(Span::styled("· guest", hint_style()));
        }
        Some(user) => {
            spans.push(Span::raw(format!("· {}", user.username)));
        }
    }

    if app.show_admin() {
        spans.push(Span::styled("  [admin]", admin_style()));
    }

    if !app.logout_url.is_empty() {
        spans.push(Span::styled(
            format!("   logout: {}", app.logout_url),
            hint_style(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
