pub mod agenda_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod stats_pane;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;
pub mod user_bar;

use crate::app::AppState;
use agenda_pane::render_agenda_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use stats_pane::render_stats_pane;
use tasks_pane::render_tasks_pane;
use timer_pane::render_timer_pane;
use user_bar::render_user_bar;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_user_bar(f, app, layout.user_area);

    render_tasks_pane(f, app, layout.tasks_area);
    render_agenda_pane(f, app, layout.agenda_area);
    render_stats_pane(f, app, layout.stats_area);
    render_timer_pane(f, app, layout.timer_area);

    // Input form modal on top, when one is open
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
