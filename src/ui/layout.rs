use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub user_area: Rect,
    pub tasks_area: Rect,
    pub agenda_area: Rect,
    pub stats_area: Rect,
    pub timer_area: Rect,
}

/// Create the main layout
/// - Top: keybindings bar (1 row), user bar (1 row)
/// - Content: Tasks (40%) | Agenda (30%) | right column (30%)
/// - Right column: Achievements above the timer
pub fn create_layout(area: Rect) -> MainLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(1), // User bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Tasks pane
            Constraint::Percentage(30), // Agenda pane
            Constraint::Percentage(30), // Stats + timer
        ])
        .split(vertical[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Achievements pane
            Constraint::Min(0),    // Timer pane
        ])
        .split(content[2]);

    MainLayout {
        keybindings_area: vertical[0],
        user_area: vertical[1],
        tasks_area: content[0],
        agenda_area: content[1],
        stats_area: right[0],
        timer_area: right[1],
    }
}

/// Create a centered modal area for input forms
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.user_area.height, 1);
        assert!(layout.tasks_area.width > layout.agenda_area.width);
        assert!(layout.stats_area.height > 0);
        assert!(layout.timer_area.height > 0);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 120, 40);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 10);
    }
}
