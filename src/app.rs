use crate::domain::{
    Agenda, Pane, PhaseChange, Pomodoro, Stats, TaskList, UiMode, DEFAULT_BREAK_MINUTES,
    DEFAULT_WORK_MINUTES,
};
use crate::identity::UserInfo;
use crate::notifications;
use crate::store::Store;
use crate::ticker::SecondTicker;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use uuid::Uuid;

/// Input form state for the add/edit modals
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub text: String,
    pub when: String,
    pub editing_field: usize, // 0 = text, 1 = date (agenda form only)
}

impl InputFormState {
    pub fn with_text(text: String) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }
}

/// Main application state: one owned instance per collection plus the timer,
/// composed here for the lifetime of the process and passed by reference to
/// rendering and input handling.
pub struct AppState {
    pub store: Store,
    pub tasks: TaskList,
    pub agenda: Agenda,
    pub stats: Stats,
    pub pomodoro: Pomodoro,
    pub ticker: SecondTicker,
    /// None until the background identity fetch resolves
    pub user: Option<UserInfo>,
    pub user_rx: Option<Receiver<UserInfo>>,
    pub logout_url: String,
    pub ui_mode: UiMode,
    pub focus: Pane,
    pub selected_task: usize,
    pub selected_agenda: usize,
    pub input_form: Option<InputFormState>,
}

impl AppState {
    pub fn new(store: Store, work_minutes: u32, break_minutes: u32, logout_url: String) -> Self {
        let tasks = TaskList::load(&store);
        let agenda = Agenda::load(&store);
        let stats = Stats::load(&store);

        Self {
            store,
            tasks,
            agenda,
            stats,
            pomodoro: Pomodoro::new(work_minutes, break_minutes),
            ticker: SecondTicker::new(),
            user: None,
            user_rx: None,
            logout_url,
            ui_mode: UiMode::Normal,
            focus: Pane::Tasks,
            selected_task: 0,
            selected_agenda: 0,
            input_form: None,
        }
    }

    /// Feed elapsed wall time into the timer, one whole second at a time
    pub fn advance_time(&mut self, elapsed: Duration) {
        let seconds = self.ticker.advance(elapsed);
        for _ in 0..seconds {
            self.tick_second();
        }
    }

    fn tick_second(&mut self) {
        if let Some(change) = self.pomodoro.tick() {
            if change == PhaseChange::WorkFinished {
                self.stats.increment_pomodoro(&self.store);
            }
            notifications::notify_phase_started(self.pomodoro.phase.label());
        }
    }

    /// Poll the background identity fetch; at most one result ever arrives
    pub fn poll_user(&mut self) {
        let Some(rx) = self.user_rx.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(info) => self.user = Some(info),
            // Nothing yet; keep polling on the next frame
            Err(TryRecvError::Empty) => self.user_rx = Some(rx),
            // Fetch thread went away without a result; stay anonymous
            Err(TryRecvError::Disconnected) => {}
        }
    }

    /// Whether the admin affordance should be visible
    pub fn show_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }

    // --- selection ---

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.next();
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Pane::Tasks => self.tasks.len(),
            Pane::Agenda => self.agenda.len(),
        }
    }

    fn focused_selection_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Tasks => &mut self.selected_task,
            Pane::Agenda => &mut self.selected_agenda,
        }
    }

    pub fn move_selection_up(&mut self) {
        let selected = self.focused_selection_mut();
        *selected = selected.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.focused_len();
        let selected = self.focused_selection_mut();
        if *selected + 1 < len {
            *selected += 1;
        }
    }

    fn clamp_selections(&mut self) {
        self.selected_task = self.selected_task.min(self.tasks.len().saturating_sub(1));
        self.selected_agenda = self.selected_agenda.min(self.agenda.len().saturating_sub(1));
    }

    // --- tasks ---

    pub fn add_task(&mut self, text: &str) {
        if self.tasks.add(text, &self.store) {
            self.selected_task = 0;
        }
    }

    fn selected_task_id(&self) -> Option<Uuid> {
        self.tasks.entries().get(self.selected_task).map(|t| t.id)
    }

    /// Toggle the selected task's done flag. A false -> true flip counts
    /// toward the lifetime done counter; flipping back never decrements.
    pub fn toggle_selected_task(&mut self) {
        let Some(task) = self.tasks.entries().get(self.selected_task) else {
            return;
        };
        let id = task.id;
        let text = task.text.clone();

        if self.tasks.toggle_done(id, &self.store) {
            self.stats.increment_done(&self.store);
            notifications::notify_task_done(&text);
        }
    }

    pub fn remove_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.remove(id, &self.store);
            self.clamp_selections();
        }
    }

    // --- agenda ---

    pub fn add_agenda_entry(&mut self, text: &str, when: &str) {
        self.agenda.add(text, when, &self.store);
    }

    /// Remove the selected agenda entry. The selection indexes the sorted
    /// view, the same order the pane renders.
    pub fn remove_selected_agenda(&mut self) {
        let id = self.agenda.sorted().get(self.selected_agenda).map(|e| e.id);
        if let Some(id) = id {
            self.agenda.remove(id, &self.store);
            self.clamp_selections();
        }
    }

    /// Remove whatever is selected in the focused pane
    pub fn remove_selected(&mut self) {
        match self.focus {
            Pane::Tasks => self.remove_selected_task(),
            Pane::Agenda => self.remove_selected_agenda(),
        }
    }

    // --- timer controls ---

    pub fn start_timer(&mut self) {
        self.pomodoro.start();
    }

    pub fn pause_timer(&mut self) {
        self.pomodoro.pause();
    }

    pub fn reset_timer(&mut self) {
        self.pomodoro.reset();
    }

    // --- forms ---

    pub fn open_add_task_form(&mut self) {
        self.ui_mode = UiMode::AddingTask;
        self.input_form = Some(InputFormState::default());
    }

    pub fn open_add_agenda_form(&mut self) {
        self.ui_mode = UiMode::AddingAgenda;
        self.input_form = Some(InputFormState::default());
    }

    pub fn open_work_minutes_form(&mut self) {
        self.ui_mode = UiMode::EditingWorkMinutes;
        self.input_form = Some(InputFormState::with_text(
            self.pomodoro.work_minutes().to_string(),
        ));
    }

    pub fn open_break_minutes_form(&mut self) {
        self.ui_mode = UiMode::EditingBreakMinutes;
        self.input_form = Some(InputFormState::with_text(
            self.pomodoro.break_minutes().to_string(),
        ));
    }

    pub fn cancel_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Apply the open form. Duration fields that fail to parse fall back to
    /// the defaults before the >= 1 minute clamp.
    pub fn submit_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };

        match self.ui_mode {
            UiMode::AddingTask => self.add_task(&form.text),
            UiMode::AddingAgenda => self.add_agenda_entry(&form.text, &form.when),
            UiMode::EditingWorkMinutes => {
                let minutes = form.text.trim().parse().unwrap_or(DEFAULT_WORK_MINUTES);
                self.pomodoro.set_work_minutes(minutes);
            }
            UiMode::EditingBreakMinutes => {
                let minutes = form.text.trim().parse().unwrap_or(DEFAULT_BREAK_MINUTES);
                self.pomodoro.set_break_minutes(minutes);
            }
            UiMode::Normal => {}
        }
        self.ui_mode = UiMode::Normal;
    }
}
