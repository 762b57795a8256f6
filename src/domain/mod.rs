pub mod agenda;
pub mod enums;
pub mod pomodoro;
pub mod stats;
pub mod task;

pub use agenda::{Agenda, AgendaEntry};
pub use enums::{Pane, Phase, UiMode};
pub use pomodoro::{PhaseChange, Pomodoro, DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES};
pub use stats::Stats;
pub use task::{Task, TaskList};
