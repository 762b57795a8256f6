use super::enums::Phase;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Shortest configurable interval
const MIN_MINUTES: u32 = 1;

/// Phase transition produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// A work interval ran down; the timer entered Break
    WorkFinished,
    /// A break ran down; the timer entered Work
    BreakFinished,
}

/// Work/break interval timer. In-memory only: it comes up reset to the work
/// phase on every launch, nothing about it is persisted.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    pub phase: Phase,
    pub running: bool,
    pub remaining_seconds: u32,
    work_minutes: u32,
    break_minutes: u32,
}

impl Pomodoro {
    pub fn new(work_minutes: u32, break_minutes: u32) -> Self {
        let work_minutes = work_minutes.max(MIN_MINUTES);
        let break_minutes = break_minutes.max(MIN_MINUTES);
        Self {
            phase: Phase::Work,
            running: false,
            remaining_seconds: work_minutes * 60,
            work_minutes,
            break_minutes,
        }
    }

    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Begin counting down. Starting an already-running timer is a no-op,
    /// so there is only ever one logical tick source.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
    }

    /// Stop counting down; the remaining time is retained as-is
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop, force the work phase, and reload the full work duration
    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Work;
        self.remaining_seconds = self.work_minutes * 60;
    }

    /// Update the work duration (clamped to >= 1 minute). Takes effect
    /// immediately when the timer sits paused in the work phase; otherwise
    /// on the next transition into work.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.work_minutes = minutes.max(MIN_MINUTES);
        if !self.running && self.phase == Phase::Work {
            self.remaining_seconds = self.work_minutes * 60;
        }
    }

    /// Update the break duration (clamped to >= 1 minute). Takes effect
    /// immediately when the timer sits paused in the break phase; otherwise
    /// on the next transition into break.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.break_minutes = minutes.max(MIN_MINUTES);
        if !self.running && self.phase == Phase::Break {
            self.remaining_seconds = self.break_minutes * 60;
        }
    }

    /// Advance the countdown by one second. Hitting zero rolls into the next
    /// phase within the same tick — exactly one transition, and the display
    /// never sees a negative value.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        if !self.running {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }
        match self.phase {
            Phase::Work => {
                self.phase = Phase::Break;
                self.remaining_seconds = self.break_minutes * 60;
                Some(PhaseChange::WorkFinished)
            }
            Phase::Break => {
                self.phase = Phase::Work;
                self.remaining_seconds = self.work_minutes * 60;
                Some(PhaseChange::BreakFinished)
            }
        }
    }

    /// Remaining time as zero-padded MM:SS
    pub fn display(&self) -> String {
        let minutes = self.remaining_seconds / 60;
        let seconds = self.remaining_seconds % 60;
        format!("{minutes:02}:{seconds:02}")
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES, DEFAULT_BREAK_MINUTES)
    }
}
