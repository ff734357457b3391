//! # TUI Application Core
//!
//! Main application state and screen navigation.

use crate::view::RecordListView;

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Reminders,
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Reminders => "Reminders",
            Screen::Help => "Help",
        }
    }

    pub fn key(&self) -> char {
        match self {
            Screen::Reminders => '1',
            Screen::Help => '?',
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Reminders, Screen::Help]
    }
}

/// Main application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Reminders list view
    pub reminders: RecordListView,
    /// Selected index in the reminders list
    pub selected_index: usize,
    /// Backend base URL, shown in the status bar
    pub api_base_url: String,
    /// Activity log (recent events)
    pub activity_log: Vec<String>,
}

impl App {
    pub fn new(reminders: RecordListView, api_base_url: impl Into<String>) -> Self {
        App {
            current_screen: Screen::Reminders,
            should_quit: false,
            reminders,
            selected_index: 0,
            api_base_url: api_base_url.into(),
            activity_log: Vec::new(),
        }
    }

    /// Mount the reminders view, starting its one fetch
    pub fn start(&mut self) {
        if self.reminders.mount() {
            self.add_activity("Loading reminders...".to_string());
        }
    }

    /// Apply a finished fetch, if any. Called once per loop iteration.
    pub fn on_tick(&mut self) {
        if self.reminders.poll() {
            let count = self.reminders.state().records().len();
            self.add_activity(format!("Loaded {} reminders", count));
            self.selected_index = self.selected_index.min(count.saturating_sub(1));
        }
    }

    /// Tear down views before exit
    pub fn shutdown(&mut self) {
        self.reminders.unmount();
        self.should_quit = true;
    }

    /// Switch to a different screen
    pub fn switch_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
    }

    /// Add an activity log entry
    pub fn add_activity(&mut self, msg: String) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.activity_log.push(format!("[{}] {}", timestamp, msg));

        // Keep only last 100 entries
        if self.activity_log.len() > 100 {
            self.activity_log.remove(0);
        }
    }

    /// Number of reminders currently shown
    pub fn reminder_count(&self) -> usize {
        self.reminders.state().records().len()
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.reminder_count().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.reminder_count().saturating_sub(1);
    }
}
