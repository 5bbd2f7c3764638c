use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::Notifier;

/// Queues a flash message for the next render of one session.
pub struct FlashNotifier {
    flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>,
    session_id: String,
}

impl FlashNotifier {
    pub fn new(flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>, session_id: impl Into<String>) -> Self {
        Self {
            flash_store,
            session_id: session_id.into(),
        }
    }
}

impl Notifier for FlashNotifier {
    fn notify(&self, message: &str) {
        self.flash_store
            .lock()
            .unwrap()
            .entry(self.session_id.clone())
            .or_default()
            .push(message.to_string());
    }
}

/// Prints notifications straight to the terminal.
#[derive(Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("{}", yansi::Paint::new(message).green());
    }
}
