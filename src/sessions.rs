//! Per-visitor page state. Every browser gets its own [`Screen`], found again
//! through a random visitor id kept in a cookie.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use rand::Rng;
use tracing::debug;
use crate::view::Screen;

const VISITOR_ID_LENGTH: usize = 32;

struct Entry {
    screen:     Arc<Screen>,
    last_seen:  Instant
}

pub struct Sessions {
    entries:        Mutex<HashMap<String, Entry>>,
    idle_timeout:   Duration,
    max_visitors:   usize
}

impl Sessions {
    pub fn new(idle_timeout: Duration, max_visitors: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            idle_timeout,
            max_visitors: max_visitors.max(1)
        }
    }

    /**
    Returns the visitor id and screen for `id`.

    An unknown, expired or missing id gets a fresh id and an empty screen.
    */
    pub fn visit(&self, id: Option<&str>) -> (String, Arc<Screen>) {
        self.visit_at(id, Instant::now())
    }

    fn visit_at(&self, id: Option<&str>, now: Instant) -> (String, Arc<Screen>) {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let idle_timeout = self.idle_timeout;
        entries.retain(|_, entry| now.saturating_duration_since(entry.last_seen) < idle_timeout);

        if let Some(id) = id {
            if let Some(entry) = entries.get_mut(id) {
                entry.last_seen = now;
                return (id.to_string(), entry.screen.clone());
            }
        }

        while entries.len() >= self.max_visitors {
            let oldest = entries.iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(oldest) => {
                    debug!("Evicting the least recently seen visitor");
                    entries.remove(&oldest);
                },
                None => break
            }
        }

        let id = new_visitor_id();
        let screen = Arc::new(Screen::new());
        entries.insert(id.clone(), Entry { screen: screen.clone(), last_seen: now });
        (id, screen)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

fn new_visitor_id() -> String {
    rand::thread_rng()
        .sample_iter(rand::distributions::Alphanumeric)
        .take(VISITOR_ID_LENGTH)
        .map(char::from)
        .collect()
}
