//! Read-only family calendar.

use super::model::CalendarEvent;

#[derive(Debug, Default)]
pub struct Calendar {
    events: Vec<CalendarEvent>,
}

impl Calendar {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// First `n` events in seed order. Not filtered against today.
    pub fn upcoming(&self, n: usize) -> &[CalendarEvent] {
        &self.events[..n.min(self.events.len())]
    }
}
