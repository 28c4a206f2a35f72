//! Controller state: which service is active and what each one last reported.
//!
//! Pure data. The app applies the returned [`Activation`] and
//! [`CountUpdate`] to webviews and the badge; nothing here touches a window.

use std::collections::HashMap;

use chatty_common::{ChattyError, Result, ServiceId};

/// Sidebar badge text for a count: empty when there is nothing unread.
pub fn count_label(count: u32) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

/// Result of a successful `openClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub previous: ServiceId,
    pub active: ServiceId,
}

/// Result of a successful `reportNotificationCount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUpdate {
    pub client_id: ServiceId,
    pub count: u32,
    /// New sidebar label for `client_id`.
    pub label: String,
    /// Sum over every service, to publish to the app badge.
    pub total: u32,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    /// Configured services in sidebar order. Fixed after construction.
    services: Vec<ServiceId>,
    /// One entry per configured service, never added to or removed from.
    counts: HashMap<ServiceId, u32>,
    active: ServiceId,
}

impl ShellState {
    /// Build the state for a service table. Every count starts at 0 and
    /// the first service is active. Returns `None` for an empty table.
    pub fn new(services: Vec<ServiceId>) -> Option<Self> {
        let active = services.first()?.clone();
        let counts = services.iter().map(|id| (id.clone(), 0)).collect();
        Some(Self {
            services,
            counts,
            active,
        })
    }

    pub fn services(&self) -> &[ServiceId] {
        &self.services
    }

    pub fn active(&self) -> &ServiceId {
        &self.active
    }

    pub fn contains(&self, id: &ServiceId) -> bool {
        self.counts.contains_key(id)
    }

    pub fn count(&self, id: &ServiceId) -> Option<u32> {
        self.counts.get(id).copied()
    }

    pub fn label(&self, id: &ServiceId) -> Option<String> {
        self.count(id).map(count_label)
    }

    /// Sum of the last reported count of every service.
    pub fn total(&self) -> u32 {
        self.counts
            .values()
            .fold(0u32, |acc, &count| acc.saturating_add(count))
    }

    /// Sidebar selection flags, in sidebar order. Exactly one is `true`.
    pub fn sidebar_selection(&self) -> Vec<(&ServiceId, bool)> {
        self.services
            .iter()
            .map(|id| (id, *id == self.active))
            .collect()
    }

    /// Make `id` the active view.
    pub fn open_client(&mut self, id: &ServiceId) -> Result<Activation> {
        if !self.contains(id) {
            return Err(ChattyError::UnknownService(id.to_string()));
        }
        let previous = std::mem::replace(&mut self.active, id.clone());
        Ok(Activation {
            previous,
            active: id.clone(),
        })
    }

    /// Overwrite the count for `id` and recompute the total.
    pub fn report_count(&mut self, id: &ServiceId, count: u32) -> Result<CountUpdate> {
        let slot = self
            .counts
            .get_mut(id)
            .ok_or_else(|| ChattyError::UnknownService(id.to_string()))?;
        *slot = count;
        Ok(CountUpdate {
            client_id: id.clone(),
            count,
            label: count_label(count),
            total: self.total(),
        })
    }
}
