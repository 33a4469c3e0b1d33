use serde::Serialize;

use crate::error::BoardShellError;
use crate::platform::{EventBinder, EventKind, ListenerTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerRole {
    HeaderCheckbox,
    LoginLabel,
    StopControl,
    BackNavigation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Registration {
    id: ListenerId,
    role: ListenerRole,
    target: ListenerTarget,
    kind: EventKind,
}

/// Listeners installed on one page, kept so they can be detached together.
#[derive(Debug, Default)]
pub struct ListenerSet {
    next_id: u64,
    registrations: Vec<Registration>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        binder: &mut impl EventBinder,
        role: ListenerRole,
        target: ListenerTarget,
        kind: EventKind,
    ) -> Result<ListenerId, BoardShellError> {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        binder.bind(&target, kind, id)?;
        tracing::debug!(
            listener = id.0,
            ?role,
            listener_target = %target.describe(),
            event = kind.as_dom_event(),
            "listener attached"
        );
        self.registrations.push(Registration {
            id,
            role,
            target,
            kind,
        });
        Ok(id)
    }

    pub fn role_of(&self, id: ListenerId) -> Option<ListenerRole> {
        self.registrations
            .iter()
            .find(|registration| registration.id == id)
            .map(|registration| registration.role)
    }

    pub fn has_role(&self, role: ListenerRole) -> bool {
        self.registrations
            .iter()
            .any(|registration| registration.role == role)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn detach_all(&mut self, binder: &mut impl EventBinder) -> usize {
        let detached = self.registrations.len();
        for registration in self.registrations.drain(..) {
            binder.unbind(registration.id);
            tracing::debug!(
                listener = registration.id.0,
                role = ?registration.role,
                listener_target = %registration.target.describe(),
                event = registration.kind.as_dom_event(),
                "listener detached"
            );
        }
        detached
    }
}
