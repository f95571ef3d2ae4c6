use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use uuid::Uuid;

const DEFAULT_CAPACITY: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    Fresh,
    InFlight,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    InFlight,
    Accepted,
}

// Tracks submission ids of rendered forms so a double-post inserts once.
pub struct SubmissionGuard {
    capacity: usize,
    inner: Mutex<Claimed>,
}

#[derive(Default)]
struct Claimed {
    order: VecDeque<Uuid>,
    ids: HashMap<Uuid, Entry>,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SubmissionGuard {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Claimed::default()),
        }
    }

    pub fn claim(&self, id: Uuid) -> Claim {
        let Ok(mut claimed) = self.inner.lock() else {
            return Claim::Fresh;
        };

        match claimed.ids.get(&id) {
            Some(Entry::InFlight) => return Claim::InFlight,
            Some(Entry::Accepted) => return Claim::Accepted,
            None => {}
        }

        claimed.ids.insert(id, Entry::InFlight);
        claimed.order.push_back(id);

        while claimed.order.len() > self.capacity {
            if let Some(oldest) = claimed.order.pop_front() {
                claimed.ids.remove(&oldest);
            }
        }
        Claim::Fresh
    }

    pub fn accept(&self, id: Uuid) {
        if let Ok(mut claimed) = self.inner.lock() {
            if let Some(entry) = claimed.ids.get_mut(&id) {
                *entry = Entry::Accepted;
            }
        }
    }

    pub fn release(&self, id: Uuid) {
        if let Ok(mut claimed) = self.inner.lock() {
            if claimed.ids.remove(&id).is_some() {
                claimed.order.retain(|other| *other != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_sees_in_flight() {
        let guard = SubmissionGuard::default();
        let id = Uuid::new_v4();

        assert_eq!(guard.claim(id), Claim::Fresh);
        assert_eq!(guard.claim(id), Claim::InFlight);
    }

    #[test]
    fn test_accepted_claim_is_reported_as_accepted() {
        let guard = SubmissionGuard::default();
        let id = Uuid::new_v4();

        guard.claim(id);
        guard.accept(id);
        assert_eq!(guard.claim(id), Claim::Accepted);
    }

    #[test]
    fn test_release_allows_retry() {
        let guard = SubmissionGuard::default();
        let id = Uuid::new_v4();

        assert_eq!(guard.claim(id), Claim::Fresh);
        guard.release(id);
        assert_eq!(guard.claim(id), Claim::Fresh);
    }

    #[test]
    fn test_accept_after_release_is_ignored() {
        let guard = SubmissionGuard::default();
        let id = Uuid::new_v4();

        guard.claim(id);
        guard.release(id);
        guard.accept(id);
        assert_eq!(guard.claim(id), Claim::Fresh);
    }

    #[test]
    fn test_oldest_claim_is_forgotten_past_capacity() {
        let guard = SubmissionGuard::with_capacity(2);
        let first = Uuid::new_v4();

        assert_eq!(guard.claim(first), Claim::Fresh);
        assert_eq!(guard.claim(Uuid::new_v4()), Claim::Fresh);
        assert_eq!(guard.claim(Uuid::new_v4()), Claim::Fresh);

        assert_eq!(guard.claim(first), Claim::Fresh);
    }
}
