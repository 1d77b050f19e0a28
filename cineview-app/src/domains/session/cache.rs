//! Cached user record for fast first paint.
//!
//! Never the source of truth: the profile endpoint is re-validated on
//! startup, and a 401 wipes the cache.

use std::sync::Mutex;

use cineview_model::User;

/// Storage seam for the cached user record.
pub trait UserCache: Send + Sync {
    fn load(&self) -> Option<User>;
    fn store(&self, user: &User);
    fn clear(&self);
}

/// In-process cache, the default for the headless core.
#[derive(Debug, Default)]
pub struct MemoryUserCache(Mutex<Option<User>>);

impl UserCache for MemoryUserCache {
    fn load(&self) -> Option<User> {
        self.0.lock().expect("user cache lock poisoned").clone()
    }

    fn store(&self, user: &User) {
        *self.0.lock().expect("user cache lock poisoned") = Some(user.clone());
    }

    fn clear(&self) {
        *self.0.lock().expect("user cache lock poisoned") = None;
    }
}
