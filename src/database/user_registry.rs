use std::collections::HashMap;

use crate::models::{UserId, UserProfile};

/// Perfis por id interno, mais o índice nome -> id usado na borda da API.
#[derive(Debug, Default)]
pub struct UserRegistry {
    profiles: HashMap<UserId, UserProfile>,
    by_key: HashMap<String, UserId>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the profile stored under `id`.
    pub fn put(&mut self, id: UserId, profile: UserProfile) {
        if let Some(previous) = self.profiles.get(&id) {
            let previous_key = previous.key();
            if previous_key != profile.key() && self.by_key.get(&previous_key) == Some(&id) {
                self.by_key.remove(&previous_key);
            }
        }
        self.by_key.insert(profile.key(), id);
        self.profiles.insert(id, profile);
    }

    pub fn get(&self, id: &UserId) -> Option<&UserProfile> {
        self.profiles.get(id)
    }

    /// No-op when absent; callers check existence to report "not found".
    pub fn remove(&mut self, id: &UserId) -> Option<UserProfile> {
        let profile = self.profiles.remove(id)?;
        let key = profile.key();
        if self.by_key.get(&key) == Some(id) {
            self.by_key.remove(&key);
        }
        Some(profile)
    }

    /// Resolves an external `First-Last` key to the internal id.
    pub fn resolve(&self, key: &str) -> Option<UserId> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[cfg(test)]
    pub(crate) fn ids(&self) -> impl Iterator<Item = &UserId> {
        self.profiles.keys()
    }
}
