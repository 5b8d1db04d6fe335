//! Profile persistence seam.
//!
//! The service only ever talks to [`ProfileRepository`]; a relational
//! backend slots in behind the same trait. The in-memory implementation
//! backs tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::profile::GladiatorProfile;

/// Opaque per-player key. Token *resolution* (headers, auth) is the
/// frontend's problem; here a token is only a map key.
#[derive(Clone, Debug, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerToken(String);

impl PlayerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Errors from the persistence seam.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository lock poisoned")]
    LockPoisoned,
}

/// Storage for gladiator profiles, keyed by player token.
pub trait ProfileRepository: Send + Sync {
    fn save(&self, token: &PlayerToken, profile: &GladiatorProfile) -> Result<(), RepositoryError>;

    fn load(&self, token: &PlayerToken) -> Result<Option<GladiatorProfile>, RepositoryError>;

    fn delete(&self, token: &PlayerToken) -> Result<(), RepositoryError>;

    fn exists(&self, token: &PlayerToken) -> bool {
        matches!(self.load(token), Ok(Some(_)))
    }
}

/// In-memory implementation of [`ProfileRepository`].
///
/// Stores profiles in a `RwLock`ed map for testing and local development.
#[derive(Default)]
pub struct InMemoryProfileRepo {
    profiles: RwLock<HashMap<PlayerToken, GladiatorProfile>>,
}

impl InMemoryProfileRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for InMemoryProfileRepo {
    fn save(&self, token: &PlayerToken, profile: &GladiatorProfile) -> Result<(), RepositoryError> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        profiles.insert(token.clone(), profile.clone());
        Ok(())
    }

    fn load(&self, token: &PlayerToken) -> Result<Option<GladiatorProfile>, RepositoryError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(profiles.get(token).cloned())
    }

    fn delete(&self, token: &PlayerToken) -> Result<(), RepositoryError> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        profiles.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::GladiatorProfile;
    use arena_content::RaceCatalog;

    fn profile() -> GladiatorProfile {
        let races = RaceCatalog::builtin();
        GladiatorProfile::recruit("Ragnar", races.get("Human").unwrap()).unwrap()
    }

    #[test]
    fn save_load_delete_cycle() {
        let repo = InMemoryProfileRepo::new();
        let token = PlayerToken::from("tok-1");

        assert!(repo.load(&token).unwrap().is_none());
        repo.save(&token, &profile()).unwrap();
        assert!(repo.exists(&token));
        assert_eq!(repo.load(&token).unwrap().unwrap().name, "Ragnar");

        repo.delete(&token).unwrap();
        assert!(!repo.exists(&token));
    }

    #[test]
    fn tokens_are_isolated() {
        let repo = InMemoryProfileRepo::new();
        repo.save(&PlayerToken::from("a"), &profile()).unwrap();
        assert!(repo.load(&PlayerToken::from("b")).unwrap().is_none());
    }
}
