//! Arena runtime: the orchestration layer around the combat core.
//!
//! `arena-runtime` owns everything the pure engine refuses to: player
//! profiles and their persistence seam, the per-player session registry,
//! opponent construction from content catalogs, and the post-fight reward
//! policy. An HTTP or console frontend drives [`service::ArenaService`];
//! the engine itself stays free of global state, so every fight is an
//! independent, seedable session.

pub mod error;
pub mod profile;
pub mod registry;
pub mod repository;
pub mod rewards;
pub mod service;

pub use error::RuntimeError;
pub use profile::{GladiatorProfile, StatAllocation};
pub use registry::SessionRegistry;
pub use repository::{InMemoryProfileRepo, PlayerToken, ProfileRepository, RepositoryError};
pub use rewards::{Difficulty, FightRewards};
pub use service::{ArenaService, FightReport, FightResult, OpponentSpec};
