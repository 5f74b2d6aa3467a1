//! Local profile mirror of upstream identities.

use tracing::{info, warn};

use storefront_core::result::AppResult;
use storefront_database::ProfileRepository;
use storefront_entity::profile::Profile;

use crate::identity::Identity;

/// Keeps the profiles table in step with verified upstream identities.
#[derive(Debug, Clone)]
pub struct ProfileSynchronizer {
    profiles: ProfileRepository,
}

impl ProfileSynchronizer {
    /// Create a synchronizer backed by the given repository.
    pub fn new(profiles: ProfileRepository) -> Self {
        Self { profiles }
    }

    /// Make sure a profile row exists for the identity and return it.
    ///
    /// Missing profiles are created with the default `user` role. When the
    /// identity's email has changed upstream, the mirror is refreshed on a
    /// best-effort basis; a failed refresh is logged and the stale profile
    /// returned, since the caller only needs the row to exist.
    pub async fn ensure_profile(&self, identity: &Identity) -> AppResult<Profile> {
        match self.profiles.find_by_id(identity.id).await? {
            Some(mut profile) => {
                if profile.email != identity.email {
                    match self.profiles.update_email(identity.id, &identity.email).await {
                        Ok(()) => profile.email = identity.email.clone(),
                        Err(e) => {
                            warn!(user_id = %identity.id, error = %e, "Profile email refresh failed");
                        }
                    }
                }
                Ok(profile)
            }
            None => {
                info!(user_id = %identity.id, "Creating profile for new identity");
                self.profiles.upsert(identity.id, &identity.email).await
            }
        }
    }
}
