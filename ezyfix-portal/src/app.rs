//! Application context
//!
//! One [`App`] owns the configuration, the typed API clients, and the
//! vendor session. Pages borrow it; only login/registration install a
//! session and only logout tears it down, so the bearer token and the
//! persisted file never drift apart.

use crate::config::AppConfig;
use crate::session::{SessionError, SessionStore, VendorSession};
use portal_client::{HttpClient, VerifyClient};
use shared::response::VendorId;

pub struct App {
    pub config: AppConfig,
    pub client: HttpClient,
    pub verify: VerifyClient,
    store: SessionStore,
    session: Option<VendorSession>,
}

impl App {
    /// Build the clients and restore a persisted session, if any.
    pub fn new(config: AppConfig) -> Self {
        let client_config = config.client_config();
        let mut client = client_config.build_http_client();
        let verify = client_config.build_verify_client();
        let store = SessionStore::new(config.session_path());

        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session file");
                None
            }
        };
        if let Some(session) = &session {
            client.set_token(&session.token);
            tracing::info!(vendor = %session.name, "Restored vendor session");
        }

        Self {
            config,
            client,
            verify,
            store,
            session,
        }
    }

    pub fn session(&self) -> Option<&VendorSession> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn vendor_id(&self) -> Option<&VendorId> {
        self.session.as_ref()?.vendor_id.as_ref()
    }

    /// Install the session issued by login or registration: persist it
    /// and arm the client with the bearer token.
    pub fn install_session(&mut self, session: VendorSession) -> Result<(), SessionError> {
        self.store.save(&session)?;
        self.client.set_token(&session.token);
        self.session = Some(session);
        Ok(())
    }

    /// Mutate and re-persist the current session (profile edits, cached
    /// image, last created coupon id).
    pub fn update_session(
        &mut self,
        mutate: impl FnOnce(&mut VendorSession),
    ) -> Result<(), SessionError> {
        if let Some(session) = self.session.as_mut() {
            mutate(session);
            self.store.save(session)?;
        }
        Ok(())
    }

    /// Logout teardown: remove the persisted session and the token.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.client.clear_token();
        self.session = None;
        tracing::info!("Vendor logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn app_in(dir: &std::path::Path) -> App {
        App::new(AppConfig {
            api_url: "http://localhost:5000".into(),
            verify_url: "http://localhost:5001".into(),
            payment_key: "rzp_test".into(),
            data_dir: PathBuf::from(dir),
            timeout: 5,
        })
    }

    #[test]
    fn session_lifecycle_installs_and_tears_down_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        assert!(!app.is_logged_in());
        assert!(app.client.token().is_none());

        app.install_session(VendorSession::from_login(
            "tok-1".into(),
            VendorId::from("7"),
        ))
        .unwrap();
        assert!(app.is_logged_in());
        assert_eq!(app.client.token(), Some("tok-1"));
        assert_eq!(app.vendor_id().unwrap().as_str(), "7");

        // A fresh App over the same data dir restores the session.
        let restored = app_in(dir.path());
        assert!(restored.is_logged_in());
        assert_eq!(restored.client.token(), Some("tok-1"));

        app.logout().unwrap();
        assert!(!app.is_logged_in());
        assert!(app.client.token().is_none());
        assert!(!app_in(dir.path()).is_logged_in());
    }

    #[test]
    fn update_session_persists_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.install_session(VendorSession::from_login("tok".into(), VendorId::from("1")))
            .unwrap();
        app.update_session(|s| s.last_created_coupon_id = Some("srv-42".into()))
            .unwrap();

        let restored = app_in(dir.path());
        assert_eq!(
            restored.session().unwrap().last_created_coupon_id.as_deref(),
            Some("srv-42")
        );
    }
}
