//! Entry guard for the authenticated area.

use crate::session::SessionStore;

/// The two entry points the gate arbitrates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// The login flow
    Login,
    /// The authenticated content area
    Content,
}

/// Decides whether entering `current` requires a redirect.
///
/// No credential in the content area redirects to login; a credential on
/// the login entry point redirects into the content area. This is a pure
/// function of current credential presence and must be re-evaluated on
/// every entry and every credential change, not checked once.
pub fn evaluate(session: &SessionStore, current: Area) -> Option<Area> {
    let authenticated = session.get().is_some();
    match (current, authenticated) {
        (Area::Content, false) => Some(Area::Login),
        (Area::Login, true) => Some(Area::Content),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated_store(dir: &tempfile::TempDir) -> SessionStore {
        let store = SessionStore::new(dir.path().join("session.json"));
        store.set("tok").unwrap();
        store
    }

    fn anonymous_store(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_content_without_credential_redirects_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = anonymous_store(&dir);
        assert_eq!(evaluate(&store, Area::Content), Some(Area::Login));
    }

    #[test]
    fn test_login_with_credential_redirects_to_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = authenticated_store(&dir);
        assert_eq!(evaluate(&store, Area::Login), Some(Area::Content));
    }

    #[test]
    fn test_matching_states_do_not_redirect() {
        let dir = tempfile::tempdir().unwrap();
        let store = anonymous_store(&dir);
        assert_eq!(evaluate(&store, Area::Login), None);

        store.set("tok").unwrap();
        assert_eq!(evaluate(&store, Area::Content), None);
    }

    /// The gate follows credential changes: the same store evaluated after
    /// a clear flips the decision.
    #[test]
    fn test_reevaluation_after_logout() {
        let dir = tempfile::tempdir().unwrap();
        let store = authenticated_store(&dir);
        assert_eq!(evaluate(&store, Area::Content), None);

        store.clear().unwrap();
        assert_eq!(evaluate(&store, Area::Content), Some(Area::Login));
    }
}
