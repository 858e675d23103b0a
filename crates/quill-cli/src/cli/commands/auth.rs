//! Auth command handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use quill_core::SessionStore;
use quill_core::auth::AuthController;
use quill_core::config::Config;
use quill_core::gate::{self, Area};

pub async fn login(config: &Config, username: &str, password: &str) -> Result<()> {
    let session = Arc::new(SessionStore::open_default());

    // Entering the login flow with a live session redirects away from it.
    if gate::evaluate(&session, Area::Login) == Some(Area::Content) {
        println!("Already logged in. Run 'quill logout' first.");
        return Ok(());
    }

    let base_url = config.resolve_base_url()?;
    let auth = AuthController::new(base_url, session);
    auth.login(username, password)
        .await
        .context("login failed")?;
    println!("Login successful.");
    Ok(())
}

pub async fn signup(config: &Config, username: &str, password: &str) -> Result<()> {
    let session = Arc::new(SessionStore::open_default());
    let base_url = config.resolve_base_url()?;

    let auth = AuthController::new(base_url, session);
    auth.signup(username, password)
        .await
        .context("signup failed")?;
    println!("Sign up successful. Run 'quill login' to authenticate.");
    Ok(())
}

pub fn logout() -> Result<()> {
    let session = SessionStore::open_default();
    session.clear().context("clear session")?;
    println!("Logged out.");
    Ok(())
}
