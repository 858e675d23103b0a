//! Post command handlers.

use std::sync::Arc;

use anyhow::{Result, bail};
use quill_core::config::Config;
use quill_core::gate::{self, Area};
use quill_core::{Post, PostDraft, PostListController, RemoteContentClient, SessionStore};

/// Builds a controller for the authenticated area, enforcing the session
/// gate first.
fn enter_content_area(config: &Config) -> Result<PostListController> {
    let session = Arc::new(SessionStore::open_default());
    if gate::evaluate(&session, Area::Content) == Some(Area::Login) {
        bail!("Not logged in. Run 'quill login' first.");
    }

    let base_url = config.resolve_base_url()?;
    Ok(PostListController::new(RemoteContentClient::new(
        base_url, session,
    )))
}

fn print_post(post: &Post) {
    println!("{}", post.title);
    println!("ID: {} | Author: {}", post.id, post.author);
    println!("{}", post.content);
    println!();
}

pub async fn list(config: &Config) -> Result<()> {
    let mut controller = enter_content_area(config)?;
    controller.toggle_view_all().await?;

    if controller.posts().is_empty() {
        println!("No posts available");
    } else {
        for post in controller.posts() {
            print_post(post);
        }
    }
    Ok(())
}

pub async fn search(config: &Config, id: u64) -> Result<()> {
    let mut controller = enter_content_area(config)?;
    controller.search(id).await;

    // A not-found or failed search is a valid empty result, not an error.
    if controller.posts().is_empty() {
        println!("No post found with ID {id}");
    } else {
        for post in controller.posts() {
            print_post(post);
        }
    }
    Ok(())
}

pub async fn create(config: &Config, title: String, author: String, content: String) -> Result<()> {
    let mut controller = enter_content_area(config)?;
    let created = controller
        .create(&PostDraft::new(title, author, content))
        .await?;
    println!("Created post {}.", created.id);
    Ok(())
}

pub async fn edit(
    config: &Config,
    id: u64,
    title: Option<String>,
    author: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let mut controller = enter_content_area(config)?;

    // The remote expects the full record, so start from the current one.
    controller.search(id).await;
    let Some(current) = controller.posts().first().cloned() else {
        bail!("Post {id} not found");
    };

    let draft = PostDraft::new(
        title.unwrap_or(current.title),
        author.unwrap_or(current.author),
        content.unwrap_or(current.content),
    );
    controller.edit(id, draft).await?;
    println!("Post updated successfully");
    Ok(())
}

pub async fn delete(config: &Config, id: u64) -> Result<()> {
    let mut controller = enter_content_area(config)?;
    controller.delete(id).await?;
    println!("Deleted post {id}.");
    Ok(())
}
