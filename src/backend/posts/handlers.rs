/**
 * Post Handlers
 *
 * - `POST /posts` (protected) - form field `content`
 * - `POST /posts/{id}/delete` (protected) - author only
 * - `GET /posts/view` (public) - newest first
 *
 * Create and delete answer with a flash redirect to `/`. A missing post and
 * a post owned by someone else are reported with different messages; post
 * IDs are already public through `GET /posts/view`, so the difference
 * reveals nothing new.
 */

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::Json,
    Form,
};

use crate::backend::auth::ownership::ensure_can_mutate;
use crate::backend::error::BackendError;
use crate::backend::flash::Flash;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::store::Store;
use crate::shared::validation::present;
use crate::shared::{CreatePostForm, NewPost, Post};

/// Refusal shown to a caller deleting someone else's post
pub const NOT_OWNER_MESSAGE: &str = "You are not authorized to delete this post.";

/// Shown when the post to delete does not exist
pub const POST_NOT_FOUND_MESSAGE: &str = "Post not found.";

/// Create a post authored by the caller
///
/// # Errors
///
/// * `400 Bad Request` - Body is not a urlencoded form
/// * `500 Internal Server Error` - Storage failure (the write is rolled back)
pub async fn create_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    form: Result<Form<CreatePostForm>, FormRejection>,
) -> Result<Flash, BackendError> {
    let Form(form) = form?;
    let Some(content) = present(form.content) else {
        tracing::warn!("User {} submitted an empty post", user.user_id);
        return Ok(Flash::danger("Post content is required."));
    };

    let post = store
        .create_post(NewPost {
            content,
            created_by_id: user.user_id,
        })
        .await?;
    tracing::info!("User {} created post {}", user.user_id, post.id);

    Ok(Flash::success("Post created successfully!"))
}

/// Delete a post if the caller is its author
///
/// # Errors
///
/// * `400 Bad Request` - The ID is not an integer
/// * `500 Internal Server Error` - Storage failure (the write is rolled back)
pub async fn delete_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    post_id: Result<Path<i64>, PathRejection>,
) -> Result<Flash, BackendError> {
    let Path(post_id) = post_id?;
    let Some(post) = store.find_post(post_id).await? else {
        return Ok(Flash::danger(POST_NOT_FOUND_MESSAGE));
    };

    if let Err(refusal) = ensure_can_mutate(&post, user.user_id, NOT_OWNER_MESSAGE) {
        return Ok(Flash::danger(refusal.message()));
    }

    if !store.delete_post(post_id).await? {
        // Deleted by a concurrent request between the lookup and now
        return Ok(Flash::danger(POST_NOT_FOUND_MESSAGE));
    }
    tracing::info!("User {} deleted post {}", user.user_id, post_id);

    Ok(Flash::success("Post deleted successfully!"))
}

/// List all posts, newest first
pub async fn view_posts(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(store.list_posts().await?))
}
