use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub published: bool,
}

// A Vec rather than a map so list order is insertion order.
pub type Db = Arc<RwLock<Vec<Post>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    Json(posts.clone())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<Post>,
) -> (StatusCode, Json<Post>) {
    let post = Post {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        description: input.description,
        published: input.published,
    };
    db.write().await.push(post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Post>, StatusCode> {
    let posts = db.read().await;
    posts.iter().find(|p| p.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<Post>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.iter_mut().find(|p| p.id == id).ok_or(StatusCode::NOT_FOUND)?;
    post.title = input.title;
    post.description = input.description;
    post.published = input.published;
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let index = posts.iter().position(|p| p.id == id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(posts.remove(index)))
}
