//! # postify-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the
//! `BoardService`. Write endpoints redirect regardless of outcome: a
//! validation failure is a soft rejection and the visitor simply lands back
//! on the page they came from.

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;
use postify_core::{AppError, BoardService};
use postify_ui::{IndexTemplate, PostTemplate};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{internal, ApiError};

/// State shared across all actix workers.
pub struct AppState {
    pub board: BoardService,
}

// Every field defaults so that a form with a field missing outright still
// reaches the service, where it is soft-rejected like any empty input.
#[derive(Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize)]
pub struct NewReplyForm {
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub reason: Option<String>,
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html<T: Template>(template: T) -> Result<HttpResponse, ApiError> {
    let body = template.render().map_err(internal)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// The board index: every post, newest last, plus the new-post form.
pub async fn index(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let posts = state.board.list_posts().await?;
    let user = req
        .cookie("user")
        .map(|c| c.value().to_string())
        .unwrap_or_default();

    html(IndexTemplate {
        title: "Postify",
        posts: &posts,
        user: &user,
    })
}

/// A single post with its replies. Unknown and malformed ids both 404.
pub async fn view_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw = path.into_inner();
    let id = Uuid::parse_str(&raw).map_err(|_| ApiError(AppError::not_found("post", &raw)))?;

    let (post, replies) = state.board.post_detail(id).await?;
    html(PostTemplate {
        post: &post,
        replies: &replies,
    })
}

pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<NewPostForm>,
) -> Result<HttpResponse, ApiError> {
    match state
        .board
        .create_post(&form.name, &form.author, &form.content)
        .await
    {
        Ok(id) => log::info!("created post {id}"),
        Err(AppError::Rejected(reason)) => log::debug!("post rejected: {reason}"),
        Err(err) => return Err(err.into()),
    }
    Ok(see_other("/"))
}

pub async fn create_reply(
    state: web::Data<AppState>,
    form: web::Form<NewReplyForm>,
) -> Result<HttpResponse, ApiError> {
    // A garbled post_id is absorbed like any other rejection; the redirect
    // target then 404s on its own.
    if let Ok(post_id) = Uuid::parse_str(&form.post_id) {
        match state
            .board
            .create_reply(post_id, &form.author, &form.content)
            .await
        {
            Ok(id) => log::info!("created reply {id} on post {post_id}"),
            Err(AppError::Rejected(reason)) => log::debug!("reply rejected: {reason}"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(see_other(&format!("/post/{}", form.post_id)))
}

pub async fn report_post(
    state: web::Data<AppState>,
    form: web::Form<ReportForm>,
) -> Result<HttpResponse, ApiError> {
    if let Ok(post_id) = Uuid::parse_str(&form.post_id) {
        state.board.report_post(post_id, form.reason.clone()).await?;
    }
    Ok(see_other(&format!("/post/{}", form.post_id)))
}

/// Session collaborator glue: drop the visitor's display-name cookie.
pub async fn logout() -> HttpResponse {
    let mut cookie = Cookie::new("user", "");
    cookie.set_path("/");
    cookie.make_removal();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(cookie)
        .finish()
}
