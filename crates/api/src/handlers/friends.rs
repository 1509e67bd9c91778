use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use db::{repository::friends as friend_repo, Friend, FriendFields};

use crate::{ApiError, DbSession};

/// Body of a successful `POST /create_friend`.
#[derive(Serialize)]
pub struct CreatedFriend {
    pub friend: Friend,
}

pub async fn create(
    DbSession(mut conn): DbSession,
    Query(fields): Query<FriendFields>,
) -> Result<(StatusCode, Json<CreatedFriend>), ApiError> {
    let friend = friend_repo::create_friend(&mut conn, &fields).await?;
    Ok((StatusCode::CREATED, Json(CreatedFriend { friend })))
}

pub async fn get(
    Path(id): Path<i64>,
    DbSession(mut conn): DbSession,
) -> Result<Json<Friend>, ApiError> {
    match friend_repo::get_friend(&mut conn, id).await? {
        Some(friend) => Ok(Json(friend)),
        None => Err(ApiError::FriendNotFound(id)),
    }
}

pub async fn list(DbSession(mut conn): DbSession) -> Result<Json<Vec<Friend>>, ApiError> {
    let friends = friend_repo::list_friends(&mut conn).await?;
    Ok(Json(friends))
}

pub async fn update(
    Path(id): Path<i64>,
    DbSession(mut conn): DbSession,
    Query(fields): Query<FriendFields>,
) -> Result<Json<Friend>, ApiError> {
    // The UPDATE itself reports a missing row, so no separate existence check.
    let friend = friend_repo::update_friend(&mut conn, id, &fields).await?;
    Ok(Json(friend))
}

pub async fn delete(
    Path(id): Path<i64>,
    DbSession(mut conn): DbSession,
) -> Result<StatusCode, ApiError> {
    friend_repo::delete_friend(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
