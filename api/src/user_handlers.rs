use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        MatchedPath, Path, Query, RawQuery, State,
    },
    http::{Method, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use shared::response::ResponseFormat;
use shared::validation::{error_report, validate};

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateUserRequest, UserData},
    respond,
    state::AppState,
};

/// Query params for the user list demo.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub active: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub is_active: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    pub format: Option<String>,
}

fn map_json_rejection(err: JsonRejection) -> ApiError {
    tracing::debug!(detail = %err.body_text(), "rejected request body");
    ApiError::bad_request("Invalid Request Payload")
}

fn map_query_rejection(err: QueryRejection) -> ApiError {
    tracing::debug!(detail = %err.body_text(), "rejected query string");
    ApiError::bad_request("Invalid Request Payload")
}

/// Query-parameter demo: echoes the filters the caller sent. Absent
/// parameters echo as empty strings.
pub async fn list_users(
    method: Method,
    matched: MatchedPath,
    RawQuery(raw_query): RawQuery,
    params: Result<Query<ListUsersQuery>, QueryRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Query(params) = params.map_err(map_query_rejection)?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "List of users",
            "data": {
                "endpoint": matched.as_str(),
                "method": method.as_str(),
                "active": params.active.unwrap_or_default(),
                "role": params.role.unwrap_or_default(),
                "query": raw_query.unwrap_or_default(),
            }
        })),
    ))
}

/// Path-parameter demo.
pub async fn get_user(
    method: Method,
    matched: MatchedPath,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "User details",
            "data": {
                "endpoint": matched.as_str(),
                "method": method.as_str(),
                "id": id,
            }
        })),
    )
}

/// Path plus query demo.
pub async fn get_user_profile(
    method: Method,
    matched: MatchedPath,
    Path(id): Path<String>,
    RawQuery(raw_query): RawQuery,
    params: Result<Query<ProfileQuery>, QueryRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Query(params) = params.map_err(map_query_rejection)?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "User profile",
            "data": {
                "endpoint": matched.as_str(),
                "method": method.as_str(),
                "id": id,
                "is_active": params.is_active.unwrap_or_default(),
                "query": raw_query.unwrap_or_default(),
            }
        })),
    ))
}

/// Validated user creation. Decode failures are a 400, constraint
/// violations a 422 with the per-field translated report, persistence
/// failures an opaque 500. The success envelope honors the `format` query.
pub async fn create_user(
    State(state): State<AppState>,
    format_query: Result<Query<FormatQuery>, QueryRejection>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Query(format_query) = format_query.map_err(map_query_rejection)?;
    let Json(request) = payload.map_err(map_json_rejection)?;

    let violations = validate(&request);
    if let Some(report) = error_report(&violations, &state.translator) {
        return Err(ApiError::validation(report));
    }

    // Required rules guarantee the fields are populated past this point.
    let user = UserData {
        name: request.name.unwrap_or_default(),
        email: request.email.unwrap_or_default(),
        age: request.age.unwrap_or_default(),
    };

    insert_user(&user).map_err(|err| {
        tracing::error!(error = %err, "user insert failed");
        ApiError::internal("Internal Server Error")
    })?;

    respond::success(
        StatusCode::CREATED,
        selected_format(&format_query),
        "User Created Successfully",
        Some(user),
    )
}

fn selected_format(query: &FormatQuery) -> ResponseFormat {
    query
        .format
        .as_deref()
        .map(ResponseFormat::from_token)
        .unwrap_or_default()
}

/// Stand-in for a real persistence layer: rejects the address range used by
/// the failure drill.
fn insert_user(user: &UserData) -> anyhow::Result<()> {
    if user.email.starts_with("fail@") {
        anyhow::bail!("duplicate key value violates unique constraint \"users_email_key\"");
    }
    Ok(())
}
