// src/api/handlers/boilerplate_handler.rs
use crate::api::dto::boilerplate_dto::{
    BoilerplateDto, BoilerplatePageDto, BoilerplatePaginationQuery, CreateBoilerplateDto,
    UpdateBoilerplateDto,
};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::extractors::{IdPath, ValidatedJson, ValidatedQuery};
use crate::middleware::api_key::require_api_key;
use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

// --- CRUD Handlers ---

pub async fn create_boilerplate_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBoilerplateDto>,
) -> AppResult<impl IntoResponse> {
    info!("Creating new boilerplate");

    let boilerplate_dto = app_state
        .boilerplate_service
        .create_boilerplate(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(boilerplate_dto)))
}

pub async fn get_boilerplate_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<BoilerplateDto>> {
    debug!(boilerplate_id = id, "Getting boilerplate");

    let boilerplate_dto = app_state.boilerplate_service.get_boilerplate(id).await?;
    Ok(Json(boilerplate_dto))
}

pub async fn list_boilerplate_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<BoilerplatePaginationQuery>,
) -> AppResult<Json<BoilerplatePageDto>> {
    debug!(
        page = query.page,
        size = query.size,
        sort = %query.sort,
        order = ?query.order,
        "Listing boilerplate"
    );

    let page = app_state
        .boilerplate_service
        .list_boilerplate(query)
        .await?;

    Ok(Json(page))
}

pub async fn update_boilerplate_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateBoilerplateDto>,
) -> AppResult<Json<BoilerplateDto>> {
    info!(boilerplate_id = id, "Updating boilerplate");

    let boilerplate_dto = app_state
        .boilerplate_service
        .update_boilerplate(id, payload)
        .await?;

    Ok(Json(boilerplate_dto))
}

pub async fn delete_boilerplate_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    info!(boilerplate_id = id, "Deleting boilerplate");

    if app_state.boilerplate_service.delete_boilerplate(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Boilerplate '{}' not found",
            id
        )))
    }
}

// --- Router Setup ---

pub fn boilerplate_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/boilerplate",
            get(list_boilerplate_handler).post(create_boilerplate_handler),
        )
        .route(
            "/boilerplate/",
            get(list_boilerplate_handler).post(create_boilerplate_handler),
        )
        .route(
            "/boilerplate/{id}",
            get(get_boilerplate_handler)
                .patch(update_boilerplate_handler)
                .delete(delete_boilerplate_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.config.clone(),
            require_api_key,
        ))
        .with_state(app_state)
}
