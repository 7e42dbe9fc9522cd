//! API service routes
//!
//! Every entity route sits behind the bearer-token middleware. Write
//! handlers consult the permission table before touching the store, so a
//! caller without the right role gets 403 even for an id that does not exist.

use auth::{Identity, auth_middleware};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use common::{Entity, EntityStore};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extractors::{EntityId, ValidatedJson},
    models::{Department, Employee, Role},
    permissions::{Action, Resource, authorize},
    validation::Validate,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/departments", get(list_departments).post(create_department))
        .route("/departments/", get(list_departments).post(create_department))
        .route(
            "/departments/:id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/roles", get(list_roles))
        .route("/roles/", get(list_roles))
        .route("/roles/:id", get(get_role))
        .route_layer(middleware::from_fn_with_state(
            state.auth.jwt_service.clone(),
            auth_middleware,
        ));

    let auth_routes = auth::routes::create_router(state.auth.clone());

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
        .merge(auth_routes)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "directory-api"
    }))
}

async fn create_entity<T>(
    store: &EntityStore<T>,
    identity: &Identity,
    resource: Resource,
    payload: Result<ValidatedJson<T>, ApiError>,
) -> ApiResult<(StatusCode, Json<T>)>
where
    T: Entity + Validate,
{
    authorize(identity, resource, Action::Create)?;
    let ValidatedJson(payload) = payload?;

    let created = store.create(payload).await;
    info!("{} {} created by {}", T::NAME, created.id(), identity.role);

    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_entities<T: Entity>(
    store: &EntityStore<T>,
    identity: &Identity,
    resource: Resource,
) -> ApiResult<Json<Vec<T>>> {
    authorize(identity, resource, Action::Read)?;
    Ok(Json(store.list().await))
}

async fn get_entity<T: Entity>(
    store: &EntityStore<T>,
    identity: &Identity,
    resource: Resource,
    id: Result<EntityId, ApiError>,
) -> ApiResult<Json<T>> {
    authorize(identity, resource, Action::Read)?;
    let EntityId(id) = id?;
    Ok(Json(store.get(id).await?))
}

async fn update_entity<T>(
    store: &EntityStore<T>,
    identity: &Identity,
    resource: Resource,
    id: Result<EntityId, ApiError>,
    payload: Result<ValidatedJson<T>, ApiError>,
) -> ApiResult<Json<T>>
where
    T: Entity + Validate,
{
    authorize(identity, resource, Action::Update)?;
    let EntityId(id) = id?;
    let ValidatedJson(payload) = payload?;

    let updated = store.update(id, payload).await?;
    info!("{} {} updated by {}", T::NAME, id, identity.role);

    Ok(Json(updated))
}

async fn delete_entity<T: Entity>(
    store: &EntityStore<T>,
    identity: &Identity,
    resource: Resource,
    id: Result<EntityId, ApiError>,
) -> ApiResult<StatusCode> {
    authorize(identity, resource, Action::Delete)?;
    let EntityId(id) = id?;

    store.delete(id).await?;
    info!("{} {} deleted by {}", T::NAME, id, identity.role);

    Ok(StatusCode::NO_CONTENT)
}

/// Create a new department. Admin only.
pub async fn create_department(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<ValidatedJson<Department>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    create_entity(&state.departments, &identity, Resource::Department, payload).await
}

/// List all departments
pub async fn list_departments(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<impl IntoResponse> {
    list_entities(&state.departments, &identity, Resource::Department).await
}

/// Get a department by ID
pub async fn get_department(
    State(state): State<AppState>,
    identity: Identity,
    id: Result<EntityId, ApiError>,
) -> ApiResult<impl IntoResponse> {
    get_entity(&state.departments, &identity, Resource::Department, id).await
}

/// Replace a department. Admin only.
pub async fn update_department(
    State(state): State<AppState>,
    identity: Identity,
    id: Result<EntityId, ApiError>,
    payload: Result<ValidatedJson<Department>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    update_entity(&state.departments, &identity, Resource::Department, id, payload).await
}

/// Delete a department. Admin only.
pub async fn delete_department(
    State(state): State<AppState>,
    identity: Identity,
    id: Result<EntityId, ApiError>,
) -> ApiResult<impl IntoResponse> {
    delete_entity(&state.departments, &identity, Resource::Department, id).await
}

/// Create a new employee. Admin and HR.
pub async fn create_employee(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<ValidatedJson<Employee>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    create_entity(&state.employees, &identity, Resource::Employee, payload).await
}

/// List all employees
pub async fn list_employees(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<impl IntoResponse> {
    list_entities(&state.employees, &identity, Resource::Employee).await
}

/// Get an employee by ID
pub async fn get_employee(
    State(state): State<AppState>,
    identity: Identity,
    id: Result<EntityId, ApiError>,
) -> ApiResult<impl IntoResponse> {
    get_entity(&state.employees, &identity, Resource::Employee, id).await
}

/// Replace an employee's information. Admin and HR.
pub async fn update_employee(
    State(state): State<AppState>,
    identity: Identity,
    id: Result<EntityId, ApiError>,
    payload: Result<ValidatedJson<Employee>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    update_entity(&state.employees, &identity, Resource::Employee, id, payload).await
}

/// Delete an employee. Admin only.
pub async fn delete_employee(
    State(state): State<AppState>,
    identity: Identity,
    id: Result<EntityId, ApiError>,
) -> ApiResult<impl IntoResponse> {
    delete_entity(&state.employees, &identity, Resource::Employee, id).await
}

/// List all roles
pub async fn list_roles(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<impl IntoResponse> {
    list_entities::<Role>(&state.roles, &identity, Resource::Role).await
}

/// Get a role by ID
pub async fn get_role(
    State(state): State<AppState>,
    identity: Identity,
    id: Result<EntityId, ApiError>,
) -> ApiResult<impl IntoResponse> {
    get_entity::<Role>(&state.roles, &identity, Resource::Role, id).await
}
