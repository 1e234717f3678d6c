//! CRUD handlers, generic over the resource kind.
//!
//! ```text
//! GET    /{res}          list
//! POST   /{res}?fields   create
//! GET    /{res}/{id}     fetch
//! PUT    /{res}/{id}?..  replace (all fields required)
//! PATCH  /{res}/{id}?..  patch   (only supplied fields change)
//! DELETE /{res}/{id}     remove
//! ```
//!
//! Input is validated before the store is touched: a malformed query or
//! path id is a 400 even when the id does not exist.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use tracing::{field::Empty, Span};

use super::finish;
use crate::http::error::ApiError;
use crate::observability::metrics;
use crate::store::{Resource, ResourceStore};

type IdParam = Result<Path<u64>, PathRejection>;
type QueryParam<T> = Result<Query<T>, QueryRejection>;

/// Routes for one resource kind, bound to its store.
pub fn resource_router<R: Resource>(store: ResourceStore<R>) -> Router {
    metrics::record_store_size(R::NAME, store.len());

    Router::new()
        .route(&format!("/{}", R::NAME), get(list::<R>).post(create::<R>))
        .route(
            &format!("/{}/{{id}}", R::NAME),
            get(fetch::<R>)
                .put(replace::<R>)
                .patch(patch::<R>)
                .delete(remove::<R>),
        )
        .with_state(store)
}

fn path_id(id: IdParam) -> Result<u64, ApiError> {
    let Path(id) = id?;
    Span::current().record("id", id);
    Ok(id)
}

#[tracing::instrument(
    name = "list",
    skip_all,
    fields(
        otel.name = %format!("{}.list", R::NAME),
        resource = R::NAME,
        status = Empty
    )
)]
async fn list<R: Resource>(
    State(store): State<ResourceStore<R>>,
) -> Result<Json<Vec<R>>, ApiError> {
    let start = Instant::now();
    tracing::debug!("Listing {}", R::NAME);
    let records = store.list();
    tracing::info!(count = records.len(), "Fetched all {}", R::NAME);
    finish("list", start, Ok(records)).map(Json)
}

#[tracing::instrument(
    name = "fetch",
    skip_all,
    fields(
        otel.name = %format!("{}.fetch", R::NAME),
        resource = R::NAME,
        id = Empty,
        status = Empty
    )
)]
async fn fetch<R: Resource>(
    State(store): State<ResourceStore<R>>,
    id: IdParam,
) -> Result<Json<R>, ApiError> {
    let start = Instant::now();
    tracing::debug!("Fetching {}", R::LABEL);
    let result = path_id(id).and_then(|id| Ok(store.find_by_id(id)?));
    finish("fetch", start, result).map(Json)
}

#[tracing::instrument(
    name = "create",
    skip_all,
    fields(
        otel.name = %format!("{}.create", R::NAME),
        resource = R::NAME,
        id = Empty,
        status = Empty
    )
)]
async fn create<R: Resource>(
    State(store): State<ResourceStore<R>>,
    fields: QueryParam<R::Fields>,
) -> Result<Json<R>, ApiError> {
    let start = Instant::now();
    tracing::debug!("Creating {}", R::LABEL);
    let result = create_record(&store, fields);
    finish("create", start, result).map(Json)
}

fn create_record<R: Resource>(
    store: &ResourceStore<R>,
    fields: QueryParam<R::Fields>,
) -> Result<R, ApiError> {
    let Query(fields) = fields?;
    let record = store.insert(fields);

    Span::current().record("id", record.id());
    tracing::info!(record = ?record, "New {} created", R::LABEL);
    metrics::record_store_size(R::NAME, store.len());
    Ok(record)
}

#[tracing::instrument(
    name = "replace",
    skip_all,
    fields(
        otel.name = %format!("{}.replace", R::NAME),
        resource = R::NAME,
        id = Empty,
        status = Empty
    )
)]
async fn replace<R: Resource>(
    State(store): State<ResourceStore<R>>,
    id: IdParam,
    fields: QueryParam<R::Fields>,
) -> Result<Json<R>, ApiError> {
    let start = Instant::now();
    tracing::debug!("Replacing {}", R::LABEL);
    let result = replace_record(&store, id, fields);
    finish("replace", start, result).map(Json)
}

fn replace_record<R: Resource>(
    store: &ResourceStore<R>,
    id: IdParam,
    fields: QueryParam<R::Fields>,
) -> Result<R, ApiError> {
    let id = path_id(id)?;
    let Query(fields) = fields?;
    let record = store.replace(id, fields)?;

    tracing::info!(record = ?record, "{} replaced", R::LABEL);
    Ok(record)
}

#[tracing::instrument(
    name = "patch",
    skip_all,
    fields(
        otel.name = %format!("{}.patch", R::NAME),
        resource = R::NAME,
        id = Empty,
        status = Empty
    )
)]
async fn patch<R: Resource>(
    State(store): State<ResourceStore<R>>,
    id: IdParam,
    changes: QueryParam<R::Patch>,
) -> Result<Json<R>, ApiError> {
    let start = Instant::now();
    tracing::debug!("Patching {}", R::LABEL);
    let result = patch_record(&store, id, changes);
    finish("patch", start, result).map(Json)
}

fn patch_record<R: Resource>(
    store: &ResourceStore<R>,
    id: IdParam,
    changes: QueryParam<R::Patch>,
) -> Result<R, ApiError> {
    let id = path_id(id)?;
    let Query(changes) = changes?;
    let record = store.patch(id, changes)?;

    tracing::info!(record = ?record, "{} patched", R::LABEL);
    Ok(record)
}

#[tracing::instrument(
    name = "remove",
    skip_all,
    fields(
        otel.name = %format!("{}.remove", R::NAME),
        resource = R::NAME,
        id = Empty,
        status = Empty
    )
)]
async fn remove<R: Resource>(
    State(store): State<ResourceStore<R>>,
    id: IdParam,
) -> Result<Json<R>, ApiError> {
    let start = Instant::now();
    tracing::debug!("Deleting {}", R::LABEL);
    let result = remove_record(&store, id);
    finish("remove", start, result).map(Json)
}

fn remove_record<R: Resource>(store: &ResourceStore<R>, id: IdParam) -> Result<R, ApiError> {
    let id = path_id(id)?;
    let record = store.remove(id)?;

    tracing::info!(record = ?record, "{} deleted", R::LABEL);
    metrics::record_store_size(R::NAME, store.len());
    Ok(record)
}
