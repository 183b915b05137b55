//! Handlers under `/fibonacci`.
//!
//! The plain endpoints let failures reach the framework untouched. The
//! `...WithException...` endpoints return [`DomainError`] so every failure
//! goes through the classifier.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::api::api_objects::{
    CountQuery, FilenameQuery, FindNumberQuery, PositionQuery, RawCountQuery,
};
use crate::error_classifier::DomainError;
use crate::input_validator::parse_count_with_fault_simulation;
use crate::persistence_gateway::{load_sequence, store_sequence};
use crate::ratio_calculator::{format_ratio, ratio};
use crate::sequence_generator::{
    fibonacci_at, fibonacci_at_bounded, fibonacci_at_iterative, fibonacci_sequence,
};
use crate::server::AppState;

// curl -i -X GET http://localhost:8080/fibonacci/findNumber?n=3
pub async fn handle_find_number(query: web::Query<FindNumberQuery>) -> actix_web::Result<HttpResponse> {
    let FindNumberQuery { n, iterative } = query.into_inner();
    info!(n, iterative, "finding fibonacci number");
    let value = web::block(move || {
        if iterative {
            fibonacci_at_iterative(n)
        } else {
            fibonacci_at(n)
        }
    })
    .await?;
    Ok(HttpResponse::Ok().body(value.to_string()))
}

// curl -i -X POST http://localhost:8080/fibonacci/createSequence?n=3
pub async fn handle_create_sequence(
    query: web::Query<CountQuery>,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let n = query.into_inner().n;
    let sequence = web::block(move || fibonacci_sequence(n)).await?;
    let name = store_sequence(state.gateway.as_ref(), &state.sequence_file_name, &sequence).await?;
    Ok(HttpResponse::Ok().body(name))
}

// curl -i -X GET http://localhost:8080/fibonacci/getSequence?filename=fibonacci.txt
pub async fn handle_get_sequence(
    query: web::Query<FilenameQuery>,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let contents = state.gateway.read(&query.filename).await?;
    Ok(HttpResponse::Ok().body(contents))
}

// curl -i -X GET http://localhost:8080/fibonacci/getWithExceptionHandling?filename=not_found.txt
pub async fn handle_get_with_exception_handling(
    query: web::Query<FilenameQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, DomainError> {
    let contents = load_sequence(state.gateway.as_ref(), &query.filename).await?;
    Ok(HttpResponse::Ok().body(contents))
}

// curl -i -X POST http://localhost:8080/fibonacci/createSequenceWithExceptionHandling?n=npe
pub async fn handle_create_sequence_with_exception_handling(
    query: web::Query<RawCountQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, DomainError> {
    let raw = query.into_inner().n;
    let sequence = web::block(move || parse_count_with_fault_simulation(&raw)).await??;
    let name = store_sequence(state.gateway.as_ref(), &state.sequence_file_name, &sequence)
        .await
        .map_err(DomainError::InternalIo)?;
    Ok(HttpResponse::Ok().body(name))
}

// curl -i -X GET http://localhost:8080/fibonacci/findNumberWithException?n=8
pub async fn handle_find_number_with_exception(
    query: web::Query<PositionQuery>,
) -> Result<HttpResponse, DomainError> {
    let n = query.into_inner().n;
    let value = web::block(move || fibonacci_at_bounded(n)).await??;
    Ok(HttpResponse::Ok().body(value.to_string()))
}

// curl -i -X GET http://localhost:8080/fibonacci/findRatio?n=8
pub async fn handle_find_ratio(query: web::Query<PositionQuery>) -> Result<HttpResponse, DomainError> {
    let n = query.into_inner().n;
    let value = web::block(move || ratio(n)).await??;
    Ok(HttpResponse::Ok().body(format_ratio(value)))
}
