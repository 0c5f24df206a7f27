//! 路由装配与客户控制器。
use crate::error::ApiError;
use crate::health::health_check;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use customer_application::Dispatch;
use customer_application::command::{AddCustomer, DeleteCustomer, UpdateCustomer};
use customer_application::query::{GetCustomer, ListCustomers};
use customer_domain::Customer;
use tower_http::trace::TraceLayer;

/// 装配完整路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/customer",
            get(list_customers)
                .post(create_customer)
                .put(replace_customer),
        )
        .route("/customer/:id", get(get_customer).delete(delete_customer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /customer：按写入顺序返回全部客户
async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.dispatcher.dispatch(ListCustomers).await?;
    Ok(Json(customers))
}

/// GET /customer/{id}：查无此人返回 404
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .dispatcher
        .dispatch(GetCustomer { id })
        .await?
        .ok_or_else(|| ApiError::not_found("customer", id))?;
    Ok(Json(customer))
}

/// POST /customer：请求体中的 `id` 被忽略，由仓储分配
async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<Customer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let created = state
        .dispatcher
        .dispatch(AddCustomer {
            first_name: body.first_name,
            last_name: body.last_name,
            revenue: body.revenue,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /customer：按请求体中的 `id` 原地更新，查无此人返回 404
async fn replace_customer(
    State(state): State<AppState>,
    Json(body): Json<Customer>,
) -> Result<Json<Customer>, ApiError> {
    let id = body.id;
    let updated = state
        .dispatcher
        .dispatch(UpdateCustomer {
            id,
            first_name: body.first_name,
            last_name: body.last_name,
            revenue: body.revenue,
        })
        .await?
        .ok_or_else(|| ApiError::not_found("customer", id))?;
    Ok(Json(updated))
}

/// DELETE /customer/{id}：幂等，目标不存在同样返回 204
async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    state.dispatcher.dispatch(DeleteCustomer { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
