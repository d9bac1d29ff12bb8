//! Orders API 模块
//!
//! 下单、读投影 (汇总/厨房队列/历史) 和菜品状态流转。

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/place", post(handler::place))
        .route("/all", get(handler::list_all))
        .route("/items/{table_number}", get(handler::table_summary))
        .route("/by-table", get(handler::kitchen_queue))
        .route("/details/{table_number}", get(handler::table_details))
        .route("/update-status", patch(handler::update_status))
        .route("/pending-preparing-items", get(handler::pending_items))
}
