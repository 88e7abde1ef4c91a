use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::database::Database;

pub async fn health(database: web::Data<Arc<Database>>) -> impl Responder {
    match database.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "database": "disconnected"
            }))
        }
    }
}
