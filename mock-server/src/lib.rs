use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
const SIZE_INCORRECT: &str = "size must be S or M or L";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

#[derive(Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub size: String,
    #[serde(default)]
    pub toppings: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderRejection {
    pub message: String,
}

pub type Db = Arc<RwLock<Vec<Order>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/order", get(list_orders).post(place_order))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// First failing rule for an incoming order, mirroring the form's rule
/// table. Empty size is a plain rule violation here: the server has no
/// "not chosen yet" display state.
fn check_order(input: &OrderRequest) -> Option<&'static str> {
    let len = input.full_name.trim().chars().count();
    if len < 3 {
        return Some(FULL_NAME_TOO_SHORT);
    }
    if len > 20 {
        return Some(FULL_NAME_TOO_LONG);
    }
    if !["S", "M", "L"].contains(&input.size.as_str()) {
        return Some(SIZE_INCORRECT);
    }
    None
}

async fn list_orders(State(db): State<Db>) -> Json<Vec<Order>> {
    let orders = db.read().await;
    Json(orders.clone())
}

async fn place_order(
    State(db): State<Db>,
    Json(input): Json<OrderRequest>,
) -> Result<Json<OrderReceipt>, (StatusCode, Json<OrderRejection>)> {
    if let Some(message) = check_order(&input) {
        tracing::info!(message, "order rejected");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(OrderRejection {
                message: message.to_string(),
            }),
        ));
    }
    let order = Order {
        id: Uuid::new_v4(),
        full_name: input.full_name,
        size: input.size,
        toppings: input.toppings,
    };
    let message = format!("Thanks, {}! Your order is on the way.", order.full_name.trim());
    tracing::info!(id = %order.id, size = %order.size, "order placed");
    let receipt = OrderReceipt { id: order.id, message };
    db.write().await.push(order);
    Ok(Json(receipt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(full_name: &str, size: &str, toppings: &[&str]) -> OrderRequest {
        OrderRequest {
            full_name: full_name.to_string(),
            size: size.to_string(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn order_serializes_with_camel_case_name_key() {
        let order = Order {
            id: Uuid::nil(),
            full_name: "Alice Smith".to_string(),
            size: "S".to_string(),
            toppings: vec!["1".to_string()],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["fullName"], "Alice Smith");
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn order_request_defaults_toppings_to_empty() {
        let input: OrderRequest =
            serde_json::from_str(r#"{"fullName":"Alice Smith","size":"M"}"#).unwrap();
        assert!(input.toppings.is_empty());
    }

    #[test]
    fn order_request_rejects_missing_name() {
        let result: Result<OrderRequest, _> = serde_json::from_str(r#"{"size":"M"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn check_order_accepts_valid_orders() {
        assert_eq!(check_order(&request("Alice Smith", "S", &["1", "3"])), None);
        assert_eq!(check_order(&request("Bob", "L", &[])), None);
    }

    #[test]
    fn check_order_reports_first_failing_rule() {
        assert_eq!(
            check_order(&request("Al", "X", &[])),
            Some(FULL_NAME_TOO_SHORT)
        );
        assert_eq!(check_order(&request("Alice Smith", "X", &[])), Some(SIZE_INCORRECT));
        assert_eq!(check_order(&request("Alice Smith", "", &[])), Some(SIZE_INCORRECT));
        assert_eq!(
            check_order(&request(&"x".repeat(21), "M", &[])),
            Some(FULL_NAME_TOO_LONG)
        );
    }

    #[test]
    fn check_order_trims_the_name() {
        assert_eq!(check_order(&request("  Al  ", "M", &[])), Some(FULL_NAME_TOO_SHORT));
        assert_eq!(check_order(&request("  Alice  ", "M", &[])), None);
    }
}
