use crate::core::{elements, numeric::parse_number, MeanTally, Rejection};
use serde_json::Value;

const CANCELLED: &str = "cancelled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderRejection {
    NotAnObject,
    MissingStatus,
    MissingAmount,
    Cancelled,
    InvalidAmount,
}

impl Rejection for OrderRejection {
    fn as_str(&self) -> &'static str {
        match self {
            OrderRejection::NotAnObject => "not_an_object",
            OrderRejection::MissingStatus => "missing_status",
            OrderRejection::MissingAmount => "missing_amount",
            OrderRejection::Cancelled => "cancelled",
            OrderRejection::InvalidAmount => "invalid_amount",
        }
    }
}

/// Checks a single order record and returns its amount when it counts.
pub fn order_amount(order: &Value) -> Result<f64, OrderRejection> {
    let Value::Object(fields) = order else {
        return Err(OrderRejection::NotAnObject);
    };

    let status = fields.get("status").ok_or(OrderRejection::MissingStatus)?;
    let amount = fields.get("amount").ok_or(OrderRejection::MissingAmount)?;

    if status.as_str() == Some(CANCELLED) {
        return Err(OrderRejection::Cancelled);
    }

    parse_number(amount).map_err(|_| OrderRejection::InvalidAmount)
}

pub fn summarize_orders(orders: &Value) -> MeanTally<OrderRejection> {
    let mut tally = MeanTally::new();

    for (index, order) in elements(orders).iter().enumerate() {
        match order_amount(order) {
            Ok(amount) => tally.accept(amount),
            Err(reason) => {
                tracing::trace!(index, reason = reason.as_str(), "skipping order");
                tally.reject(reason);
            }
        }
    }

    tracing::debug!(
        "Orders: {} valid, {} skipped, average {}",
        tally.accepted,
        tally.rejected_count(),
        tally.mean()
    );
    tally
}

/// Average `amount` over non-cancelled, well-formed orders; `0.0` if there are none.
pub fn calculate_average_order_value(orders: &Value) -> f64 {
    summarize_orders(orders).mean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_orders_average_only_valid_records() {
        let orders = json!([
            {"status": "completed", "amount": "10"},
            {"status": "cancelled", "amount": 100},
            {"amount": 5}
        ]);
        assert_eq!(calculate_average_order_value(&orders), 10.0);
    }

    #[test]
    fn test_absent_or_empty_input_yields_zero() {
        assert_eq!(calculate_average_order_value(&Value::Null), 0.0);
        assert_eq!(calculate_average_order_value(&json!([])), 0.0);
        assert_eq!(calculate_average_order_value(&json!({"status": "paid", "amount": 3})), 0.0);
    }

    #[test]
    fn test_cancelled_orders_never_count() {
        let orders = json!([
            {"status": "cancelled", "amount": 1_000_000},
            {"status": "cancelled", "amount": "abc"},
            {"status": "cancelled", "amount": null}
        ]);
        let tally = summarize_orders(&orders);
        assert_eq!(tally.accepted, 0);
        assert_eq!(tally.rejected.get(&OrderRejection::Cancelled), Some(&3));
        assert_eq!(tally.mean(), 0.0);
    }

    #[test]
    fn test_status_match_is_exact() {
        let orders = json!([
            {"status": "Cancelled", "amount": 4},
            {"status": " cancelled", "amount": 6},
            {"status": null, "amount": 8}
        ]);
        assert_eq!(calculate_average_order_value(&orders), 6.0);
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let orders = json!([
            "completed",
            42,
            null,
            [{"status": "paid", "amount": 99}],
            {"status": "paid", "amount": 20}
        ]);
        let tally = summarize_orders(&orders);
        assert_eq!(tally.accepted, 1);
        assert_eq!(tally.rejected.get(&OrderRejection::NotAnObject), Some(&4));
        assert_eq!(tally.mean(), 20.0);
    }

    #[test]
    fn test_unconvertible_amounts_are_skipped() {
        let orders = json!([
            {"status": "paid", "amount": "ten"},
            {"status": "paid", "amount": null},
            {"status": "paid", "amount": {"value": 3}},
            {"status": "paid", "amount": " 12.5 "},
            {"status": "paid", "amount": 7.5}
        ]);
        let tally = summarize_orders(&orders);
        assert_eq!(tally.accepted, 2);
        assert_eq!(tally.rejected.get(&OrderRejection::InvalidAmount), Some(&3));
        assert_eq!(tally.mean(), 10.0);
    }

    #[test]
    fn test_missing_fields_are_reported_separately() {
        assert_eq!(
            order_amount(&json!({"amount": 1})),
            Err(OrderRejection::MissingStatus)
        );
        assert_eq!(
            order_amount(&json!({"status": "paid"})),
            Err(OrderRejection::MissingAmount)
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let orders = json!([{"status": "paid", "amount": 1}, {"status": "paid", "amount": 2}]);
        let first = calculate_average_order_value(&orders);
        assert_eq!(first, 1.5);
        assert_eq!(calculate_average_order_value(&orders), first);
    }
}
