use serde_json::{json, Value};
use small_audit::{
    average_valid_measurements, calculate_average_order_value, count_valid_emails,
    summarize_orders, OrderRejection,
};

/// 測試空輸入或缺少輸入時回傳零值
#[test]
fn test_empty_and_absent_inputs_return_zero_results() {
    for input in [Value::Null, json!([]), json!({}), json!(7)] {
        assert_eq!(calculate_average_order_value(&input), 0.0);
        assert_eq!(count_valid_emails(&input), 0);
        assert_eq!(average_valid_measurements(&input), 0.0);
    }
}

#[test]
fn test_order_end_to_end_example() {
    let orders = json!([
        {"status": "completed", "amount": "10"},
        {"status": "cancelled", "amount": 100},
        {"amount": 5}
    ]);

    assert_eq!(calculate_average_order_value(&orders), 10.0);
}

#[test]
fn test_orders_from_raw_json_document() {
    let raw = r#"[
        {"id": 1, "status": "shipped", "amount": 19.99},
        {"id": 2, "status": "cancelled", "amount": 500},
        {"id": 3, "status": "pending", "amount": "30.01"},
        {"id": 4, "status": "pending", "amount": "thirty"},
        "order-5",
        {"id": 6, "status": "shipped"}
    ]"#;
    let orders: Value = serde_json::from_str(raw).unwrap();

    let tally = summarize_orders(&orders);
    assert_eq!(tally.accepted, 2);
    assert_eq!(tally.rejected_count(), 4);
    assert_eq!(tally.rejected.get(&OrderRejection::InvalidAmount), Some(&1));
    assert_eq!(tally.rejected.get(&OrderRejection::MissingAmount), Some(&1));
    assert!((tally.mean() - 25.0).abs() < 1e-9);
}

#[test]
fn test_email_reference_cases() {
    let emails = json!(["a@b.co", "a@@b.co", "a@b", "a@.b.co", "a@b.c"]);
    assert_eq!(count_valid_emails(&emails), 1);
}

#[test]
fn test_measurement_reference_case() {
    let values = json!([1, "2.5", null, "x", 3]);
    let average = average_valid_measurements(&values);
    assert!((average - 2.166_666_666_666_667).abs() < 1e-12);
}

#[test]
fn test_repeated_calls_return_identical_results() {
    let orders = json!([{"status": "paid", "amount": "3"}, {"status": "paid", "amount": 4}]);
    let emails = json!(["x@y.io", "bad"]);
    let values = json!(["1", 2, null]);

    assert_eq!(
        calculate_average_order_value(&orders),
        calculate_average_order_value(&orders)
    );
    assert_eq!(count_valid_emails(&emails), count_valid_emails(&emails));
    assert_eq!(
        average_valid_measurements(&values),
        average_valid_measurements(&values)
    );
}
