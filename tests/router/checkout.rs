use axum::http::StatusCode;

use super::*;

/// Expect a buyer to list, cart, order and pay for a product across requests
#[tokio::test]
async fn completes_checkout_flow() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let app = app(&test);

    let seller_cookie = register(&app, "Sam Seller", "seller@example.com").await;
    let buyer_cookie = register(&app, "Bea Buyer", "buyer@example.com").await;

    let response = send(
        &app,
        Method::POST,
        "/product/create-product",
        Some(json!({
            "name": "Desk Lamp",
            "price": 12.5,
            "quantity": 3,
            "category": "Home",
            "image": "https://cdn.example.com/lamp.png"
        })),
        Some(&seller_cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Value = read_json(response).await;
    let product_id = product["id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/user/toggle-cart/{}", product_id),
        Some(json!({ "quantity": 2 })),
        Some(&buyer_cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cart: Value = read_json(response).await;
    assert_eq!(cart["message"], "Product added to cart");

    let response = send(
        &app,
        Method::POST,
        "/order/create-order",
        Some(json!({ "products": [{ "product": product_id, "quantity": 2 }] })),
        Some(&buyer_cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = read_json(response).await;
    let order_id = created["orderId"].as_i64().unwrap() as i32;
    assert_eq!(created["totalAmount"], 25.0);

    let initialize = test.paystack().create_initialize_endpoint(2500, "ref-1", 1);
    let response = send(
        &app,
        Method::POST,
        "/payment/initiate",
        Some(json!({ "orderId": order_id })),
        Some(&buyer_cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let checkout: Value = read_json(response).await;
    assert_eq!(checkout["reference"], "ref-1");
    initialize.assert();

    let verify = test
        .paystack()
        .create_verify_endpoint("ref-1", "success", Some(order_id), 2500, 1);
    let response = send(&app, Method::GET, "/payment/verify/ref-1", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let verified: Value = read_json(response).await;
    assert_eq!(verified["message"], "Payment verified");
    assert_eq!(verified["order"]["status"], "paid");
    verify.assert();

    let response = send(
        &app,
        Method::GET,
        "/notification/get-all-notifications",
        None,
        Some(&seller_cookie),
    )
    .await;
    let notifications: Value = read_json(response).await;
    let actions: Vec<&str> = notifications
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|notification| notification["metadata"]["action"].as_str())
        .collect();
    assert_eq!(actions, ["payment-received", "incoming", "create"]);

    let response = send(
        &app,
        Method::GET,
        &format!("/product/get-product/{}", product_id),
        None,
        None,
    )
    .await;
    let product: Value = read_json(response).await;
    assert_eq!(product["quantity"], 1);

    Ok(())
}

/// Expect 502 when the payment gateway is unavailable
#[tokio::test]
async fn reports_gateway_failure() -> Result<(), TestError> {
    let mut test = test_setup_with_luxe_tables!()?;
    let app = app(&test);
    let endpoint =
        test.paystack()
            .create_failing_endpoint("GET", "/transaction/verify/ref-9", 500, 1);

    let response = send(&app, Method::GET, "/payment/verify/ref-9", None, None).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = read_json(response).await;
    assert_eq!(body["message"], "Payment gateway error");
    endpoint.assert();

    Ok(())
}
