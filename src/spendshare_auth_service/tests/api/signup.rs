use spendshare_auth_service::{ErrorResponse, routes::SessionResponse};

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_201_with_session() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&serde_json::json!({
            "email": get_random_email(),
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let session = response.json::<SessionResponse>().await.unwrap();
    assert!(!session.user_id.is_empty());
    assert_eq!(session.access_token.split('.').count(), 3);
    assert_eq!(session.refresh_token.split('.').count(), 3);
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({ "email": "", "password": "password123" }),
        serde_json::json!({ "email": "invalid_email", "password": "password123" }),
        serde_json::json!({ "email": " padded@example.com", "password": "password123" }),
        serde_json::json!({ "email": get_random_email(), "password": "short" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_signup(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
        assert!(
            response
                .json::<ErrorResponse>()
                .await
                .unwrap()
                .error
                .starts_with("Invalid input")
        );
    }
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup_user(&email, "password123").await;

    let response = app
        .post_signup(&serde_json::json!({ "email": email, "password": "password456" }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Email is already taken"
    );
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&serde_json::json!({ "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
