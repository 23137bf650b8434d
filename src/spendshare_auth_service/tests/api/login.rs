use spendshare_auth_service::routes::SessionResponse;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_200_and_rotate_tokens() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let signed_up = app.signup_user(&email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "password123" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let session = response.json::<SessionResponse>().await.unwrap();
    assert_eq!(session.user_id, signed_up.user_id);
    assert_ne!(session.access_token, signed_up.access_token);
    assert_ne!(session.refresh_token, signed_up.refresh_token);
}

#[tokio::test]
async fn should_return_401_if_wrong_credentials() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup_user(&email, "password123").await;

    let test_cases = [
        serde_json::json!({ "email": email, "password": "wrong-password" }),
        serde_json::json!({ "email": get_random_email(), "password": "password123" }),
        serde_json::json!({ "email": "not-an-email", "password": "password123" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_login(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            401,
            "Failed for input: {:?}",
            test_case
        );
    }
}
