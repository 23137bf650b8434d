use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_200_and_accept_new_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let session = app.signup_user(&email, "password123").await;

    let response = app
        .post_update_password(
            &session.access_token,
            &serde_json::json!({ "oldPassword": "password123", "newPassword": "password456" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let old_login = app
        .post_login(&serde_json::json!({ "email": email, "password": "password123" }))
        .await;
    let new_login = app
        .post_login(&serde_json::json!({ "email": email, "password": "password456" }))
        .await;
    assert_eq!(old_login.status().as_u16(), 401);
    assert_eq!(new_login.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_401_if_old_password_wrong() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let session = app.signup_user(&email, "password123").await;

    let response = app
        .post_update_password(
            &session.access_token,
            &serde_json::json!({ "oldPassword": "not-it", "newPassword": "password456" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let login = app
        .post_login(&serde_json::json!({ "email": email, "password": "password123" }))
        .await;
    assert_eq!(login.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_400_if_new_password_too_short() {
    let app = TestApp::new().await;
    let session = app.signup_user(&get_random_email(), "password123").await;

    let response = app
        .post_update_password(
            &session.access_token,
            &serde_json::json!({ "oldPassword": "password123", "newPassword": "abc" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}
