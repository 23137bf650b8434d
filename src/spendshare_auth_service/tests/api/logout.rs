use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_200_and_revoke_refresh_token() {
    let app = TestApp::new().await;
    let session = app.signup_user(&get_random_email(), "password123").await;

    let response = app.post_logout(Some(&session.access_token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let refresh = app
        .post_refresh(&serde_json::json!({ "refreshToken": session.refresh_token }))
        .await;
    assert_eq!(refresh.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_400_if_token_missing() {
    let app = TestApp::new().await;

    let response = app.post_logout(None).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_401_if_invalid_token() {
    let app = TestApp::new().await;
    let session = app.signup_user(&get_random_email(), "password123").await;

    let invalid = app.post_logout(Some("invalid")).await;
    let refresh_as_access = app.post_logout(Some(&session.refresh_token)).await;

    assert_eq!(invalid.status().as_u16(), 401);
    assert_eq!(refresh_as_access.status().as_u16(), 401);
}
