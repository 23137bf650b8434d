use spendshare_auth_service::routes::SessionResponse;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_200_with_new_session() {
    let app = TestApp::new().await;
    let signed_up = app.signup_user(&get_random_email(), "password123").await;

    let response = app
        .post_refresh(&serde_json::json!({ "refreshToken": signed_up.refresh_token }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let session = response.json::<SessionResponse>().await.unwrap();
    assert_eq!(session.user_id, signed_up.user_id);
    assert_ne!(session.refresh_token, signed_up.refresh_token);
}

#[tokio::test]
async fn should_return_401_when_token_is_reused() {
    let app = TestApp::new().await;
    let signed_up = app.signup_user(&get_random_email(), "password123").await;
    let body = serde_json::json!({ "refreshToken": signed_up.refresh_token });

    assert_eq!(app.post_refresh(&body).await.status().as_u16(), 200);
    let response = app.post_refresh(&body).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_for_access_token() {
    let app = TestApp::new().await;
    let signed_up = app.signup_user(&get_random_email(), "password123").await;

    let response = app
        .post_refresh(&serde_json::json!({ "refreshToken": signed_up.access_token }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}
