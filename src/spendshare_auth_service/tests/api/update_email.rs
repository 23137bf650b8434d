use spendshare_auth_service::routes::SessionResponse;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_200_and_move_login_to_new_email() {
    let app = TestApp::new().await;
    let old_email = get_random_email();
    let new_email = format!("new.{}", get_random_email());
    let session = app.signup_user(&old_email, "password123").await;

    let response = app
        .post_update_email(
            &session.access_token,
            &serde_json::json!({ "newEmail": new_email }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let rotated = response.json::<SessionResponse>().await.unwrap();
    assert_eq!(rotated.user_id, session.user_id);

    let old_login = app
        .post_login(&serde_json::json!({ "email": old_email, "password": "password123" }))
        .await;
    let new_login = app
        .post_login(&serde_json::json!({ "email": new_email, "password": "password123" }))
        .await;
    assert_eq!(old_login.status().as_u16(), 401);
    assert_eq!(new_login.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_409_if_email_taken() {
    let app = TestApp::new().await;
    let taken = get_random_email();
    app.signup_user(&taken, "password123").await;
    let session = app
        .signup_user(&format!("other.{}", get_random_email()), "password123")
        .await;

    let response = app
        .post_update_email(&session.access_token, &serde_json::json!({ "newEmail": taken }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn should_return_400_if_invalid_email() {
    let app = TestApp::new().await;
    let session = app.signup_user(&get_random_email(), "password123").await;

    let response = app
        .post_update_email(
            &session.access_token,
            &serde_json::json!({ "newEmail": "not-an-email" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}
