use super::*;

#[test]
fn unauthorized_statuses_map_to_rejected() {
    assert_eq!(login_error_for_status(401), LoginError::Rejected);
    assert_eq!(login_error_for_status(403), LoginError::Rejected);
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(login_error_for_status(500), LoginError::Status(500));
    assert_eq!(login_error_for_status(429).to_string(), "login request failed: 429");
}

#[test]
fn endpoints_live_under_api_auth() {
    assert_eq!(CURRENT_USER_ENDPOINT, "/api/auth/me");
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn login_is_unavailable_outside_the_browser() {
    let err = login("a@b.com", "secret").await.unwrap_err();
    assert!(matches!(err, LoginError::Transport(_)));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn fetch_current_user_is_none_outside_the_browser() {
    assert!(fetch_current_user().await.is_none());
}
