use super::*;

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Sign in");
    assert_eq!(submit_label(true), "Signing in...");
}

#[test]
fn notice_class_tags_kind() {
    assert_eq!(notice_class(NoticeKind::Success), "login-notice login-notice--success");
    assert_eq!(notice_class(NoticeKind::Error), "login-notice login-notice--error");
}

#[test]
fn register_link_stays_on_site() {
    assert_eq!(REGISTER_PATH, "/register");
    assert!(crate::config::is_local_path(REGISTER_PATH));
}
