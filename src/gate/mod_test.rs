use super::stub_oracle::{RecordingNavigator, StubOracle};
use super::*;
use crate::config::GateConfig;

fn target(path: &'static str) -> RedirectTarget {
    RedirectTarget::from_query(move |key| (key == "from").then(|| path.to_owned()), &GateConfig::default())
}

fn gate_to(path: &'static str) -> (AuthGate<StubOracle, RecordingNavigator>, RecordingNavigator) {
    let navigator = RecordingNavigator::default();
    let gate = AuthGate::new(StubOracle::accepting(), navigator.clone(), target(path));
    (gate, navigator)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_gate_is_resolving() {
    let (gate, navigator) = gate_to("/book");
    assert_eq!(gate.current_view(), GateView::Resolving);
    assert!(gate.page_loading());
    assert_eq!(gate.redirect_target().as_str(), "/book");
    assert!(navigator.paths.borrow().is_empty());
}

#[test]
fn observing_unresolved_keeps_resolving() {
    let (mut gate, navigator) = gate_to("/book");
    gate.observe(SessionStatus::Unresolved);
    gate.observe(SessionStatus::Unresolved);
    assert_eq!(gate.current_view(), GateView::Resolving);
    assert!(gate.page_loading());
    assert!(navigator.paths.borrow().is_empty());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn anonymous_makes_form_interactive() {
    let (mut gate, navigator) = gate_to("/book");
    gate.observe(SessionStatus::Anonymous);
    assert_eq!(gate.current_view(), GateView::Interactive);
    assert!(!gate.page_loading());
    assert!(navigator.paths.borrow().is_empty());
}

#[test]
fn authenticated_on_load_redirects_without_showing_form() {
    let (mut gate, navigator) = gate_to("/book");
    gate.observe(SessionStatus::Authenticated);
    assert_eq!(gate.current_view(), GateView::RedirectingAway);
    assert_eq!(*navigator.paths.borrow(), vec!["/book".to_owned()]);
}

#[test]
fn authenticated_mid_visit_redirects() {
    let (mut gate, navigator) = gate_to("/");
    gate.observe(SessionStatus::Anonymous);
    gate.observe(SessionStatus::Authenticated);
    assert_eq!(gate.current_view(), GateView::RedirectingAway);
    assert_eq!(*navigator.paths.borrow(), vec!["/".to_owned()]);
}

#[test]
fn redirecting_away_is_terminal() {
    let (mut gate, navigator) = gate_to("/book");
    gate.observe(SessionStatus::Authenticated);
    gate.observe(SessionStatus::Anonymous);
    gate.observe(SessionStatus::Unresolved);
    assert_eq!(gate.current_view(), GateView::RedirectingAway);
    assert_eq!(navigator.paths.borrow().len(), 1);
}

#[test]
fn unresolved_after_resolution_is_ignored() {
    let (mut gate, _navigator) = gate_to("/book");
    gate.observe(SessionStatus::Anonymous);
    gate.observe(SessionStatus::Unresolved);
    assert_eq!(gate.current_view(), GateView::Interactive);
    assert!(!gate.page_loading());
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn repeated_authenticated_navigates_once() {
    let (mut gate, navigator) = gate_to("/book");
    gate.observe(SessionStatus::Authenticated);
    gate.observe(SessionStatus::Authenticated);
    gate.observe(SessionStatus::Authenticated);
    assert_eq!(*navigator.paths.borrow(), vec!["/book".to_owned()]);
}

#[test]
fn repeated_status_does_not_change_view() {
    for status in [SessionStatus::Unresolved, SessionStatus::Anonymous, SessionStatus::Authenticated] {
        let (mut gate, navigator) = gate_to("/book");
        gate.observe(status);
        let view = gate.current_view();
        let navigations = navigator.paths.borrow().len();
        gate.observe(status);
        assert_eq!(gate.current_view(), view, "status={status:?}");
        assert_eq!(navigator.paths.borrow().len(), navigations, "status={status:?}");
    }
}

// =============================================================
// No flash of form, over every short observation sequence
// =============================================================

fn sequences(len: usize) -> Vec<Vec<SessionStatus>> {
    const ALL: [SessionStatus; 3] = [SessionStatus::Unresolved, SessionStatus::Anonymous, SessionStatus::Authenticated];
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                ALL.iter().map(move |status| {
                    let mut next = prefix.clone();
                    next.push(*status);
                    next
                })
            })
            .collect();
    }
    out
}

#[test]
fn interactive_only_between_anonymous_and_authenticated() {
    for len in 0..=4 {
        for seq in sequences(len) {
            let (mut gate, navigator) = gate_to("/book");
            let mut seen_anonymous = false;
            let mut seen_authenticated = false;
            for status in &seq {
                gate.observe(*status);
                seen_anonymous |= *status == SessionStatus::Anonymous && !seen_authenticated;
                seen_authenticated |= *status == SessionStatus::Authenticated;

                let view = gate.current_view();
                let expect_interactive = seen_anonymous && !seen_authenticated;
                assert_eq!(view == GateView::Interactive, expect_interactive, "seq={seq:?}");
                if gate.page_loading() {
                    assert_ne!(view, GateView::Interactive, "seq={seq:?}");
                }
            }
            let expected_navigations = usize::from(seen_authenticated);
            assert_eq!(navigator.paths.borrow().len(), expected_navigations, "seq={seq:?}");
        }
    }
}

// =============================================================
// Release
// =============================================================

#[test]
fn released_gate_ignores_late_authentication() {
    let (mut gate, navigator) = gate_to("/book");
    gate.observe(SessionStatus::Anonymous);
    gate.release();
    gate.observe(SessionStatus::Authenticated);
    assert!(gate.is_released());
    assert_eq!(gate.current_view(), GateView::Interactive);
    assert!(navigator.paths.borrow().is_empty());
}

// =============================================================
// Closures as navigators
// =============================================================

#[test]
fn closure_navigator_receives_target() {
    let paths = std::rc::Rc::new(std::cell::RefCell::new(Vec::<String>::new()));
    let sink = paths.clone();
    let mut gate = AuthGate::new(StubOracle::accepting(), move |path: &str| sink.borrow_mut().push(path.to_owned()), target("/account"));
    gate.observe(SessionStatus::Authenticated);
    assert_eq!(*paths.borrow(), vec!["/account".to_owned()]);
}

// =============================================================
// Submission does not drive navigation
// =============================================================

#[tokio::test]
async fn successful_submit_does_not_navigate() {
    let (gate, navigator) = gate_to("/book");
    let outcome = gate.submit(Credentials::new("a@b.com", "secret")).await;
    assert_eq!(outcome, SubmissionOutcome::Success);
    assert!(navigator.paths.borrow().is_empty());
    assert_eq!(gate.current_view(), GateView::Resolving);
}

#[tokio::test]
async fn in_flight_submit_does_not_block_observe() {
    let (mut gate, navigator) = gate_to("/book");
    gate.observe(SessionStatus::Anonymous);
    let pending = gate.submit(Credentials::new("a@b.com", "secret"));
    gate.observe(SessionStatus::Authenticated);
    let outcome = pending.await;
    assert!(outcome.is_success());
    assert_eq!(gate.current_view(), GateView::RedirectingAway);
    assert_eq!(navigator.paths.borrow().len(), 1);
}

#[tokio::test]
async fn stale_failed_submit_leaves_later_status_in_place() {
    let navigator = RecordingNavigator::default();
    let oracle = StubOracle::rejecting(crate::net::api::LoginError::Rejected);
    let mut gate = AuthGate::new(oracle, navigator.clone(), target("/book"));
    gate.observe(SessionStatus::Anonymous);
    let pending = gate.submit(Credentials::new("a@b.com", "wrong"));
    gate.observe(SessionStatus::Authenticated);
    let outcome = pending.await;
    assert!(!outcome.is_success());
    assert_eq!(gate.current_view(), GateView::RedirectingAway);
}
