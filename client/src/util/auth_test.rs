use super::*;

fn state(status: SessionStatus) -> AuthState {
    AuthState { status }
}

#[test]
fn anonymous_writer_is_sent_to_sign_in_from_dashboard() {
    assert_eq!(
        gate_redirect(&state(SessionStatus::Anonymous), RouteArea::Dashboard),
        Some("/users/sign-in")
    );
}

#[test]
fn signed_in_writer_skips_auth_screens() {
    assert_eq!(
        gate_redirect(&state(SessionStatus::Authenticated), RouteArea::Users),
        Some("/dashboard/articles")
    );
}

#[test]
fn no_redirect_while_checking() {
    assert_eq!(gate_redirect(&state(SessionStatus::Checking), RouteArea::Dashboard), None);
    assert_eq!(gate_redirect(&state(SessionStatus::Checking), RouteArea::Users), None);
}

#[test]
fn no_redirect_when_status_matches_area() {
    assert_eq!(gate_redirect(&state(SessionStatus::Authenticated), RouteArea::Dashboard), None);
    assert_eq!(gate_redirect(&state(SessionStatus::Anonymous), RouteArea::Users), None);
}

#[test]
fn both_areas_hold_their_routes_while_checking() {
    let checking = state(SessionStatus::Checking);
    assert_eq!(gate_placeholder(&checking, RouteArea::Users), Some("Checking session..."));
    assert_eq!(gate_placeholder(&checking, RouteArea::Dashboard), Some("Checking session..."));
}

#[test]
fn placeholder_covers_pending_redirects() {
    assert_eq!(
        gate_placeholder(&state(SessionStatus::Anonymous), RouteArea::Dashboard),
        Some("Redirecting to sign in...")
    );
    assert_eq!(
        gate_placeholder(&state(SessionStatus::Authenticated), RouteArea::Users),
        Some("Redirecting to your articles...")
    );
}

#[test]
fn routes_render_when_status_matches_area() {
    assert_eq!(gate_placeholder(&state(SessionStatus::Anonymous), RouteArea::Users), None);
    assert_eq!(gate_placeholder(&state(SessionStatus::Authenticated), RouteArea::Dashboard), None);
}
