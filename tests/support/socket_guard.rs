//! Skip helper for tests that bind localhost sockets (wiremock, dead-port
//! probes). Sandboxed environments can refuse the bind; those tests skip
//! instead of failing unless strict mode is requested via env var.

use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

#[must_use]
pub fn socket_tests_required() -> bool {
    std::env::var("CIVITAI_RESOLVER_REQUIRE_SOCKET_TESTS")
        .ok()
        .is_some_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

#[track_caller]
#[must_use]
pub fn should_skip_socket_bound_test() -> bool {
    if TcpListener::bind("127.0.0.1:0").is_ok() {
        return false;
    }

    let location = Location::caller();
    let message = format!(
        "localhost bind refused at {}:{}; this test needs a local socket for its fake Civitai API",
        location.file(),
        location.line()
    );
    if socket_tests_required() {
        panic!("{message}. Unset CIVITAI_RESOLVER_REQUIRE_SOCKET_TESTS to skip instead.");
    }

    eprintln!("{message}. Skipping. Set CIVITAI_RESOLVER_REQUIRE_SOCKET_TESTS=1 to fail instead.");
    true
}

pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if should_skip_socket_bound_test() {
        None
    } else {
        Some(MockServer::start().await)
    }
}
