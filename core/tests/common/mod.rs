//! Shared fixtures for the integration tests: fake users and a mock server
//! running on a random port.

#![allow(dead_code)]

use std::net::SocketAddr;

use fake::faker::internet::en::{Password, SafeEmail, Username};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use mock_server::Store;
use users_core::CreateUserRequest;

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A random user that satisfies the request schema.
pub fn fake_user() -> CreateUserRequest {
    CreateUserRequest {
        id: (1..10_000i64).fake(),
        username: Username().fake(),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        email: SafeEmail().fake(),
        password: Password(8..16).fake(),
        phone: PhoneNumber().fake(),
        user_status: (0..2i32).fake(),
    }
}

/// Start the mock server on a random port on its own runtime thread.
///
/// Returns the bound address and the server's user store.
pub fn spawn_mock_server() -> (SocketAddr, Store) {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let store = Store::default();
    let server_store = store.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_store(listener, server_store).await
        })
        .unwrap();
    });

    (addr, store)
}

/// An address nothing is listening on.
pub fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
