use httpmock::{Method::PUT, MockServer};
use mockserver_client::prelude::*;

#[test]
fn clear_all_test() {
    // Arrange
    let server = MockServer::start();

    let m = server.mock(|when, then| {
        when.method(PUT)
            .path("/mockserver/clear")
            .query_param("type", "all")
            .header("content-type", "application/json")
            .body("");
        then.status(200);
    });

    let client = MockServerClient::new(&server.base_url()).unwrap();

    // Act
    let first = client.clear_all();
    let second = client.clear_all();

    // Assert
    m.assert_calls(2);
    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[test]
fn clear_by_id_test() {
    // Arrange
    let server = MockServer::start();

    let m = server.mock(|when, then| {
        when.method(PUT)
            .path("/mockserver/clear")
            .query_param("type", "all")
            .body(r#"{"id":"abc123"}"#);
        then.status(200);
    });

    let client = MockServerClient::new(&server.base_url()).unwrap();

    // Act
    let result = client.clear_by_id("abc123");

    // Assert
    m.assert();
    assert!(result.is_ok());
}

#[test]
fn clear_by_request_test() {
    // Arrange
    let server = MockServer::start();

    let m = server.mock(|when, then| {
        when.method(PUT)
            .path("/mockserver/clear")
            .query_param("type", "all")
            .body(r#"{"method":"GET","path":"/hello"}"#);
        then.status(200);
    });

    let client = MockServerClient::new(&server.base_url()).unwrap();

    // Act
    let result = client.clear(&Request::new().method("GET").path("/hello"));

    // Assert
    m.assert();
    assert!(result.is_ok());
}

#[test]
fn clear_log_and_reset_test() {
    // Arrange
    let server = MockServer::start();

    let clear_log = server.mock(|when, then| {
        when.method(PUT)
            .path("/mockserver/clear")
            .query_param("type", "log");
        then.status(200);
    });
    let reset = server.mock(|when, then| {
        when.method(PUT).path("/mockserver/reset");
        then.status(200);
    });

    let client = MockServerClient::new(&server.base_url()).unwrap();

    // Act
    client.clear_by_type(ClearType::Log).unwrap();
    client.reset().unwrap();

    // Assert
    clear_log.assert();
    reset.assert();
}
