use super::*;

#[test]
fn fetch_transport_takes_endpoint_and_timeout_from_config() {
    let config = SiteConfig { contact_endpoint: "/api/contact".to_owned(), submit_timeout_ms: 5_000, ..SiteConfig::default() };
    let transport = FetchTransport::new(&config);
    assert_eq!(transport.endpoint(), "/api/contact");
    assert_eq!(transport.timeout_ms(), 5_000);
}

#[test]
fn fetch_transport_defaults_to_php_endpoint() {
    let transport = FetchTransport::new(&SiteConfig::default());
    assert_eq!(transport.endpoint(), "contact_submit.php");
    assert_eq!(transport.timeout_ms(), 15_000);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_transport_is_unavailable_outside_the_browser() {
    use crate::contact::request::{ContactFields, SubmissionRequest};

    let request = SubmissionRequest::try_from(ContactFields {
        name: "Ada".to_owned(),
        email: "ada@x.com".to_owned(),
        message: "Hi".to_owned(),
    })
    .unwrap();
    let transport = FetchTransport::new(&SiteConfig::default());
    let result = futures::executor::block_on(transport.post(&request));
    assert_eq!(result, Err(TransportError::Unavailable));
}

#[test]
fn transport_error_messages() {
    assert_eq!(TransportError::Timeout { ms: 250 }.to_string(), "request timed out after 250 ms");
    assert_eq!(TransportError::Request("connection refused".to_owned()).to_string(), "request failed: connection refused");
    assert_eq!(TransportError::Unavailable.to_string(), "browser networking unavailable");
}
