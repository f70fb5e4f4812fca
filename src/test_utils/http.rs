use axum::{
    body::Body,
    http::{StatusCode, header::LOCATION},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

/// Assert that `response` is a 303 See Other redirect to `endpoint`.
#[track_caller]
pub(crate) fn assert_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get(LOCATION)
        .expect("Headers missing location")
        .to_str()
        .expect("Could not convert to str");
    assert_eq!(
        location, endpoint,
        "got redirect to {location:?}, want redirect to {endpoint:?}"
    );
}
