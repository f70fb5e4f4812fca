use axum::{
    body::Body,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    response::Response,
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};

/// Build the cookie jar a browser would send back after receiving `response`.
///
/// Only the `name=value` part of each `Set-Cookie` header is kept, which is
/// all a browser sends in its `Cookie` header.
#[track_caller]
pub(crate) fn jar_from_response(response: &Response<Body>, key: Key) -> PrivateCookieJar {
    let cookies = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().expect("Set-Cookie header is not valid ASCII"))
        .filter_map(|value| value.split(';').next())
        .collect::<Vec<_>>()
        .join("; ");

    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&cookies).expect("Could not create cookie header"),
    );

    PrivateCookieJar::from_headers(&headers, key)
}
