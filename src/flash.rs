//! One-shot status messages that survive a redirect.
//!
//! A handler that redirects after changing data puts a [FlashMessage] in an
//! encrypted cookie with [redirect_with_flash]. The page that the client is
//! sent to takes the message back out with [take_flash], which also removes
//! the cookie so the message is only shown once.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

pub(crate) const FLASH_COOKIE: &str = "flash";

/// Whether a flash message reports success or a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// The user's request went through.
    Success,
    /// The user's request was rejected, e.g. because of invalid form input.
    Error,
}

impl FlashKind {
    fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "success" => Some(FlashKind::Success),
            "error" => Some(FlashKind::Error),
            _ => None,
        }
    }
}

/// A message to show the user once, on the next page they load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    /// Decides how the message is styled.
    pub kind: FlashKind,
    /// The text shown to the user.
    pub text: String,
}

impl FlashMessage {
    /// Create a message reporting that something worked.
    pub fn success(text: &str) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.to_owned(),
        }
    }

    /// Create a message reporting a problem.
    pub fn error(text: &str) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.to_owned(),
        }
    }

    fn to_cookie_value(&self) -> String {
        format!("{}:{}", self.kind.as_str(), self.text)
    }

    fn from_cookie_value(value: &str) -> Option<Self> {
        let (kind, text) = value.split_once(':')?;

        Some(Self {
            kind: FlashKind::parse(kind)?,
            text: text.to_owned(),
        })
    }
}

/// Redirect the client to `location` (303 See Other) and store `message` in
/// `jar` so that the page at `location` can display it.
pub fn redirect_with_flash(
    jar: PrivateCookieJar,
    location: &str,
    message: FlashMessage,
) -> Response {
    let jar = jar.add(
        Cookie::build((FLASH_COOKIE, message.to_cookie_value()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    );

    (jar, Redirect::to(location)).into_response()
}

/// Remove the flash message from `jar`, returning the updated jar and the
/// message if there was one.
///
/// The returned jar must be included in the response for the removal to
/// reach the client.
pub fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<FlashMessage>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let message = FlashMessage::from_cookie_value(cookie.value());
    if message.is_none() {
        tracing::warn!("Ignoring malformed flash cookie {:?}", cookie.value());
    }

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));

    (jar, message)
}
