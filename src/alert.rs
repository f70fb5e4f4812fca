//! Renders flash messages as alert banners.

use maud::{Markup, html};

use crate::flash::{FlashKind, FlashMessage};

const ALERT_SUCCESS_STYLE: &str = "alert alert-success";
const ALERT_ERROR_STYLE: &str = "alert alert-error";

/// Render `message` as a banner, or nothing if there is no message.
pub fn alert_view(message: Option<&FlashMessage>) -> Markup {
    let Some(message) = message else {
        return html!();
    };

    let style = match message.kind {
        FlashKind::Success => ALERT_SUCCESS_STYLE,
        FlashKind::Error => ALERT_ERROR_STYLE,
    };

    html! {
        div class=(style) role="alert"
        {
            p { (message.text) }
        }
    }
}
