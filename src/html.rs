//! Shared page layout, style classes and formatting helpers for the HTML views.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};

use crate::endpoints;

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

pub const BUTTON_DELETE_STYLE: &str = "button-delete";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_STYLE: &str = "table";
pub const TABLE_HEADER_STYLE: &str = "table-header";
pub const TABLE_ROW_STYLE: &str = "table-row";
pub const TABLE_CELL_STYLE: &str = "table-cell";
pub const TABLE_CELL_NUMBER_STYLE: &str = "table-cell number";

// Category badge style
pub const CATEGORY_BADGE_STYLE: &str = "badge";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }
                link href={ (endpoints::STATIC) "/main.css" } rel="stylesheet";
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 class="error-code" { (header) }

            p class="error-description" { (description) }

            p { (fix) }

            a href=(endpoints::EXPENSES_VIEW) class=(BUTTON_PRIMARY_STYLE)
            {
                "Back to Expenses"
            }
        }
    );

    base(title, &content)
}

/// Format `number` as dollars with thousands separators and two decimal places,
/// e.g. "$1,450.00" or "-$4.20".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("\"-$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt drops trailing zeros from the fraction, e.g. "12.30" is rendered as "12.3".
    match formatted_string.rfind('.') {
        None => formatted_string.push_str(".00"),
        Some(index) => {
            for _ in formatted_string.len() - index - 1..2 {
                formatted_string.push('0');
            }
        }
    }

    formatted_string
}

#[cfg(test)]
mod format_currency_tests {
    use super::format_currency;

    #[test]
    fn pads_to_two_decimal_places() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(12.34), "$12.34");
    }

    #[test]
    fn whole_amounts_have_cents() {
        assert_eq!(format_currency(12.0), "$12.00");
        assert_eq!(format_currency(40.0), "$40.00");
    }

    #[test]
    fn large_amounts_have_thousands_separators() {
        assert_eq!(format_currency(1450.0), "$1,450.00");
        assert_eq!(format_currency(1234.56), "$1,234.56");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-4.2), "-$4.20");
        assert_eq!(format_currency(-1450.0), "-$1,450.00");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_currency(1234.567), "$1,234.57");
    }
}
