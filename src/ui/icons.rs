// SPDX-License-Identifier: MPL-2.0
//! Icon registry for the alert and the demo gallery.
//!
//! Icons are small single-path SVG documents embedded as string constants.
//! Each handle is parsed once and cached with `OnceLock`; callers receive an
//! opaque [`IconRef`] they can clone freely. Glyphs are drawn in black and
//! tinted at render time through the SVG style, so one asset serves every
//! theme.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let config = AlertConfig::new().icon(icons::check_circle());
//! ```

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Opaque renderable icon handle.
pub type IconRef = Handle;

/// Wraps a 24x24 Material path into a standalone SVG document.
macro_rules! svg_doc {
    ($path:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d=""#,
            $path,
            r#""/></svg>"#
        )
    };
}

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> IconRef {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &str = svg_doc!($path);
            HANDLE
                .get_or_init(|| Handle::from_memory(DATA.as_bytes()))
                .clone()
        }
    };
}

define_icon!(
    check_circle,
    "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
    "Check circle: a tick inside a filled disc."
);
define_icon!(
    warning,
    "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z",
    "Warning: exclamation mark inside a triangle."
);
define_icon!(
    info,
    "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z",
    "Info: lowercase i inside a filled disc."
);
define_icon!(
    battery_alert,
    "M15.67 4H14V2h-4v2H8.33C7.6 4 7 4.6 7 5.33v15.33C7 21.4 7.6 22 8.33 22h7.33c.74 0 1.34-.6 1.34-1.33V5.33C17 4.6 16.4 4 15.67 4zM13 18h-2v-2h2v2zm0-4h-2V9h2v5z",
    "Battery alert: battery outline with an exclamation mark."
);
define_icon!(
    dark_mode,
    "M12 3c-4.97 0-9 4.03-9 9s4.03 9 9 9 9-4.03 9-9c0-.46-.04-.92-.1-1.36-.98 1.37-2.58 2.26-4.4 2.26-2.98 0-5.4-2.42-5.4-5.4 0-1.81.89-3.42 2.26-4.4-.44-.06-.9-.1-1.36-.1z",
    "Dark mode: crescent moon."
);
define_icon!(
    light_mode,
    "M12 7c-2.76 0-5 2.24-5 5s2.24 5 5 5 5-2.24 5-5-2.24-5-5-5zM2 13h2c.55 0 1-.45 1-1s-.45-1-1-1H2c-.55 0-1 .45-1 1s.45 1 1 1zm18 0h2c.55 0 1-.45 1-1s-.45-1-1-1h-2c-.55 0-1 .45-1 1s.45 1 1 1zM11 2v2c0 .55.45 1 1 1s1-.45 1-1V2c0-.55-.45-1-1-1s-1 .45-1 1zm0 18v2c0 .55.45 1 1 1s1-.45 1-1v-2c0-.55-.45-1-1-1s-1 .45-1 1z",
    "Light mode: sun with rays."
);
define_icon!(
    close,
    "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
    "Close: diagonal cross."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_doc_wraps_path() {
        let doc = svg_doc!("M0 0h24v24H0z");
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"d="M0 0h24v24H0z""#));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn handles_are_cached() {
        assert_eq!(close().id(), close().id());
        assert_ne!(close().id(), warning().id());
    }
}
