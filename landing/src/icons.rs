//! Inline SVG icons (Lucide, 24px grid, stroke-based).

use leptos::prelude::*;

/// Renders a stroke icon from path data.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ARROW_RIGHT class="h-5 w-5" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Tailwind sizing and colour classes
    #[prop(default = "h-5 w-5")]
    class: &'static str,
    /// Fill colour; icons are outlines unless this is set
    #[prop(default = "none")]
    fill: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// Hamburger (mobile menu closed)
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

/// Close (mobile menu open)
pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";

pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

pub const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

pub const ICON_SPARKLES: &str = "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0l1.58 6.14a2 2 0 0 0 1.44 1.44l6.14 1.58a.5.5 0 0 1 0 .96l-6.14 1.58a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0zM20 3v4M22 5h-4M4 17v2M5 18H3";

/// Paper plane (contact email)
pub const ICON_SEND: &str = "M22 2 11 13M22 2l-7 20-4-9-9-4 20-7z";

pub const ICON_CHECK_CIRCLE: &str = "M12 22c5.52 0 10-4.48 10-10S17.52 2 12 2 2 6.48 2 12s4.48 10 10 10zM9 12l2 2 4-4";
