//! # shilog-landing
//!
//! Single-page marketing site for Shilog, rendered client-side with Leptos 0.8.
//!
//! The page is a fixed stack of stateless sections driven by literal content
//! (see [`content`]). The only interactive state is the mobile navigation flag
//! owned by [`sections::Navbar`].
//!
//! ```text
//! App
//! ├── Navbar        (MenuState)
//! ├── Hero          (3D scene embed + metric tiles)
//! ├── About         #about
//! ├── Services      #services
//! ├── Projects      #projects
//! ├── Tech          #tech
//! ├── Testimonials
//! ├── Contact       #contact
//! └── Footer        (year from ClockHandle)
//! ```
//!
//! Built with `trunk serve` from the `landing/` directory.

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod icons;
pub mod motion;
pub mod sections;
pub mod telemetry;

use leptos::prelude::*;
use sections::*;

pub use clock::ClockHandle;
pub use error::SiteError;

/// Composition root: every section in page order inside the themed wrapper.
#[component]
pub fn App() -> impl IntoView {
    if use_context::<ClockHandle>().is_none() {
        provide_context(ClockHandle::system());
    }

    let shell_style = format!(
        "background-color: {}; color: {};",
        config::PALETTE.primary,
        config::PALETTE.text
    );

    view! {
        <div class="min-h-screen" style=shell_style>
            <Navbar />
            <main>
                <Hero />
                <About />
                <Services />
                <Projects />
                <Tech />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;
    use crate::sections::test_support::with_owner;
    use leptos::tachys::view::RenderHtml;

    fn render_app() -> String {
        with_owner(|| {
            provide_context(ClockHandle::fixed(2025));
            view! { <App /> }.to_html()
        })
    }

    #[test]
    fn every_nav_target_exists_as_section_id() {
        let html = render_app();
        for link in NAV_LINKS {
            let id = format!("id=\"{}\"", link.target.trim_start_matches('#'));
            assert!(html.contains(&id), "missing section {id}");
        }
    }

    #[test]
    fn sections_render_in_page_order() {
        let html = render_app();
        let markers = [
            "<header",
            "hero-section",
            "id=\"about\"",
            "id=\"services\"",
            "id=\"projects\"",
            "id=\"tech\"",
            "testimonials-section",
            "id=\"contact\"",
            "<footer",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn shell_uses_palette_colours() {
        let html = render_app();
        assert!(html.contains("min-h-screen"));
        assert!(html.contains("#0F172A"));
        assert!(html.contains("#F1F5F9"));
    }
}
