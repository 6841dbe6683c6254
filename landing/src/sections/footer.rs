use leptos::prelude::*;

use super::{BrandMark, Container};
use crate::clock::ClockHandle;
use crate::config::SITE;
use crate::content::SOCIAL_LINKS;

/// `© 2025 Shilog. All rights reserved.`
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {}. All rights reserved.", SITE.brand)
}

#[component]
pub fn Footer() -> impl IntoView {
    let clock = use_context::<ClockHandle>().unwrap_or_default();
    // Read the clock at render time, never cache the year
    let copyright = move || copyright_line(clock.current_year());

    view! {
        <footer class="border-t border-white/10 py-10">
            <Container>
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-white/70">
                    <div class="flex items-center gap-2">
                        <BrandMark class="h-6 w-6 rounded-lg" />
                        <span class="copyright">{copyright}</span>
                    </div>
                    <div class="flex items-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="social-link hover:text-white">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Container>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{count, with_owner};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_with_year(year: i32) -> String {
        with_owner(|| {
            provide_context(ClockHandle::fixed(year));
            view! { <Footer /> }.to_html()
        })
    }

    #[test]
    fn copyright_line_format() {
        assert_eq!(copyright_line(2025), "© 2025 Shilog. All rights reserved.");
    }

    #[test]
    fn year_follows_the_clock() {
        let before = render_with_year(2024);
        let after = render_with_year(2031);

        assert!(before.contains("© 2024 Shilog."));
        assert!(after.contains("© 2031 Shilog."));
        assert!(!after.contains("2024"));
    }

    #[test]
    fn falls_back_to_system_clock() {
        let html = with_owner(|| view! { <Footer /> }.to_html());
        let year = ClockHandle::system().current_year();
        assert!(html.contains(&copyright_line(year)));
    }

    #[test]
    fn three_social_links() {
        let html = render_with_year(2025);
        assert_eq!(count(&html, "social-link"), 3);
        for link in SOCIAL_LINKS {
            assert!(html.contains(link.label));
        }
    }
}
