use leptos::prelude::*;

use super::{BrandMark, Container, PILL_LINK};
use crate::config::SITE;
use crate::content::NAV_LINKS;
use crate::icons::{ICON_MENU, ICON_SPARKLES, ICON_X, Icon};

/// Whether the mobile navigation list is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub const CLOSED: MenuState = MenuState { is_open: false };

    pub fn is_open(self) -> bool {
        self.is_open
    }

    pub fn toggled(self) -> Self {
        MenuState {
            is_open: !self.is_open,
        }
    }
}

/// Flip the menu once; bound to the toggle button's click.
fn toggle(menu: RwSignal<MenuState>) {
    menu.update(|state| *state = state.toggled());
    tracing::debug!(open = menu.get_untracked().is_open(), "mobile menu toggled");
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::CLOSED);
    let is_open = Signal::derive(move || menu.get().is_open());

    view! {
        <header class="sticky top-0 z-50 backdrop-blur supports-[backdrop-filter]:bg-[#0F172A]/60 border-b border-white/10">
            <Container>
                <div class="flex items-center justify-between py-4">
                    <a href="#" class="flex items-center gap-2">
                        <BrandMark />
                        <span class="font-bold tracking-tight text-xl">{SITE.brand}</span>
                    </a>
                    <nav class="desktop-nav hidden md:flex items-center gap-8 text-sm text-white/80">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.target class="hover:text-white transition">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="hidden md:flex items-center gap-3">
                        <a href="#contact" class=PILL_LINK>
                            <Icon path=ICON_SPARKLES class="h-4 w-4 text-cyan-400" />
                            "Get a Quote"
                        </a>
                    </div>
                    <button
                        type="button"
                        class="menu-toggle md:hidden inline-flex items-center justify-center rounded-md p-2 text-white/80 hover:text-white"
                        aria-label="Toggle navigation"
                        aria-expanded=move || if is_open.get() { "true" } else { "false" }
                        on:click=move |_| toggle(menu)
                    >
                        <Show
                            when=move || is_open.get()
                            fallback=|| view! { <Icon path=ICON_MENU class="h-6 w-6" /> }
                        >
                            <Icon path=ICON_X class="h-6 w-6" />
                        </Show>
                    </button>
                </div>
                <MobileMenu open=is_open />
            </Container>
        </header>
    }
}

/// Vertical link list under the header bar, present only while `open`.
#[component]
pub fn MobileMenu(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="mobile-menu md:hidden pb-4 space-y-2">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.target
                                class="block rounded-lg px-3 py-2 bg-white/5 border border-white/10 text-white/80 hover:text-white"
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{count, with_owner};
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn menu_state_starts_closed_and_flips() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert!(state.toggled().is_open());
        assert!(!state.toggled().toggled().is_open());
    }

    #[test]
    fn each_activation_flips_exactly_once() {
        with_owner(|| {
            let menu = RwSignal::new(MenuState::CLOSED);
            toggle(menu);
            assert!(menu.get_untracked().is_open());
            toggle(menu);
            assert!(!menu.get_untracked().is_open());
            toggle(menu);
            assert!(menu.get_untracked().is_open());
        });
    }

    #[test]
    fn mobile_list_present_iff_open() {
        with_owner(|| {
            let (open, set_open) = signal(false);

            let closed = view! { <MobileMenu open=open /> }.to_html();
            assert!(!closed.contains("mobile-menu"));
            assert_eq!(count(&closed, "href="), 0);

            set_open.set(true);
            let opened = view! { <MobileMenu open=open /> }.to_html();
            assert!(opened.contains("mobile-menu"));
            assert_eq!(count(&opened, "href="), NAV_LINKS.len());
        });
    }

    #[test]
    fn navbar_lists_links_in_order() {
        let html = with_owner(|| view! { <Navbar /> }.to_html());
        let nav_start = html.find("desktop-nav").expect("desktop nav");
        let nav = &html[nav_start..];

        let mut last = 0;
        for link in NAV_LINKS {
            let needle = format!("href=\"{}\"", link.target);
            let at = nav.find(&needle).unwrap_or_else(|| panic!("missing {needle}"));
            assert!(at >= last, "{} out of order", link.label);
            assert!(nav[at..].contains(link.label));
            last = at;
        }
    }

    #[test]
    fn navbar_renders_closed() {
        let html = with_owner(|| view! { <Navbar /> }.to_html());
        assert!(!html.contains("mobile-menu"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains(ICON_MENU));
        assert!(!html.contains(ICON_X));
        assert!(html.contains("Get a Quote"));
    }
}
