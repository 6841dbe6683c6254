use leptos::prelude::*;

use super::{Container, SECTION_TITLE};
use crate::content::TECH_STACK;
use crate::motion::{MotionSpec, Reveal};

#[component]
pub fn Tech() -> impl IntoView {
    view! {
        <section id="tech" class="py-20">
            <Container>
                <h2 class=SECTION_TITLE>"Our stack"</h2>
                <p class="mt-3 text-white/80">
                    "Battle\u{2011}tested technologies we use to ship fast and scale."
                </p>
                <div class="mt-8 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-5 gap-4">
                    {TECH_STACK
                        .iter()
                        .enumerate()
                        .map(|(i, chip)| {
                            view! {
                                <Reveal
                                    spec=MotionSpec::in_view(10).staggered(i, 50)
                                    class="tech-chip rounded-xl border border-white/10 bg-white/5 px-4 py-3 text-center text-sm hover:bg-white/10"
                                >
                                    {chip.name}
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::count;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_ten_chips() {
        let html = view! { <Tech /> }.to_html();
        assert_eq!(count(&html, "tech-chip"), 10);
        assert!(html.contains("Kubernetes"));
        assert!(html.contains("id=\"tech\""));
    }
}
