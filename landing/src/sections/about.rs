use leptos::prelude::*;

use super::{Container, SECTION_TITLE};
use crate::config::SITE;
use crate::content::{ABOUT_METRICS, ABOUT_POINTS};
use crate::icons::{ICON_CHECK_CIRCLE, Icon};
use crate::motion::{MotionSpec, Reveal};

#[component]
pub fn About() -> impl IntoView {
    let intro = format!(
        "{} is a full\u{2011}stack development partner for startups and enterprises. \
         We combine world\u{2011}class engineering with product thinking to ship reliable, scalable software.",
        SITE.brand
    );

    view! {
        <section id="about" class="relative py-20">
            <Container>
                <div class="grid lg:grid-cols-2 gap-10 items-center">
                    <div>
                        <h2 class=SECTION_TITLE>"Who we are"</h2>
                        <p class="mt-4 text-white/80">{intro}</p>
                        <ul class="mt-6 space-y-3 text-white/80">
                            {ABOUT_POINTS
                                .iter()
                                .map(|point| {
                                    view! {
                                        <li class="flex items-start gap-3">
                                            <Icon path=ICON_CHECK_CIRCLE class="mt-0.5 h-5 w-5 text-cyan-400" />
                                            <span>{*point}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        {ABOUT_METRICS
                            .iter()
                            .enumerate()
                            .map(|(i, tile)| {
                                view! {
                                    <Reveal
                                        spec=MotionSpec::in_view(20).staggered(i, 100)
                                        class="about-tile rounded-2xl bg-gradient-to-br from-white/10 to-white/5 p-6 border border-white/10 backdrop-blur"
                                    >
                                        <div class="text-4xl font-extrabold text-white">{tile.value}</div>
                                        <div class="text-sm text-white/70">{tile.label}</div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Container>
        </section>
    }
}
