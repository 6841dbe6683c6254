use leptos::prelude::*;

use super::{Container, SECTION_TITLE};
use crate::content::{SERVICES, ServiceCard};
use crate::icons::{ICON_ARROW_RIGHT, ICON_STAR, Icon};
use crate::motion::{MotionSpec, Reveal};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-20">
            <Container>
                <h2 class=SECTION_TITLE>"What we do"</h2>
                <p class="mt-3 text-white/80">"Full\u{2011}stack capabilities tailored to your roadmap."</p>
                <div class="mt-10 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, card)| view! { <ServiceCardView card=*card index=i /> })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}

#[component]
fn ServiceCardView(card: ServiceCard, index: usize) -> impl IntoView {
    view! {
        <Reveal
            spec=MotionSpec::in_view(20).staggered(index, 50)
            class="service-card group rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur hover:bg-white/10 transition"
        >
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{card.title}</h3>
                <Icon path=ICON_STAR class="h-5 w-5 text-cyan-400 opacity-70 group-hover:opacity-100" />
            </div>
            <p class="mt-3 text-white/80 text-sm">{card.description}</p>
            <div class="mt-6 inline-flex items-center gap-2 text-cyan-400 opacity-0 group-hover:opacity-100 transition">
                "Learn more"
                <Icon path=ICON_ARROW_RIGHT class="h-4 w-4" />
            </div>
        </Reveal>
    }
}
