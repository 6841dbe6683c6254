use leptos::prelude::*;

use super::{Container, PILL_LINK, SECTION_TITLE};
use crate::config::PALETTE;
use crate::content::{PROJECTS, ProjectCard};
use crate::icons::{ICON_ARROW_RIGHT, Icon};
use crate::motion::{MotionSpec, Reveal};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20">
            <Container>
                <div class="flex items-end justify-between">
                    <div>
                        <h2 class=SECTION_TITLE>"Featured work"</h2>
                        <p class="mt-3 text-white/80">"Selected projects from our portfolio."</p>
                    </div>
                    <a href="#contact" class=format!("hidden sm:inline-flex {PILL_LINK}")>
                        "Request a case study"
                    </a>
                </div>
                <div class="mt-10 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, card)| view! { <ProjectCardView card=*card index=i /> })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}

#[component]
fn ProjectCardView(card: ProjectCard, index: usize) -> impl IntoView {
    // Screenshot placeholder until real case-study art exists
    let thumb_style = format!("background-color: {}99;", PALETTE.secondary);

    view! {
        <Reveal
            spec=MotionSpec::in_view(30).staggered(index, 50)
            class="project-card relative rounded-2xl border border-white/10 bg-gradient-to-b from-white/10 to-white/5 p-6 backdrop-blur"
        >
            <div class="aspect-video rounded-xl border border-white/10" style=thumb_style></div>
            <div class="mt-4 flex items-center justify-between">
                <div>
                    <h3 class="font-semibold">{card.title}</h3>
                    <p class="project-tech text-xs text-white/70">{card.tech_line()}</p>
                </div>
                <a href="#contact" class="inline-flex items-center gap-2 text-cyan-400">
                    "Details"
                    <Icon path=ICON_ARROW_RIGHT class="h-4 w-4" />
                </a>
            </div>
        </Reveal>
    }
}
