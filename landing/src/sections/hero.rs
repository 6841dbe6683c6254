use leptos::prelude::*;

use super::Container;
use crate::config::SITE;
use crate::content::{HERO_METRICS, MetricTile};
use crate::icons::{ICON_ARROW_RIGHT, Icon};
use crate::motion::{MotionSpec, Reveal};

/// Hero copy slides in over 800ms, each line 200ms after the previous one.
const HERO_DURATION_MS: u32 = 800;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero-section relative h-[85vh] md:h-[90vh] overflow-hidden">
            <div class="absolute inset-0">
                <SceneEmbed url=SITE.hero_scene_url />
            </div>
            <div class="pointer-events-none absolute inset-0 bg-gradient-to-b from-[#0F172A]/40 via-[#0F172A]/60 to-[#0F172A]"></div>
            <Container>
                <div class="relative z-10 pt-24 md:pt-28 lg:pt-32">
                    <Reveal spec=MotionSpec::on_mount(30, HERO_DURATION_MS)>
                        <h1 class="max-w-4xl text-4xl md:text-6xl font-extrabold tracking-tight">
                            "Building the Web of Tomorrow"
                        </h1>
                    </Reveal>
                    <Reveal spec=MotionSpec::on_mount(20, HERO_DURATION_MS).delayed(200)>
                        <p class="mt-4 max-w-2xl text-base md:text-lg text-white/80">
                            {SITE.tagline}
                        </p>
                    </Reveal>
                    <Reveal
                        spec=MotionSpec::on_mount(20, HERO_DURATION_MS).delayed(400)
                        class="mt-8 flex flex-col sm:flex-row gap-3"
                    >
                        <a
                            href="#contact"
                            class="inline-flex items-center justify-center gap-2 rounded-full bg-cyan-500 px-6 py-3 font-semibold text-[#0F172A] shadow-lg shadow-cyan-500/20 hover:bg-cyan-400 transition"
                        >
                            "Get Started"
                            <Icon path=ICON_ARROW_RIGHT />
                        </a>
                        <a
                            href="#projects"
                            class="inline-flex items-center justify-center gap-2 rounded-full border border-white/10 bg-white/5 px-6 py-3 font-semibold text-white hover:bg-white/10 transition"
                        >
                            "View Projects"
                        </a>
                    </Reveal>
                    <div class="mt-10 grid grid-cols-2 sm:grid-cols-4 gap-4 text-white/70">
                        {HERO_METRICS.iter().map(|tile| view! { <HeroMetric tile=*tile /> }).collect_view()}
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[component]
fn HeroMetric(tile: MetricTile) -> impl IntoView {
    view! {
        <div class="hero-metric rounded-xl bg-white/5 border border-white/10 p-4 text-center">
            <div class="text-2xl font-extrabold text-white">{tile.value}</div>
            <div class="text-xs uppercase tracking-wider">{tile.label}</div>
        </div>
    }
}

/// 3D scene rendered by the `<spline-viewer>` web component (loaded in
/// `index.html`). Loading and failures are entirely the viewer's business.
#[component]
fn SceneEmbed(url: &'static str) -> impl IntoView {
    view! {
        <spline-viewer url=url style="width: 100%; height: 100%; display: block;"></spline-viewer>
    }
}
