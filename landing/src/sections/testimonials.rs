use leptos::prelude::*;

use super::{BrandMark, Container, SECTION_TITLE};
use crate::content::{TESTIMONIALS, Testimonial};
use crate::icons::{ICON_STAR, Icon};
use crate::motion::{MotionSpec, Reveal};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials-section py-20">
            <Container>
                <h2 class=SECTION_TITLE>"What clients say"</h2>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| view! { <QuoteCard item=*item index=i /> })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}

#[component]
fn QuoteCard(item: Testimonial, index: usize) -> impl IntoView {
    view! {
        <Reveal
            spec=MotionSpec::in_view(20).staggered(index, 50)
            class="quote-card rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur"
        >
            <div class="flex items-center gap-3">
                <BrandMark class="h-10 w-10 rounded-full" />
                <div>
                    <div class="font-semibold">{item.name}</div>
                    <div class="text-xs text-white/70">{item.role}</div>
                </div>
            </div>
            <p class="mt-4 text-white/80">{format!("\u{201c}{}\u{201d}", item.quote)}</p>
            <StarRating rating=item.rating />
        </Reveal>
    }
}

/// One filled star per rating point.
#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="mt-4 flex" role="img" aria-label=format!("Rated {rating} stars")>
            {(0..rating)
                .map(|_| {
                    view! {
                        <Icon
                            path=ICON_STAR
                            class="rating-star h-4 w-4 text-cyan-400"
                            fill="currentColor"
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::count;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_three_quote_cards() {
        let html = view! { <Testimonials /> }.to_html();
        assert_eq!(count(&html, "quote-card"), 3);
        for item in TESTIMONIALS {
            assert!(html.contains(item.name));
            assert!(html.contains(item.role));
        }
    }

    #[test]
    fn star_count_matches_rating() {
        let five = view! { <StarRating rating=5 /> }.to_html();
        assert_eq!(count(&five, "rating-star"), 5);

        let two = view! { <StarRating rating=2 /> }.to_html();
        assert_eq!(count(&two, "rating-star"), 2);

        let none = view! { <StarRating rating=0 /> }.to_html();
        assert_eq!(count(&none, "rating-star"), 0);
    }

    #[test]
    fn every_card_shows_its_literal_rating() {
        let html = view! { <Testimonials /> }.to_html();
        let expected: usize = TESTIMONIALS.iter().map(|t| usize::from(t.rating)).sum();
        assert_eq!(count(&html, "rating-star"), expected);
        assert_eq!(expected, 15);
    }

    #[test]
    fn quotes_are_wrapped_in_curly_quotes() {
        let html = view! { <Testimonials /> }.to_html();
        assert!(html.contains("\u{201c}A true partner for scaling our platform.\u{201d}"));
    }
}
