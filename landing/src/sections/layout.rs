use leptos::prelude::*;

/// Centered column with the page's horizontal padding.
#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-7xl px-4 sm:px-6 lg:px-8">
            {children()}
        </div>
    }
}

/// Gradient square used as the logo and testimonial avatar.
#[component]
pub fn BrandMark(#[prop(default = "h-8 w-8 rounded-xl")] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("bg-gradient-to-br from-cyan-400 to-blue-600 {class}")></div>
    }
}
