// Page sections, in the order App stacks them

mod about;
mod contact;
mod footer;
mod hero;
mod layout;
mod navbar;
mod projects;
mod services;
mod tech;
mod testimonials;

pub use about::About;
pub use contact::{Contact, Submission, discard_submission};
pub use footer::{Footer, copyright_line};
pub use hero::Hero;
pub use layout::{BrandMark, Container};
pub use navbar::{MenuState, MobileMenu, Navbar};
pub use projects::Projects;
pub use services::Services;
pub use tech::Tech;
pub use testimonials::{StarRating, Testimonials};

/// Heading style shared by every section title.
pub(crate) const SECTION_TITLE: &str = "text-3xl md:text-4xl font-bold tracking-tight";

/// Rounded pill link used for secondary calls to action.
pub(crate) const PILL_LINK: &str = "inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-4 py-2 text-sm hover:bg-white/10 transition";
