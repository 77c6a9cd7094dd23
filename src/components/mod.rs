//! UI Components
//!
//! Leptos page and widget components.

mod member_tracker;
mod notice_banner;
mod recipe_page;

pub use member_tracker::MemberTracker;
pub use notice_banner::NoticeBanner;
pub use recipe_page::RecipePage;
