//! Dashboard Page Renderer
//!
//! Renders the promotion dashboard from a `ContentDocument`.
//!
//! ## Sections
//! 1. Hero - name, summary, focus pills
//! 2. Intro - optional heading, text and image
//! 3. Journey Timeline - gantt chart of client and internal work
//! 4. Highlights - explicit or derived summary cards
//! 5. KPI Deep-Dives - grouped evidence per competency
//! 6. Certifications & Achievements - chips plus one testimonial
//! 7. Feedback / Growth Plan - tabbed cards and plan items
//! 8. Appendix - testimonial images

pub mod context;
pub mod generator;
pub mod sections;
pub mod utils;
pub mod view_builder;
pub mod view_models;

pub use context::RenderContext;
pub use generator::DashboardGenerator;
pub use view_builder::build_page_data;
pub use view_models::DashboardPageData;
