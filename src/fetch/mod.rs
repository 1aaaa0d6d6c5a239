//! The three acquisition strategies, in their default priority order.

pub mod api;
pub mod browser;
pub mod page;

pub use api::{DirectQuery, fetch_via_api};
pub use browser::{BrowserAutomation, fetch_via_browser};
pub use page::{RenderedPage, fetch_via_page};
