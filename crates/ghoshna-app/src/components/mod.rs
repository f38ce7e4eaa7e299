pub mod auth_page;
pub mod dashboard_page;
pub mod header;
pub mod language_selector;
pub mod notice_banner;
pub mod translate_page;
