pub mod accordion;
pub mod app;
pub mod article_view;
pub mod emergency_banner;
pub mod faq_view;
pub mod footer;
pub mod header;
pub mod hero;
pub mod services;
pub mod site_content;
