pub mod article;
pub mod business;
pub mod content;
pub mod disclosure;
pub mod faq;
pub mod markdown;
pub mod phone;
