pub mod app;
pub mod blog_preview;
pub mod home;
pub mod markdown;
pub mod post;
