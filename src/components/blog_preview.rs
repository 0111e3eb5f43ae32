use crate::components::app::Route;
use crate::posts::PostMeta;
use chrono::DateTime;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

/// One entry in the blog listing: linked title, publish date, and a
/// description clamped to two lines by the `line-clamp-2` class.
#[component]
pub fn BlogPreview(post: PostMeta) -> Element {
    let published = format_publish_date(&post.published_at)?;
    rsx! {
        div {
            key: "{post.slug}",
            class: "blog-preview",
            h2 { class: "preview-title",
                Link {
                    to: Route::Post { slug: post.slug.clone() },
                    "{post.title}"
                }
            }
            div { class: "preview-date",
                "{published}"
            }
            div { class: "preview-description line-clamp-2",
                "{post.description}"
            }
        }
    }
}

/// Formats an RFC 3339 timestamp as e.g. "January 05, 2024".
pub fn format_publish_date(published_at: &str) -> Result<String, chrono::ParseError> {
    let date = DateTime::parse_from_rfc3339(published_at)?;
    Ok(date.format("%B %d, %Y").to_string())
}
