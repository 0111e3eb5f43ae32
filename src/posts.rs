use serde::{Deserialize, Serialize};

/// Metadata for one blog post. Supplied read-only to the rendering
/// components; `slug` doubles as the list key and the URL path segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    /// RFC 3339 timestamp, e.g. "2024-01-05T00:00:00.000Z".
    pub published_at: String,
    pub description: String,
}

pub fn all() -> Vec<PostMeta> {
    vec![
        PostMeta {
            slug: "site-redesign".into(),
            title: "Redesigning This Site in Rust".into(),
            published_at: "2025-07-02T12:00:00+02:00".into(),
            description: "Notes from porting the old static pages over to a \
                wasm front-end, and the handful of things that surprised me \
                along the way."
                .into(),
        },
        PostMeta {
            slug: "rust-and-wasm".into(),
            title: "Rust and WebAssembly, a Year In".into(),
            published_at: "2024-03-18T09:30:00Z".into(),
            description: "What shipping a small wasm app taught me about \
                bundle sizes, tooling, and when the borrow checker is \
                actually on your side."
                .into(),
        },
        PostMeta {
            slug: "hello-world".into(),
            title: "Hello, World!".into(),
            published_at: "2024-01-05T00:00:00.000Z".into(),
            description: "A short post.".into(),
        },
    ]
}

pub fn find(slug: &str) -> Option<PostMeta> {
    all().into_iter().find(|post| post.slug == slug)
}

pub fn content(slug: &str) -> &'static str {
    match slug {
        "site-redesign" => include_str!("blog/site-redesign.md"),
        "rust-and-wasm" => include_str!("blog/rust-and-wasm.md"),
        "hello-world" => include_str!("blog/hello-world.md"),
        _ => "Post not found.",
    }
}
