use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Inline description content: plain text with optional emphasis and links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RichText {
    Text(String),
    Emphasis(Box<RichText>),
    Link { href: String, content: Box<RichText> },
    Sequence(Vec<RichText>),
}

impl RichText {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn emphasis(inner: impl Into<RichText>) -> Self {
        Self::Emphasis(Box::new(inner.into()))
    }

    pub fn link(href: impl Into<String>, content: impl Into<RichText>) -> Self {
        Self::Link {
            href: href.into(),
            content: Box::new(content.into()),
        }
    }

    pub fn sequence(nodes: impl IntoIterator<Item = RichText>) -> Self {
        Self::Sequence(nodes.into_iter().collect())
    }

    /// Text content with all markup stripped.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Emphasis(inner) => inner.collect_text(out),
            Self::Link { content, .. } => content.collect_text(out),
            Self::Sequence(nodes) => nodes.iter().for_each(|node| node.collect_text(out)),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Emphasis(inner) => inner.is_blank(),
            Self::Link { content, .. } => content.is_blank(),
            Self::Sequence(nodes) => nodes.iter().all(Self::is_blank),
        }
    }

    pub fn render(&self) -> AnyView {
        match self {
            Self::Text(text) => text.clone().into_any(),
            Self::Emphasis(inner) => view! { <em>{inner.render()}</em> }.into_any(),
            Self::Link { href, content } => {
                view! { <a href=href.clone()>{content.render()}</a> }.into_any()
            }
            Self::Sequence(nodes) => nodes.iter().map(Self::render).collect_view().into_any(),
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RichText {
        RichText::sequence([
            RichText::text("Wired through "),
            RichText::emphasis("Liquid"),
            RichText::text(" and "),
            RichText::link("/docs/theme", RichText::emphasis("JavaScript")),
        ])
    }

    #[test]
    fn test_plain_text_strips_markup() {
        assert_eq!(sample().plain_text(), "Wired through Liquid and JavaScript");
    }

    #[test]
    fn test_is_blank() {
        assert!(RichText::text("   ").is_blank());
        assert!(RichText::sequence([RichText::text(""), RichText::emphasis(" ")]).is_blank());
        assert!(RichText::Sequence(Vec::new()).is_blank());
        assert!(!sample().is_blank());
    }

    #[test]
    fn test_render_produces_inline_markup() {
        let html = Owner::new().with(|| sample().render().to_html());

        assert!(html.contains("<em>Liquid</em>"));
        assert!(html.contains(r#"<a href="/docs/theme"><em>JavaScript</em></a>"#));
        assert!(html.contains("Wired through "));
    }

    #[test]
    fn test_deserialize_tagged_tree() {
        #[derive(Deserialize)]
        struct Doc {
            description: RichText,
        }

        let doc: Doc = toml::from_str(
            r#"
            description = { sequence = [
                { text = "See " },
                { link = { href = "https://example.com", content = { text = "docs" } } },
            ] }
            "#,
        )
        .unwrap();

        assert_eq!(
            doc.description,
            RichText::sequence([
                RichText::text("See "),
                RichText::link("https://example.com", "docs"),
            ])
        );
    }
}
