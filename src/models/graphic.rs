use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Presentation attributes forwarded to a graphic when it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttrs {
    pub class: String,
    pub role: &'static str,
    /// Accessible name used when the graphic carries none of its own.
    pub label: Option<String>,
}

impl ImageAttrs {
    pub fn image(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            role: "img",
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

fn non_blank(text: Option<&String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty()).cloned()
}

/// Anything a feature can show as its illustration.
pub trait Graphic: fmt::Debug + Send + Sync {
    fn render(&self, attrs: &ImageAttrs) -> AnyView;
}

/// Vector markup embedded directly in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSvg {
    view_box: String,
    body: String,
}

impl InlineSvg {
    pub fn new(view_box: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            view_box: view_box.into(),
            body: body.into(),
        }
    }
}

impl Graphic for InlineSvg {
    fn render(&self, attrs: &ImageAttrs) -> AnyView {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                class=attrs.class.clone()
                role=attrs.role
                aria-label=non_blank(attrs.label.as_ref())
                viewBox=self.view_box.clone()
                inner_html=self.body.clone()
            ></svg>
        }
        .into_any()
    }
}

/// An image file served alongside the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapImage {
    src: String,
    alt: Option<String>,
}

impl BitmapImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

impl Graphic for BitmapImage {
    fn render(&self, attrs: &ImageAttrs) -> AnyView {
        // role="img" requires a non-empty accessible name.
        let alt = non_blank(self.alt.as_ref()).or_else(|| non_blank(attrs.label.as_ref()));

        view! {
            <img
                class=attrs.class.clone()
                role=attrs.role
                src=self.src.clone()
                alt=alt
            />
        }
        .into_any()
    }
}

/// Declarative form of a [`Graphic`], as written in registry files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphicSource {
    Bitmap {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    InlineSvg {
        view_box: String,
        body: String,
    },
}

impl GraphicSource {
    pub fn into_graphic(self) -> Arc<dyn Graphic> {
        match self {
            Self::Bitmap { src, alt } => Arc::new(BitmapImage { src, alt }),
            Self::InlineSvg { view_box, body } => Arc::new(InlineSvg::new(view_box, body)),
        }
    }
}
