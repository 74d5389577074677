use leptos::prelude::*;

use crate::clsx;
use crate::frontend::components::{Heading, HeadingLevel};
use crate::models::{ColumnSpan, FeatureEntry, ImageAttrs};

/// Class hook the stylesheet uses to size feature graphics.
pub const FEATURE_GRAPHIC_CLASS: &str = "featureSvg";

/// A single feature column: graphic on top, then the title and description,
/// all centered.
#[component]
pub fn Feature(
    entry: FeatureEntry,
    #[prop(optional)] span: Option<ColumnSpan>,
    #[prop(optional, into)] graphic_class: Option<String>,
) -> impl IntoView {
    let span = span.unwrap_or_default();
    let title = entry.title().to_owned();
    let graphic_class = graphic_class.unwrap_or_else(|| FEATURE_GRAPHIC_CLASS.to_owned());
    let attrs = ImageAttrs::image(graphic_class).with_label(title.clone());
    let text_class = clsx!("text--center", "padding-horiz--md");

    view! {
        <div class=span.class()>
            <div class="text--center">
                {entry.graphic().render(&attrs)}
            </div>
            <div class=text_class>
                <Heading level=HeadingLevel::H3>{title}</Heading>
                <p>{entry.description().render()}</p>
            </div>
        </div>
    }
}
