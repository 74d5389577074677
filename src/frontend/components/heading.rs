use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    #[default]
    H3,
    H4,
    H5,
    H6,
}

#[component]
pub fn Heading(
    children: Children,
    #[prop(optional)] level: HeadingLevel,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    match level {
        HeadingLevel::H1 => view! { <h1 class=class>{children()}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2 class=class>{children()}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 class=class>{children()}</h3> }.into_any(),
        HeadingLevel::H4 => view! { <h4 class=class>{children()}</h4> }.into_any(),
        HeadingLevel::H5 => view! { <h5 class=class>{children()}</h5> }.into_any(),
        HeadingLevel::H6 => view! { <h6 class=class>{children()}</h6> }.into_any(),
    }
}
