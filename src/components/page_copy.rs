use leptos::prelude::*;

use crate::markdown::parse_markdown;

/// Explanatory text block, authored in Markdown
#[component]
pub fn PageCopy(markdown: &'static str) -> impl IntoView {
    let rendered_html = parse_markdown(markdown);
    view! {
        <div class="page-explanation" inner_html=rendered_html></div>
    }
}
