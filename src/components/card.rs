use leptos::prelude::*;

use crate::content::ContentItem;

/// Empty fields render no text at all.
#[component]
pub fn ContentCard(#[prop(into)] item: ContentItem) -> impl IntoView {
    #[cfg(debug_assertions)]
    if item.is_blank() {
        leptos::logging::warn!("ContentCard: item has neither title nor description");
    }

    let ContentItem { title, description } = item;
    let title = (!title.is_empty()).then_some(title);
    let description = (!description.is_empty()).then_some(description);

    view! {
        <div class="rounded-lg border-2 border-current/20 p-6 backdrop-blur-sm">
            <h3 class="text-xl font-bold">{title}</h3>
            <p class="pt-2">{description}</p>
        </div>
    }
}
