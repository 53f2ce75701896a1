use leptos::prelude::*;
use leptos_icons::Icon;

pub const EMPTY_STATE_HEADING: &str = "Select a Post";
pub const EMPTY_STATE_BODY: &str =
    "Choose a blog post from the sidebar on the left to read it here.";

/// Placeholder for the reading pane while no post is selected.
#[component]
pub fn EmptyStatePanel(
    #[prop(default = icondata::LuBookOpen)] icon: icondata::Icon,
) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col items-center justify-center gap-4 py-16 text-center">
            <span class="text-6xl opacity-60" aria-hidden="true">
                <Icon icon=icon />
            </span>
            <h2 class="text-3xl font-bold">{EMPTY_STATE_HEADING}</h2>
            <p class="max-w-md italic">{EMPTY_STATE_BODY}</p>
        </div>
    }
}
