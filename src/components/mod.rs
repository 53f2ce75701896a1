use leptos::prelude::*;
use leptos_icons::Icon;

use crate::nav::NavTarget;

mod card;
mod empty_state;
mod service;

pub use card::ContentCard;
pub use empty_state::{EMPTY_STATE_BODY, EMPTY_STATE_HEADING, EmptyStatePanel};
pub use service::{
    SERVICE_CAPABILITIES, SERVICE_CLOSING, SERVICE_LEAD, SERVICE_TITLE, StaticInfoPage,
};

const LINK_CLASS: &str =
    "inline-flex items-center gap-2 underline hover:-translate-y-0.5 hover:decoration-4 transition";

/// Anchor pointing at `to`, labelled with its label.
#[component]
pub fn BackLink(
    #[prop(into)] to: NavTarget,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let NavTarget { path, label } = to;
    let class = format!("{class} {LINK_CLASS}");

    view! {
        <a class=class.trim().to_string() href=path>
            <Icon icon=icondata::LuArrowLeft />
            {label}
        </a>
    }
}
