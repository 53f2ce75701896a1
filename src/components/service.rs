use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_meta::{Meta, Title};

use super::BackLink;
use crate::nav::NavTarget;

pub const SERVICE_TITLE: &str = "Web Development";
pub const SERVICE_LEAD: &str =
    "I build fast, accessible web applications, from the first sketch to a running deployment.";
pub const SERVICE_CAPABILITIES: [&str; 7] = [
    "Server-rendered sites with client-side hydration",
    "Responsive layouts that work on every screen size",
    "REST and RPC backends written in Rust",
    "Database design and migrations",
    "Performance audits and load time optimization",
    "Accessibility reviews against WCAG guidelines",
    "Containerized deployment and continuous delivery",
];
pub const SERVICE_CLOSING: &str =
    "If you have a project in mind, get in touch and we can talk it through.";

/// Description page of the web development service.
///
/// The text is fixed. `back` decides where the link at the bottom leads,
/// the site root unless told otherwise.
#[component]
pub fn StaticInfoPage(#[prop(default = NavTarget::home())] back: NavTarget) -> impl IntoView {
    view! {
        <Title text=SERVICE_TITLE />
        <Meta name="description" content=SERVICE_LEAD />
        <article class="max-w-3xl flex flex-col gap-6">
            <h1 class="text-4xl font-extrabold flex flex-row items-center gap-4">
                <Icon icon=icondata::LuCode />
                {SERVICE_TITLE}
            </h1>
            <p class="text-lg">{SERVICE_LEAD}</p>
            <ul class="list-disc pl-6 space-y-2">
                {SERVICE_CAPABILITIES
                    .into_iter()
                    .map(|capability| view! { <li>{capability}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <p>{SERVICE_CLOSING}</p>
            <BackLink to=back class="self-start font-black" />
        </article>
    }
}
