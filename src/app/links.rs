use leptos::{either::Either, ev::KeyboardEvent, prelude::*};

use crate::links::{activate, entries, LinkEntry, LinkOpener, SocialLink};

/// Opens links in a new tab without an `opener` or referrer.
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) {
        if let Err(err) =
            window().open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        {
            log::error!("couldn't open {url}: {err:?}");
        }
    }
}

#[component]
pub fn SocialLinksGrid(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="space-y-4 animate-fade-in-up">
            <For
                each=move || entries(links)
                key=|entry| entry.key
                children=move |entry| view! { <SocialLinkCard entry /> }
            />
        </div>
    }
}

#[component]
fn SocialLinkCard(entry: LinkEntry) -> impl IntoView {
    let link = entry.link;
    let icon = match entry.icon().glyph_class() {
        Some(glyph) => Either::Left(view! { <i class=format!("{glyph} text-2xl flex-shrink-0") /> }),
        None => Either::Right(view! { <div class="w-6 h-6 rounded-full bg-gray-300" /> }),
    };

    view! {
        <div
            class="group cursor-pointer rounded-lg border border-gray-200/50 bg-white/80 backdrop-blur-sm shadow-sm transition-all duration-300 hover:shadow-lg hover:scale-[1.02] hover:-translate-y-1"
            style=format!("animation-delay: {}ms", entry.animation_delay().as_millis())
            role="link"
            tabindex="0"
            on:click=move |_| {
                activate(&link, &BrowserOpener);
            }
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    activate(&link, &BrowserOpener);
                }
            }
        >
            <div class="p-6">
                <div class="flex items-center space-x-4">
                    <div class=format!(
                        "p-3 rounded-xl transition-all duration-300 group-hover:scale-110 {}",
                        link.icon_bg,
                    )>{icon}</div>
                    <div class="flex-1 min-w-0">
                        <h3 class="font-semibold text-gray-900 text-lg tracking-tight">
                            {link.title}
                        </h3>
                        <p class="text-gray-600 text-sm mt-1 truncate">{link.description}</p>
                    </div>
                    <div class="opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <div class="w-2 h-2 rounded-full bg-gray-400"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
