use leptos::{html, prelude::*};

use crate::profile::ProfileData;

#[component]
pub fn ProfileSection(profile: ProfileData) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let (loaded, set_loaded) = signal(false);

    // the image may finish loading before hydration attaches on:load
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() > 0 {
                set_loaded(true);
            }
        }
    });

    view! {
        <div class="text-center space-y-4 animate-fade-in">
            <div class="relative mx-auto w-32 h-32">
                <span class="relative flex w-full h-full shrink-0 overflow-hidden rounded-full border-4 border-white shadow-xl ring-2 ring-gray-200">
                    <img
                        node_ref=img_ref
                        src=profile.profile_photo
                        alt=profile.name
                        class=move || {
                            if loaded() { "aspect-square w-full h-full object-cover" } else { "hidden" }
                        }
                        on:load=move |_| set_loaded(true)
                        on:error=move |_| {
                            log::warn!("profile photo failed to load, showing initials");
                            set_loaded(false);
                        }
                    />
                    <Show when=move || !loaded()>
                        <span class="flex w-full h-full items-center justify-center rounded-full text-2xl font-semibold bg-gradient-to-br from-blue-500 to-purple-600 text-white">
                            {profile.initials()}
                        </span>
                    </Show>
                </span>
            </div>
            <div class="space-y-2">
                <h1 class="text-2xl font-bold text-gray-900 tracking-tight">{profile.name}</h1>
                <p class="text-gray-600 text-sm max-w-xs mx-auto leading-relaxed">{profile.bio}</p>
            </div>
        </div>
    }
}
