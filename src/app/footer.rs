use leptos::prelude::*;

use crate::profile::{current_year, FOOTER};

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="mt-12 py-8 border-t border-gray-200/30 bg-white/30 backdrop-blur-sm animate-fade-in">
            <div class="text-center space-y-3">
                <div class="flex items-center justify-center gap-2 text-gray-600 text-sm">
                    <i class="extra-calendar" />
                    <span>"Dibuat pada " {FOOTER.created}</span>
                </div>
                <div class="flex items-center justify-center gap-2 text-gray-700 text-sm font-medium">
                    <span>"Dibuat oleh"</span>
                    <span class="text-blue-600 font-semibold">{FOOTER.author}</span>
                    <i class="extra-heart text-red-500 animate-pulse" />
                </div>
                <div class="text-xs text-gray-500 pt-2">{FOOTER.copyright_line(year)}</div>
            </div>
        </footer>
    }
}
