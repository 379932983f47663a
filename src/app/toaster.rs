use leptos::prelude::*;

use crate::notification::{Notification, NotificationSink, Variant};

/// Only the newest toast stays on screen.
const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Default)]
struct ToastState {
    next_id: u64,
    items: Vec<(u64, Notification)>,
}

#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.items.retain(|(item, _)| *item != id));
    }
}

impl NotificationSink for Toasts {
    fn notify(&self, notification: Notification) {
        self.state.update(|s| {
            let id = s.next_id;
            s.next_id += 1;
            s.items.insert(0, (id, notification));
            s.items.truncate(TOAST_LIMIT);
        });
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="fixed bottom-0 right-0 z-50 flex flex-col gap-2 p-4 w-full max-w-sm">
            <For
                each=move || toasts.state.with(|s| s.items.clone())
                key=|(id, _)| *id
                children=move |(id, note)| {
                    let class = match note.variant {
                        Variant::Default => {
                            "relative rounded-md border border-gray-200 bg-white text-gray-900 p-4 pr-8 shadow-lg"
                        }
                        Variant::Destructive => {
                            "relative rounded-md border border-red-600 bg-red-600 text-white p-4 pr-8 shadow-lg"
                        }
                    };
                    view! {
                        <li class=class role="status">
                            <div class="text-sm font-semibold">{note.title}</div>
                            <div class="text-sm opacity-90">{note.description}</div>
                            <button
                                type="button"
                                class="absolute top-2 right-2 opacity-70 hover:opacity-100"
                                aria-label="Close"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(toasts: &Toasts) -> Vec<(u64, Notification)> {
        toasts.state.get_untracked().items
    }

    #[test]
    fn test_newest_notification_replaces_older() {
        let toasts = Toasts::new();
        toasts.notify(Notification::missing_fields());
        toasts.notify(Notification::sent());

        assert_eq!(visible(&toasts), vec![(1, Notification::sent())]);

        toasts.dismiss(1);
        assert!(visible(&toasts).is_empty());
    }

    #[test]
    fn test_dismiss_unknown_id_keeps_toast() {
        let toasts = Toasts::new();
        toasts.notify(Notification::send_failed());

        toasts.dismiss(7);
        assert_eq!(visible(&toasts), vec![(0, Notification::send_failed())]);
    }
}
