use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use crate::{
    contact::{submit_form, ContactForm, Field, FormHandle, Submitter},
    notification::NotificationSink,
};

use super::toaster::use_toasts;

const LABEL_CLASS: &str = "text-sm font-medium text-gray-700";
const INPUT_CLASS: &str = "flex w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

impl FormHandle for RwSignal<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[component]
pub fn ContactFormCard<S>(submitter: S) -> impl IntoView
where
    S: Submitter + Clone + Send + Sync + 'static,
{
    let form = RwSignal::new(ContactForm::new());
    let toasts = use_toasts();
    let submitting = move || form.with(ContactForm::is_submitting);
    let value_of = move |field: Field| move || form.with(|f| f.get(field).to_string());
    let on_input = move |field: Field| {
        move |ev: Event| form.update(|f| f.set_field(field, event_target_value(&ev)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submitter = submitter.clone();
        spawn_local(async move {
            if let Some(note) = submit_form(&form, &submitter).await {
                toasts.notify(note);
            }
        });
    };

    view! {
        <div class="rounded-lg border border-gray-200/50 bg-white/80 backdrop-blur-sm shadow-sm animate-fade-in-up">
            <div class="flex flex-col space-y-1.5 p-6 pb-4">
                <h3 class="flex items-center gap-2 text-xl font-semibold text-gray-900">
                    <i class="extra-message-square text-blue-600" />
                    "Masukan & Kritik"
                </h3>
                <p class="text-gray-600 text-sm">
                    "Ada saran atau kritik? Kirim pesan langsung ke email saya!"
                </p>
            </div>
            <div class="p-6 pt-0">
                <form on:submit=on_submit class="space-y-4">
                    <div class="space-y-2">
                        <label for="name" class=LABEL_CLASS>
                            "Nama *"
                        </label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            placeholder="Nama lengkap Anda"
                            required
                            class=INPUT_CLASS
                            prop:value=value_of(Field::Name)
                            on:input=on_input(Field::Name)
                        />
                    </div>
                    <div class="space-y-2">
                        <label for="email" class=LABEL_CLASS>
                            "Email *"
                        </label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder="email@example.com"
                            required
                            class=INPUT_CLASS
                            prop:value=value_of(Field::Email)
                            on:input=on_input(Field::Email)
                        />
                    </div>
                    <div class="space-y-2">
                        <label for="message" class=LABEL_CLASS>
                            "Pesan *"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            placeholder="Tulis masukan, kritik, atau pesan Anda di sini..."
                            required
                            rows="4"
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value_of(Field::Message)
                            on:input=on_input(Field::Message)
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        disabled=submitting
                        class="w-full inline-flex justify-center rounded-md bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 text-white font-medium py-3 transition-all duration-300 transform hover:scale-[1.02] disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || {
                            if submitting() {
                                Either::Left(
                                    view! {
                                        <div class="flex items-center gap-2">
                                            <div class="w-4 h-4 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                            "Mengirim..."
                                        </div>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <div class="flex items-center gap-2">
                                            <i class="extra-send" />
                                            "Kirim Pesan"
                                        </div>
                                    },
                                )
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
