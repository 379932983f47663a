mod contact;
mod footer;
mod links;
mod profile;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{contact::SimulatedSubmitter, links::SOCIAL_LINKS, profile::PROFILE};
use contact::ContactFormCard;
use footer::Footer;
use links::SocialLinksGrid;
use profile::ProfileSection;
use toaster::{provide_toasts, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/social-links.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toasts();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.bio />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}

/// Profile, links, contact form and footer in one scrollable column.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Social Links" />
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-gray-100">
            <div class="container mx-auto px-4 py-8 max-w-md">
                <div class="space-y-8">
                    <ProfileSection profile=PROFILE />
                    <SocialLinksGrid links=&SOCIAL_LINKS[..] />
                    <ContactFormCard submitter=SimulatedSubmitter::default() />
                    <Footer />
                </div>
            </div>
        </div>
    }
}
