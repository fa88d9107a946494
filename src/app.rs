mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod project_page;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "ssr")]
use crate::content::get_site;
use crate::content::SiteContent;
use crate::theme::ThemePreference;

use footer::Footer;
use header::Header;
use homepage::HomePage;
use project_page::ProjectPage;

/// Site content shared by the header, the footer and the home page.
pub type SiteResource = OnceResource<Result<SiteContent, ServerFnError>>;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[server(input = GetUrl)]
pub async fn get_site_server() -> Result<SiteContent, ServerFnError> {
    get_site().map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site: SiteResource = OnceResource::new(get_site_server());
    provide_context(site);

    // the page root owns the preference; children get a read signal and a toggle
    let theme = RwSignal::new(ThemePreference::default());
    let prefers_dark = use_preferred_dark();
    let is_dark = Signal::derive(move || theme.get().is_dark(prefers_dark.get()));

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<ThemePreference, JsonSerdeWasmCodec>("theme_preference");
        Effect::watch(
            move || stored.get(),
            move |pref, _, _| {
                if theme.get_untracked() != *pref {
                    theme.set(*pref);
                }
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |pref, _, _| {
                if stored.get_untracked() != *pref {
                    set_stored.set(*pref);
                }
            },
            false,
        );
    }

    let on_toggle = Callback::new(move |_: ()| {
        theme.update(|t| *t = t.next());
        log::debug!("theme preference is now {:?}", theme.get_untracked());
    });

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />

        <Router>
            <div class=move || if is_dark.get() { "dark" } else { "" }>
                <div class="flex min-h-screen flex-col bg-cozy-cream-50 text-cozy-brown-900 transition-colors duration-300 dark:bg-cozy-brown-900 dark:text-cozy-cream-50">
                    <Header theme=theme on_toggle />
                    <main class="flex-1 pt-16">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/projects/:slug") view=ProjectPage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </div>
        </Router>
    }
}
