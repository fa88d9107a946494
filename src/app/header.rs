use leptos::prelude::*;

use crate::content::Social;
use crate::theme::ThemePreference;

use super::SiteResource;

const SECTIONS: [(&str, &str); 5] = [
    ("Home", "/#home"),
    ("About", "/#about"),
    ("Skills", "/#skills"),
    ("Projects", "/#projects"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Header(
    #[prop(into)] theme: Signal<ThemePreference>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let site = expect_context::<SiteResource>();
    let (menu_open, set_menu_open) = signal(false);

    let nav_links = move || {
        SECTIONS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a
                        href=*href
                        on:click=move |_| set_menu_open.set(false)
                        class="focus-cozy text-cozy-brown-700 transition-colors duration-200 hover:text-cozy-orange-500 dark:text-cozy-cream-200 dark:hover:text-cozy-orange-400"
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 z-50 w-full border-b border-cozy-cream-200 bg-cozy-cream-50/80 backdrop-blur-md dark:border-cozy-brown-700 dark:bg-cozy-brown-900/80">
            <nav class="container mx-auto px-4 py-3">
                <div class="flex items-center justify-between">
                    <a href="/#home" class="text-xl font-bold">
                        <Suspense fallback=|| "Portfolio">
                            {move || Suspend::new(async move {
                                site.await
                                    .map(|s| s.profile.name)
                                    .unwrap_or_else(|_| "Portfolio".to_string())
                            })}
                        </Suspense>
                    </a>
                    <div class="hidden items-center space-x-8 md:flex">{nav_links}</div>
                    <div class="flex items-center space-x-4">
                        <Suspense>
                            {move || Suspend::new(async move {
                                site.await.ok().map(|s| view! { <SocialLinks social=s.profile.social /> })
                            })}
                        </Suspense>
                        <ThemeToggle theme on_toggle />
                        <button
                            class="focus-cozy p-2 md:hidden"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="mt-3 flex flex-col space-y-3 pb-2 md:hidden">{nav_links}</div>
                </Show>
            </nav>
        </header>
    }
}

#[component]
fn SocialLinks(social: Social) -> impl IntoView {
    let links = [
        Some(("GitHub", social.github)),
        Some(("LinkedIn", social.linkedin)),
        social.facebook.map(|href| ("Facebook", href)),
        social.gitbook.map(|href| ("GitBook", href)),
    ];
    view! {
        <div class="hidden items-center space-x-4 lg:flex">
            {links
                .into_iter()
                .flatten()
                .map(|(label, href)| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=label
                            class="focus-cozy text-sm text-cozy-brown-700 hover:text-cozy-orange-500 dark:text-cozy-cream-200 dark:hover:text-cozy-orange-400"
                        >
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemePreference>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_toggle.run(())
            class="focus-cozy inline-flex h-10 w-10 items-center justify-center rounded-lg bg-cozy-cream-100 transition-colors duration-200 hover:bg-cozy-cream-200 dark:bg-cozy-brown-800 dark:hover:bg-cozy-brown-700"
            title=move || theme.get().label()
            aria-label=move || theme.get().label()
        >
            <span class="text-lg" role="img" aria-hidden="true">
                {move || theme.get().icon()}
            </span>
        </button>
    }
}
