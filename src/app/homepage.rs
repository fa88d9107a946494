use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::experience::ExperienceTimeline;
use super::hero::Hero;
use super::projects::Projects;
use super::reveal::RevealRegistry;
use super::skills::Skills;
use super::SiteResource;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<SiteResource>();
    let registry = RevealRegistry::new();
    provide_context(registry);
    on_cleanup(move || registry.detach());

    view! {
        <Title text="Home" />
        <Suspense fallback=move || {
            view! {
                <div class="container mx-auto space-y-4 px-4 py-24">
                    <div class="loading-skeleton h-12 w-2/3 rounded"></div>
                    <div class="loading-skeleton h-6 w-1/2 rounded"></div>
                    <div class="loading-skeleton h-6 w-3/4 rounded"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match site.await {
                    Ok(site) => {
                        let profile = site.profile.clone();
                        view! {
                            <Hero hero=site.hero profile=site.profile />
                            <About about=site.about profile=profile.clone() />
                            <Skills categories=site.skills />
                            <ExperienceTimeline experience=site.experience />
                            <Projects />
                            <Contact profile />
                        }
                            .into_any()
                    }
                    Err(e) => {
                        log::error!("couldn't load site content: {e}");
                        view! {
                            <p class="container mx-auto px-4 py-24 text-center text-cozy-brown-600">
                                "Couldn't load this page. Please try again later."
                            </p>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}
