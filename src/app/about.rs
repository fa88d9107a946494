use leptos::prelude::*;

use crate::content::{AboutContent, Profile};
use crate::reveal::RevealVariant;

use super::reveal::Reveal;

#[component]
pub fn About(about: AboutContent, profile: Profile) -> impl IntoView {
    view! {
        <section id="about" class="bg-cozy-cream-100 py-20 dark:bg-cozy-brown-800">
            <div class="container mx-auto px-4">
                <Reveal class="mb-12 text-center">
                    <h2 class="text-3xl font-bold md:text-4xl">{about.title}</h2>
                </Reveal>
                <div class="grid gap-12 lg:grid-cols-2">
                    <Reveal variant=RevealVariant::Left>
                        <p class="mb-6 text-lg leading-relaxed">{about.description}</p>
                        <p class="mb-6 leading-relaxed text-cozy-brown-700 dark:text-cozy-cream-200">
                            {profile.bio}
                        </p>
                        <p class="text-sm text-cozy-brown-600 dark:text-cozy-cream-300">
                            "📍 " {profile.location}
                        </p>
                    </Reveal>
                    <Reveal variant=RevealVariant::Right>
                        <ul class="space-y-4">
                            {about
                                .highlights
                                .into_iter()
                                .map(|highlight| {
                                    view! {
                                        <li class="flex items-start gap-3">
                                            <span class="mt-1 text-cozy-orange-500">"▸"</span>
                                            <span>{highlight}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
