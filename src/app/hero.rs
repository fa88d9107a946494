use leptos::prelude::*;

use crate::content::{HeroContent, Profile};
use crate::reveal::RevealVariant;

use super::reveal::Reveal;

#[component]
pub fn Hero(hero: HeroContent, profile: Profile) -> impl IntoView {
    view! {
        <section id="home" class="flex min-h-[90vh] items-center">
            <div class="container mx-auto grid items-center gap-12 px-4 py-16 lg:grid-cols-2">
                <Reveal variant=RevealVariant::Left>
                    <p class="mb-2 font-medium text-cozy-orange-500">{profile.title}</p>
                    <h1 class="mb-4 text-4xl font-bold md:text-6xl">{hero.headline}</h1>
                    <h2 class="mb-6 text-2xl text-cozy-brown-600 dark:text-cozy-cream-300 md:text-3xl">
                        {hero.subheadline}
                    </h2>
                    <p class="mb-8 max-w-xl text-lg text-cozy-brown-700 dark:text-cozy-cream-200">
                        {hero.description}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href=hero.primary_cta.href
                            class="focus-cozy rounded-lg bg-cozy-orange-500 px-6 py-3 font-medium text-white transition-colors hover:bg-cozy-orange-600"
                        >
                            {hero.primary_cta.text}
                        </a>
                        {hero
                            .secondary_cta
                            .map(|cta| {
                                view! {
                                    <a
                                        href=cta.href
                                        class="focus-cozy rounded-lg border-2 border-cozy-orange-500 px-6 py-3 font-medium text-cozy-orange-500 transition-colors hover:bg-cozy-orange-500 hover:text-white"
                                    >
                                        {cta.text}
                                    </a>
                                }
                            })}
                    </div>
                </Reveal>
                <Reveal variant=RevealVariant::Scale class="flex justify-center">
                    <div
                        class="flex h-64 w-64 items-center justify-center rounded-full bg-gradient-to-br from-cozy-orange-400 to-cozy-brown-600 text-7xl font-bold text-white shadow-xl"
                        aria-hidden="true"
                    >
                        {profile.initials}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
