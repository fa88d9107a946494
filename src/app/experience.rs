use leptos::prelude::*;

use crate::content::Experience;
use crate::reveal::RevealVariant;

use super::reveal::Reveal;

#[component]
pub fn ExperienceTimeline(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <section id="experience" class="bg-cozy-cream-100 py-20 dark:bg-cozy-brown-800">
            <div class="container mx-auto max-w-4xl px-4">
                <Reveal class="mb-12 text-center">
                    <h2 class="text-3xl font-bold md:text-4xl">"Experience"</h2>
                </Reveal>
                <ol class="relative border-l-2 border-cozy-orange-300 dark:border-cozy-brown-600">
                    {experience
                        .into_iter()
                        .map(|job| {
                            view! {
                                <li class="mb-12 ml-6">
                                    <span class="absolute -left-[9px] mt-2 h-4 w-4 rounded-full bg-cozy-orange-500"></span>
                                    <Reveal variant=RevealVariant::Right>
                                        <p class="text-sm font-medium text-cozy-orange-500">
                                            {job.period}
                                        </p>
                                        <h3 class="text-xl font-semibold">{job.title}</h3>
                                        <p class="mb-3 text-cozy-brown-600 dark:text-cozy-cream-300">
                                            {job.company}
                                        </p>
                                        <p class="mb-4">{job.description}</p>
                                        <ul class="mb-4 list-disc space-y-1 pl-5 text-sm">
                                            {job
                                                .highlights
                                                .into_iter()
                                                .map(|h| view! { <li>{h}</li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="flex flex-wrap gap-2">
                                            {job
                                                .technologies
                                                .into_iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="rounded-full bg-cozy-cream-200 px-3 py-1 text-xs dark:bg-cozy-brown-700">
                                                            {tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
