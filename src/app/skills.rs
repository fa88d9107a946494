use leptos::prelude::*;

use crate::content::{Accent, SkillCategory};
use crate::reveal::RevealVariant;

use super::reveal::Reveal;

fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Orange => "bg-cozy-orange-500",
        Accent::Brown => "bg-cozy-brown-500",
        Accent::Cream => "bg-cozy-cream-400",
    }
}

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section id="skills" class="py-20">
            <div class="container mx-auto px-4">
                <Reveal class="mb-12 text-center">
                    <h2 class="text-3xl font-bold md:text-4xl">"Skills"</h2>
                </Reveal>
                <div class="grid gap-8 md:grid-cols-3">
                    {categories
                        .into_iter()
                        .map(|category| view! { <SkillCard category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    let bar = accent_class(category.accent);
    view! {
        <Reveal
            variant=RevealVariant::Scale
            class="rounded-xl bg-white p-6 shadow-md dark:bg-cozy-brown-800"
        >
            <h3 class="mb-6 text-xl font-semibold">{category.title}</h3>
            <ul class="space-y-4">
                {category
                    .skills
                    .into_iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let level = skill.level.min(100);
                        view! {
                            <li>
                                <div class="mb-1 flex justify-between text-sm">
                                    <span>{skill.name}</span>
                                    <span class="text-cozy-brown-600 dark:text-cozy-cream-300">
                                        {format!("{level}%")}
                                    </span>
                                </div>
                                <div class="h-2 overflow-hidden rounded-full bg-cozy-cream-200 dark:bg-cozy-brown-700">
                                    <div
                                        class=format!("skill-bar h-full rounded-full {bar}")
                                        style=format!(
                                            "width: {level}%; transition-delay: {}ms",
                                            i * 100,
                                        )
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_bar_colors() {
        assert_eq!(accent_class(Accent::Orange), "bg-cozy-orange-500");
        assert_eq!(accent_class(Accent::Brown), "bg-cozy-brown-500");
        assert_eq!(accent_class(Accent::Cream), "bg-cozy-cream-400");
    }
}
