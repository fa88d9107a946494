use leptos::{html, prelude::*};
use leptos::server_fn::codec::GetUrl;
use leptos_router::components::A;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;

use crate::carousel::{loop_items, max_scroll, wraps_seamlessly, AutoScroll};
#[cfg(feature = "ssr")]
use crate::content::get_projects;
use crate::content::{ProjectMeta, GLOBAL_META_CACHE};
use crate::reveal::RevealVariant;

use super::reveal::Reveal;

/// Time for one pass over a single copy of the cards.
const CYCLE_MS: f64 = 40_000.0;

#[server(input = GetUrl)]
pub async fn get_projects_server(featured_only: bool) -> Result<Vec<ProjectMeta>, ServerFnError> {
    get_projects(featured_only).map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn Projects() -> impl IntoView {
    let projects = Resource::new(
        || true,
        move |featured_only| async move {
            let cache = &*GLOBAL_META_CACHE;
            if let Some(p) = cache.get(&featured_only) {
                return (*p).clone();
            }
            let meta = get_projects_server(featured_only)
                .await
                .inspect_err(|e| log::warn!("couldn't load projects: {e}"))
                .unwrap_or_default();
            // the server keeps its own cache in the loader
            #[cfg(feature = "hydrate")]
            cache.insert(featured_only, meta.clone());
            meta
        },
    );

    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-4">
                <Reveal class="mb-12 text-center">
                    <h2 class="text-3xl font-bold md:text-4xl">"Featured Projects"</h2>
                    <p class="mt-4 text-cozy-brown-600 dark:text-cozy-cream-300">
                        "Hover or tab into the row to pause it."
                    </p>
                </Reveal>
            </div>
            <Suspense fallback=move || {
                view! { <div class="loading-skeleton mx-auto h-64 max-w-5xl rounded-xl"></div> }
            }>
                {move || Suspend::new(async move {
                    let projects = projects.await;
                    if projects.is_empty() {
                        view! { <p class="text-center">"No projects yet."</p> }.into_any()
                    } else {
                        view! { <ProjectCarousel projects /> }.into_any()
                    }
                })}
            </Suspense>
        </section>
    }
}

fn now_ms() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or_default()
}

#[component]
fn ProjectCarousel(projects: Vec<ProjectMeta>) -> impl IntoView {
    let viewport = NodeRef::<html::Div>::new();
    let track = NodeRef::<html::Div>::new();
    let clock = StoredValue::new(AutoScroll::new(CYCLE_MS));
    let offset = RwSignal::new(0.0_f64);
    let last_max = StoredValue::new(None::<f64>);
    let count = projects.len();

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let (Some(track), Some(viewport)) = (track.get_untracked(), viewport.get_untracked())
        else {
            return;
        };
        let (track_width, viewport_width) = (
            f64::from(track.scroll_width()),
            f64::from(viewport.client_width()),
        );
        let max = max_scroll(track_width, viewport_width);
        if last_max.get_value() != Some(max) {
            last_max.set_value(Some(max));
            if max > 0.0 && !wraps_seamlessly(track_width, viewport_width) {
                log::debug!(
                    "carousel viewport ({viewport_width}px) is wider than one copy ({}px), wrap will jump",
                    track_width / 2.0
                );
            }
        }
        if let Some(next) = clock.try_update_value(|c| c.tick(args.timestamp, max)) {
            if next != offset.get_untracked() {
                offset.set(next);
            }
        }
    });
    on_cleanup(move || pause());

    let set_hovered = move |hovered: bool| {
        if clock
            .try_update_value(|c| c.set_hovered(hovered, now_ms()))
            .unwrap_or(false)
        {
            log::debug!("carousel {}", if hovered { "paused" } else { "resumed" });
        }
    };
    let set_focused = move |focused: bool| {
        if clock
            .try_update_value(|c| c.set_focused(focused, now_ms()))
            .unwrap_or(false)
        {
            log::debug!("carousel {}", if focused { "paused" } else { "resumed" });
        }
    };

    view! {
        <div
            node_ref=viewport
            class="overflow-hidden py-4"
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
            on:focusin=move |_| set_focused(true)
            on:focusout=move |ev| {
                let still_inside = ev
                    .related_target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .zip(viewport.get_untracked())
                    .is_some_and(|(node, el)| el.contains(Some(&node)));
                if !still_inside {
                    set_focused(false);
                }
            }
        >
            <div
                node_ref=track
                class="flex w-max will-change-transform"
                style:transform=move || format!("translateX(-{}px)", offset.get())
            >
                {loop_items(&projects)
                    .into_iter()
                    .map(|(i, project)| {
                        let lead = i % count == 0;
                        let duplicate = i >= count;
                        view! {
                            <div class="w-80 shrink-0 pr-6" aria-hidden=duplicate.then_some("true")>
                                <ProjectCard project lead focusable=!duplicate />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Technologies shown on a card and how many were left out.
fn visible_technologies(technologies: &[String], lead: bool) -> (&[String], usize) {
    let limit = if lead { 6 } else { 3 };
    let shown = &technologies[..technologies.len().min(limit)];
    (shown, technologies.len() - shown.len())
}

#[component]
fn ProjectCard(project: ProjectMeta, lead: bool, focusable: bool) -> impl IntoView {
    let (shown, hidden) = visible_technologies(&project.technologies, lead);
    let shown = shown.to_vec();
    let tabindex = (!focusable).then_some("-1");
    view! {
        <Reveal
            variant=RevealVariant::Up
            class="flex h-full flex-col rounded-xl bg-white p-6 shadow-md transition-shadow hover:shadow-xl dark:bg-cozy-brown-800"
        >
            <div class="mb-3 flex items-center justify-between">
                <span
                    class="text-xl"
                    title=project.status.label()
                    aria-label=project.status.label()
                >
                    {project.status.glyph()}
                </span>
                <span class="text-xs text-cozy-brown-600 dark:text-cozy-cream-300">
                    {project.date.format("%b %Y").to_string()}
                </span>
            </div>
            <A
                href=format!("/projects/{}", project.slug)
                attr:class="focus-cozy mb-2 text-lg font-semibold hover:text-cozy-orange-500"
                attr:tabindex=tabindex
            >
                {project.title}
            </A>
            <p class="mb-4 flex-1 text-sm text-cozy-brown-700 dark:text-cozy-cream-200">
                {project.description}
            </p>
            <div class="mb-4 flex flex-wrap gap-2">
                {shown
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <span class="rounded-full bg-cozy-cream-200 px-2 py-1 text-xs dark:bg-cozy-brown-700">
                                {tech}
                            </span>
                        }
                    })
                    .collect_view()}
                {(hidden > 0)
                    .then(|| {
                        view! {
                            <span class="rounded-full bg-cozy-orange-100 px-2 py-1 text-xs text-cozy-orange-600">
                                {format!("+{hidden}")}
                            </span>
                        }
                    })}
            </div>
            <div class="flex gap-4 text-sm font-medium">
                {project
                    .github_url
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                tabindex=tabindex
                                class="focus-cozy text-cozy-brown-700 hover:text-cozy-orange-500 dark:text-cozy-cream-200"
                            >
                                "Code"
                            </a>
                        }
                    })}
                {project
                    .live_url
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                tabindex=tabindex
                                class="focus-cozy text-cozy-orange-500 hover:text-cozy-orange-600"
                            >
                                "Demo"
                            </a>
                        }
                    })}
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tech{i}")).collect()
    }

    #[test]
    fn test_regular_card_shows_three() {
        let all = techs(5);
        let (shown, hidden) = visible_technologies(&all, false);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn test_lead_card_shows_six() {
        let all = techs(8);
        let (shown, hidden) = visible_technologies(&all, true);
        assert_eq!(shown, &all[..6]);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn test_short_list_has_no_badge() {
        let all = techs(2);
        assert_eq!(visible_technologies(&all, false), (&all[..], 0));
        let (shown, hidden) = visible_technologies(&[], true);
        assert!(shown.is_empty());
        assert_eq!(hidden, 0);
    }
}
