use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

#[cfg(feature = "ssr")]
use crate::content::{get_project, ContentError};
use crate::content::{Project, GLOBAL_PROJECT_CACHE};

#[server(input = GetUrl)]
pub async fn get_project_server(slug: String) -> Result<Project, ServerFnError> {
    get_project(&slug).map_err(|e| {
        if e == ContentError::NotFound {
            if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
                resp.set_status(http::StatusCode::NOT_FOUND);
            }
        } else {
            tracing::warn!("couldn't load project {slug}: {e}");
        }
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let project = Resource::new(slug, move |slug| async move {
        let cache = &*GLOBAL_PROJECT_CACHE;
        if let Some(p) = cache.get(&slug) {
            return (*p)
                .clone()
                .ok_or(ServerFnError::new("Content not found"));
        }
        let project = get_project_server(slug.clone()).await;
        // the server must reach get_project_server every time to set the status
        #[cfg(feature = "hydrate")]
        cache.insert(slug, project.clone().ok());
        project
    });

    view! {
        <div class="container mx-auto max-w-4xl px-4 py-16">
            <A href="/#projects" attr:class="focus-cozy text-sm text-cozy-orange-500 hover:text-cozy-orange-600">
                "← Back to projects"
            </A>
            <Suspense fallback=move || {
                view! { <div class="loading-skeleton mt-8 h-64 rounded-xl"></div> }
            }>
                {move || Suspend::new(async move {
                    match project.await {
                        Ok(p) => view! { <ProjectDetail project=p /> }.into_any(),
                        Err(_) => {
                            view! {
                                <Title text="Not found" />
                                <div class="py-24 text-center">
                                    <h1 class="mb-4 text-3xl font-bold">"Project not found"</h1>
                                    <p class="text-cozy-brown-600 dark:text-cozy-cream-300">
                                        "There's no project at this address."
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let meta = project.meta;
    view! {
        <Title text=meta.title.clone() />
        <header class="mb-8 mt-6">
            <h1 class="mb-3 text-4xl font-bold">{meta.title}</h1>
            <p class="mb-4 text-lg text-cozy-brown-700 dark:text-cozy-cream-200">
                {meta.description}
            </p>
            <div class="flex flex-wrap items-center gap-4 text-sm">
                <span class="font-medium text-cozy-orange-500">
                    {meta.status.glyph()} " " {meta.status.label()}
                </span>
                <span class="text-cozy-brown-600 dark:text-cozy-cream-300">
                    {meta.date.format("%b %e, %Y").to_string()}
                </span>
                {meta
                    .github_url
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="focus-cozy underline">
                                "Code"
                            </a>
                        }
                    })}
                {meta
                    .live_url
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="focus-cozy underline">
                                "Demo"
                            </a>
                        }
                    })}
            </div>
            <div class="mt-4 flex flex-wrap gap-2">
                {meta
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
        </header>
        <article class="project-body">
            <div inner_html=project.content></div>
        </article>
    }
}
