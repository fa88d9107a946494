use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::SiteResource;

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<SiteResource>();
    let year = build_year();
    view! {
        <footer class="bg-cozy-brown-900 text-cozy-cream-100 dark:bg-black">
            <div class="container mx-auto px-4 py-8 text-center">
                <Suspense>
                    {move || Suspend::new(async move {
                        site.await
                            .ok()
                            .map(|s| {
                                view! {
                                    <p class="text-cozy-cream-300">
                                        {format!("© {year} {}. All rights reserved.", s.profile.name)}
                                    </p>
                                }
                            })
                    })}
                </Suspense>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_comes_from_build_time() {
        let recorded = DateTime::parse_from_rfc3339(env!("BUILD_TIME")).unwrap();
        assert_eq!(build_year(), recorded.year());
        assert!(build_year() >= 2024);
    }
}
