use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Option<Project>>> =
    LazyLock::new(DashMap::new);
/// Project listings keyed by "featured only".
pub static GLOBAL_META_CACHE: LazyLock<DashMap<bool, Vec<ProjectMeta>>> =
    LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
const SITE_FILE: &str = "site.json";
#[cfg(feature = "ssr")]
const PROJECT_DIR: &str = "projects/";

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content not found")]
    NotFound,
    #[error("Couldn't parse {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub gitbook: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Recipient of the contact form.
    pub email: String,
    pub bio: String,
    pub initials: String,
    pub social: Social,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub primary_cta: Link,
    #[serde(default)]
    pub secondary_cta: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Orange,
    Brown,
    Cream,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-rated proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub accent: Accent,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::InProgress => "⚡",
            Self::Planned => "📋",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Api,
    Library,
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    description: String,
    technologies: Vec<String>,
    #[serde(default)]
    github_url: Option<String>,
    #[serde(default)]
    live_url: Option<String>,
    #[serde(default)]
    featured: bool,
    status: ProjectStatus,
    category: ProjectCategory,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub status: ProjectStatus,
    pub category: ProjectCategory,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    /// Long description rendered to HTML.
    pub content: String,
}

#[cfg(feature = "ssr")]
fn read_asset(path: &str) -> Result<String, ContentError> {
    let file = Assets::get(path).ok_or(ContentError::NotFound)?;
    String::from_utf8(file.data.into_owned()).map_err(|_| ContentError::Parse(path.to_string()))
}

#[cfg(feature = "ssr")]
pub fn get_site() -> Result<SiteContent, ContentError> {
    static SITE: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(|| {
        let raw = read_asset(SITE_FILE)?;
        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!("{SITE_FILE} is malformed: {e}");
            ContentError::Parse(format!("{SITE_FILE}: {e}"))
        })
    });
    SITE.clone()
}

#[cfg(feature = "ssr")]
fn parse_project(slug: &str, raw: &str) -> Result<(ProjectMeta, String), ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(raw)
        .ok_or_else(|| {
            tracing::warn!("front matter of project {slug} is malformed");
            ContentError::Parse(format!("{PROJECT_DIR}{slug}.md"))
        })?;
    let fm = parsed.data;
    let meta = ProjectMeta {
        slug: slug.to_string(),
        title: fm.title,
        description: fm.description,
        technologies: fm.technologies,
        github_url: fm.github_url,
        live_url: fm.live_url,
        featured: fm.featured,
        status: fm.status,
        category: fm.category,
        date: fm.date,
    };
    Ok((meta, parsed.content))
}

#[cfg(feature = "ssr")]
fn project_slugs() -> impl Iterator<Item = String> {
    Assets::iter().filter_map(|path| {
        path.strip_prefix(PROJECT_DIR)
            .and_then(|name| name.strip_suffix(".md"))
            .map(str::to_string)
    })
}

/// Project metadata, newest first.
#[cfg(feature = "ssr")]
pub fn get_projects(featured_only: bool) -> Result<Vec<ProjectMeta>, ContentError> {
    let cache = &*GLOBAL_META_CACHE;
    if let Some(r) = cache.get(&featured_only) {
        return Ok(r.clone());
    }
    let mut projects = project_slugs()
        .map(|slug| {
            let raw = read_asset(&format!("{PROJECT_DIR}{slug}.md"))?;
            parse_project(&slug, &raw).map(|(meta, _)| meta)
        })
        .filter(|res| match res {
            Ok(meta) => meta.featured || !featured_only,
            Err(_) => true,
        })
        .collect::<Result<Vec<_>, _>>()?;
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    cache.insert(featured_only, projects.clone());
    Ok(projects)
}

/// One project with its Markdown body rendered to HTML.
#[cfg(feature = "ssr")]
pub fn get_project(slug: &str) -> Result<Project, ContentError> {
    let raw = read_asset(&format!("{PROJECT_DIR}{slug}.md"))?;

    let cache = &*GLOBAL_PROJECT_CACHE;
    cache
        .entry(slug.to_string())
        .or_insert_with(|| {
            let (meta, body) = parse_project(slug, &raw).ok()?;
            let parser = Parser::new_ext(&body, Options::all());
            let events = highlight(parser)
                .inspect_err(|e| tracing::warn!("couldn't highlight project {slug}: {e}"))
                .ok()?;

            let mut html_output = String::new();
            pulldown_cmark::html::push_html(&mut html_output, events.into_iter());

            Some(Project {
                meta,
                content: html_output,
            })
        })
        .clone()
        .ok_or_else(|| ContentError::Parse(format!("{PROJECT_DIR}{slug}.md")))
}
