//! Server-side rendering of the site's pages.

pub mod content;

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use minijinja::{AutoEscape, Environment, Error, ErrorKind, context};

use crate::analytics::Analytics;
use crate::releases::{DisplayRelease, format_date};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (
        "partials/header.html",
        include_str!("../../templates/partials/header.html"),
    ),
    (
        "partials/footer.html",
        include_str!("../../templates/partials/footer.html"),
    ),
    (
        "partials/release_card.html",
        include_str!("../../templates/partials/release_card.html"),
    ),
    ("home.html", include_str!("../../templates/home.html")),
    ("changelog.html", include_str!("../../templates/changelog.html")),
    ("privacy.html", include_str!("../../templates/privacy.html")),
    ("terms.html", include_str!("../../templates/terms.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Changelog,
    Privacy,
    Terms,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Changelog,
        Page::Privacy,
        Page::Terms,
        Page::NotFound,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Changelog => "/changelog",
            Page::Privacy => "/privacy",
            Page::Terms => "/terms",
            Page::NotFound => "/404",
        }
    }

    /// Location of the page inside a static export.
    pub fn export_path(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Changelog => "changelog/index.html",
            Page::Privacy => "privacy/index.html",
            Page::Terms => "terms/index.html",
            Page::NotFound => "404.html",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::Changelog => "changelog.html",
            Page::Privacy => "privacy.html",
            Page::Terms => "terms.html",
            Page::NotFound => "not_found.html",
        }
    }

    fn title(self) -> String {
        match self {
            Page::Home => format!("{} - {}", content::SITE.name, content::SITE.tagline),
            Page::Changelog => format!("Changelog - {}", content::SITE.name),
            Page::Privacy => format!("Privacy Policy - {}", content::SITE.name),
            Page::Terms => format!("Terms of Service - {}", content::SITE.name),
            Page::NotFound => format!("Page Not Found - {}", content::SITE.name),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Home => "home",
            Page::Changelog => "changelog",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
            Page::NotFound => "not-found",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Page {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "index" => Ok(Page::Home),
            "changelog" => Ok(Page::Changelog),
            "privacy" => Ok(Page::Privacy),
            "terms" => Ok(Page::Terms),
            "not-found" | "404" => Ok(Page::NotFound),
            _ => anyhow::bail!(
                "Unknown page: {}. Expected home, changelog, privacy, terms or not-found.",
                s
            ),
        }
    }
}

/// Dynamic data a page may show.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub releases: &'a [DisplayRelease],
    pub latest: Option<&'a DisplayRelease>,
    pub analytics: Option<&'a Analytics>,
    pub year: i32,
}

impl<'a> PageData<'a> {
    pub fn new(
        releases: &'a [DisplayRelease],
        latest: Option<&'a DisplayRelease>,
        analytics: Option<&'a Analytics>,
    ) -> Self {
        Self {
            releases,
            latest,
            analytics,
            year: Utc::now().year(),
        }
    }
}

/// Holds the compiled templates.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_filter("release_date", release_date);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .with_context(|| format!("Failed to parse template {}", name))?;
        }

        Ok(Self { env })
    }

    #[tracing::instrument(skip(self, data))]
    pub fn render(&self, page: Page, data: &PageData<'_>) -> Result<String> {
        let template = self.env.get_template(page.template())?;

        let html = template
            .render(context! {
                site => &content::SITE,
                nav_links => content::NAV_LINKS,
                headlines => content::HERO_HEADLINES,
                features => content::FEATURES,
                steps => content::STEPS,
                testimonials => content::TESTIMONIALS,
                title => page.title(),
                current_path => page.path(),
                releases => data.releases,
                latest => data.latest,
                analytics => data.analytics,
                year => data.year,
            })
            .with_context(|| format!("Failed to render the {} page", page))?;

        Ok(html)
    }
}

/// `{{ release.publishedAt|release_date }}` -> "February 1, 2026"
fn release_date(value: String) -> Result<String, Error> {
    let date = DateTime::parse_from_rfc3339(&value).map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("'{}' is not an RFC 3339 timestamp: {}", value, e),
        )
    })?;
    Ok(format_date(date.with_timezone(&Utc)))
}
