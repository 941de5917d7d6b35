//! The hand-authored list of links rendered by the home page.
//!
//! The catalog is a `const`: it is built at compile time, shared by the server
//! and the hydrated frontend, and never mutated.

mod errors;

pub use errors::{Error, Result};

use serde::Serialize;

/// Glyphs a card can carry. Resolved to inline SVG by [`crate::icons::Glyph`].
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    User,
    FileText,
    Code,
    Github,
    Mail,
    Star,
    Heart,
    ExternalLink,
}

/// Gradient stops, as utility classes (`from-*` and `to-*`).
///
/// Both stops must be string literals so the stylesheet build can find them.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    pub start: &'static str,
    pub end: &'static str,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [NavigationEntry],
}

impl Catalog {
    pub const fn new(entries: &'static [NavigationEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [NavigationEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catch authoring mistakes: an empty catalog, or an entry without a title
    /// or a url. Urls are not parsed, a `mailto:` address is as good as any.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::Empty);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(Error::MissingField { index, field: "title" });
            }
            if entry.url.trim().is_empty() {
                return Err(Error::MissingField { index, field: "url" });
            }
        }
        Ok(())
    }
}

pub const CATALOG: Catalog = Catalog::new(&[
    NavigationEntry {
        title: "Resume",
        description: "My professional background and skills",
        url: "https://resume.seaooo.com",
        icon: Icon::User,
        accent: Accent { start: "from-blue-500", end: "to-cyan-500" },
    },
    NavigationEntry {
        title: "Blog",
        description: "Technical articles and things I learned",
        url: "https://example.com/blog",
        icon: Icon::FileText,
        accent: Accent { start: "from-purple-500", end: "to-pink-500" },
    },
    NavigationEntry {
        title: "Projects",
        description: "Open source projects and other work",
        url: "https://github.com/seaooo-code",
        icon: Icon::Code,
        accent: Accent { start: "from-green-500", end: "to-emerald-500" },
    },
    NavigationEntry {
        title: "GitHub",
        description: "Browse my code repositories",
        url: "https://github.com/seaooo-code",
        icon: Icon::Github,
        accent: Accent { start: "from-gray-500", end: "to-slate-500" },
    },
    NavigationEntry {
        title: "Contact",
        description: "Get in touch by email",
        url: "mailto:chenhui.yang@seaooo.com",
        icon: Icon::Mail,
        accent: Accent { start: "from-orange-500", end: "to-red-500" },
    },
    NavigationEntry {
        title: "Portfolio",
        description: "Design work and creative projects",
        url: "https://example.com/portfolio",
        icon: Icon::Star,
        accent: Accent { start: "from-yellow-500", end: "to-amber-500" },
    },
]);
