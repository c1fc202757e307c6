//! Site pages and home-page sections.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A top-level page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Collection,
    Bespoke,
    About,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Collection, Self::Bespoke, Self::About];

    /// Token used in URLs and accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Collection => "collection",
            Self::Bespoke => "bespoke",
            Self::About => "about",
        }
    }

    /// Request path that renders this page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Collection => "/collection",
            Self::Bespoke => "/bespoke",
            Self::About => "/about",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Collection => "Collection",
            Self::Bespoke => "Bespoke Service",
            Self::About => "Our Story",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| CoreError::InvalidPage(s.to_owned()))
    }
}

/// A named anchor on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Collection,
    Bespoke,
    Testimonials,
}

impl Section {
    /// Every section, top to bottom.
    pub const ALL: [Self; 3] = [Self::Collection, Self::Bespoke, Self::Testimonials];

    /// Element id of the anchor.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Bespoke => "bespoke",
            Self::Testimonials => "testimonials",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or_else(|| CoreError::InvalidSection(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_page_parse_known() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_page_parse_unknown() {
        assert_eq!(
            "checkout".parse::<Page>(),
            Err(CoreError::InvalidPage("checkout".to_string()))
        );
        // Page tokens are exact
        assert!("About".parse::<Page>().is_err());
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::Collection.path(), "/collection");
        assert_eq!(Page::About.title(), "Our Story");
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("collection".parse::<Section>().unwrap(), Section::Collection);
        assert_eq!(
            "footer".parse::<Section>(),
            Err(CoreError::InvalidSection("footer".to_string()))
        );
    }
}
