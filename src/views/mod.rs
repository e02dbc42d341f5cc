//! Host-side view models for the two pages, plus a static HTML renderer.
//!
//! The web crate renders the same models as DOM, so everything a page shows is
//! decided here and can be unit-tested without a browser.

pub mod card;
pub mod html;
pub mod route;

pub use card::{BadgeState, DemoControl, EntryCard, RefLink, SupportBadge};
pub use route::{Route, RouteError};

use crate::model::Category;
use crate::registry::Registry;

/// Shown by the category page when the id does not match any category.
pub const NOT_FOUND_MESSAGE: &str = "找不到該分類";

pub const SITE_TITLE: &str = "Web API 展示目錄";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub href: String,
    pub cards: Vec<EntryCard>,
}

impl CategorySection {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            href: Route::Category(category.id.to_string()).href(),
            cards: category.entries.iter().map(EntryCard::from_entry).collect(),
        }
    }
}

/// Every category with every entry, in authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub sections: Vec<CategorySection>,
}

impl LandingPage {
    pub fn build(registry: &Registry) -> Self {
        Self {
            sections: registry
                .all()
                .iter()
                .map(CategorySection::from_category)
                .collect(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPage {
    Found(CategorySection),
    NotFound { requested: String },
}

impl CategoryPage {
    pub fn build(registry: &Registry, category_id: &str) -> Self {
        match registry.lookup(category_id) {
            Some(category) => CategoryPage::Found(CategorySection::from_category(category)),
            None => CategoryPage::NotFound {
                requested: category_id.to_string(),
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CategoryPage::Found(section) => section.name,
            CategoryPage::NotFound { .. } => NOT_FOUND_MESSAGE,
        }
    }
}

/// What a route resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Landing(LandingPage),
    Category(CategoryPage),
}

impl Page {
    pub fn for_route(registry: &Registry, route: &Route) -> Self {
        match route {
            Route::Landing => Page::Landing(LandingPage::build(registry)),
            Route::Category(id) => Page::Category(CategoryPage::build(registry, id)),
        }
    }
}
