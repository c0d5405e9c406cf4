// src/gui/router.rs
use crate::config::options::PageKind;
use super::pages::{ self, Page };

/// Navigation order. The first entry is the landing page.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::extraction::PAGE,
    &pages::results::PAGE,
    &pages::analysis::PAGE,
    &pages::visualization::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}
