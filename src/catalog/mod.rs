//! Visual catalog of component stories.
//!
//! A [`Catalog`] is an ordered list of [`StoryGroup`]s, each holding named
//! [`Story`] entries. A story is an example invocation of a component that
//! renders to presentation nodes on demand.
//!
//! - [`stories`]: Built-in Button and Input stories
//! - [`page`]: HTML pages for the catalog server

pub mod page;
pub mod stories;

use std::fmt;

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::ui::dom::{Element, Node};
use crate::ui::icons::IconAdapter;

/// Renders a story's nodes.
pub type RenderFn = fn(&dyn IconAdapter) -> Vec<Element>;

/// A named example invocation.
#[derive(Clone)]
pub struct Story {
    name: &'static str,
    render: RenderFn,
}

impl fmt::Debug for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Story")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Story {
    pub fn new(name: &'static str, render: RenderFn) -> Self {
        Self { name, render }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// URL-safe identifier derived from the name.
    pub fn slug(&self) -> String {
        slugify(self.name)
    }

    /// Render the story inside a preview container.
    pub fn render(&self, icons: &dyn IconAdapter) -> Element {
        Element::new("div")
            .class("story-preview")
            .children((self.render)(icons).into_iter().map(Node::from))
    }
}

/// Stories registered under one title, usually one component.
#[derive(Debug, Clone)]
pub struct StoryGroup {
    title: &'static str,
    stories: Vec<Story>,
}

impl StoryGroup {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            stories: Vec::new(),
        }
    }

    /// Register a story.
    #[must_use]
    pub fn add(mut self, name: &'static str, render: RenderFn) -> Self {
        self.stories.push(Story::new(name, render));
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn slug(&self) -> String {
        slugify(self.title)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }
}

/// Index entry for the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryEntry {
    /// Group title.
    pub group: String,
    /// Story name.
    pub name: String,
    /// Page path for the story.
    pub path: String,
}

/// Ordered collection of story groups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<StoryGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in story group.
    pub fn builtin() -> Self {
        Self::new()
            .with_group(stories::button_stories())
            .with_group(stories::input_stories())
    }

    /// Register a group.
    #[must_use]
    pub fn with_group(mut self, group: StoryGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn groups(&self) -> &[StoryGroup] {
        &self.groups
    }

    /// Look a story up by group and story slug.
    pub fn find(&self, group: &str, story: &str) -> Result<(&StoryGroup, &Story)> {
        self.groups
            .iter()
            .filter(|g| g.slug() == group)
            .find_map(|g| {
                g.stories
                    .iter()
                    .find(|s| s.slug() == story)
                    .map(|s| (g, s))
            })
            .ok_or_else(|| CatalogError::StoryNotFound {
                group: group.to_string(),
                story: story.to_string(),
            })
    }

    /// Flat index of every story.
    pub fn entries(&self) -> Vec<StoryEntry> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.stories.iter().map(move |s| StoryEntry {
                    group: g.title.to_string(),
                    name: s.name.to_string(),
                    path: story_path(g, s),
                })
            })
            .collect()
    }
}

/// Page path of a story.
pub fn story_path(group: &StoryGroup, story: &Story) -> String {
    format!("/stories/{}/{}", group.slug(), story.slug())
}

/// Lowercase, dash-separated identifier.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(_: &dyn IconAdapter) -> Vec<Element> {
        vec![Element::new("p").child("empty")]
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Button Component"), "button-component");
        assert_eq!(slugify("  input with prefix & suffix "), "input-with-prefix-suffix");
    }

    #[test]
    fn test_find_story() {
        let catalog = Catalog::new().with_group(StoryGroup::new("Demo").add("First one", empty));
        let (group, story) = catalog.find("demo", "first-one").unwrap();
        assert_eq!(group.title(), "Demo");
        assert_eq!(story.name(), "First one");
    }

    #[test]
    fn test_find_missing_story() {
        let catalog = Catalog::new().with_group(StoryGroup::new("Demo").add("First one", empty));
        let err = catalog.find("demo", "nope").unwrap_err();
        assert!(matches!(err, CatalogError::StoryNotFound { .. }));
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let catalog = Catalog::new()
            .with_group(StoryGroup::new("A").add("one", empty).add("two", empty))
            .with_group(StoryGroup::new("B").add("three", empty));
        let paths: Vec<_> = catalog.entries().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, ["/stories/a/one", "/stories/a/two", "/stories/b/three"]);
    }

    #[test]
    fn test_story_render_wraps_preview() {
        let story = Story::new("x", empty);
        let el = story.render(&crate::ui::icons::SvgIconSet);
        assert!(el.has_class("story-preview"));
        assert_eq!(el.text_content(), "empty");
    }
}
