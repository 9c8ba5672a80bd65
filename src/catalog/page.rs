//! HTML pages for the catalog server.

use crate::ui::dom::{Element, Node, escape};
use crate::ui::icons::IconAdapter;

use super::{Catalog, Story, StoryGroup, story_path};

/// Page chrome shared by every catalog page.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Site title shown in the header and `<title>`.
    pub site_title: String,
    /// Optional stylesheet URL linked from `<head>`.
    pub stylesheet: Option<String>,
}

/// Generate the HTML shell for a catalog page.
fn html_shell(options: &PageOptions, title: &str, nav: &Element, content: &Element) -> String {
    let stylesheet = options
        .stylesheet
        .as_deref()
        .map(|href| format!(r#"<link rel="stylesheet" href="{}">"#, escape(href)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - {site}</title>
    {stylesheet}
</head>
<body class="catalog">
    <header class="catalog-header"><a href="/">{site}</a></header>
    <div class="catalog-layout">
        {nav}
        <main class="catalog-main">{content}</main>
    </div>
</body>
</html>"#,
        title = escape(title),
        site = escape(&options.site_title),
        nav = nav.to_html(),
        content = content.to_html(),
    )
}

/// Sidebar listing every group and its stories.
fn navigation(catalog: &Catalog) -> Element {
    Element::new("nav")
        .class("catalog-nav")
        .children(catalog.groups().iter().map(|group| {
            let section = Element::new("section")
                .class("catalog-nav-group")
                .child(Element::new("h2").child(group.title()))
                .child(Element::new("ul").children(group.stories().iter().map(|story| {
                    Node::from(
                        Element::new("li").child(
                            Element::new("a")
                                .attr("href", story_path(group, story))
                                .child(story.name()),
                        ),
                    )
                })));
            Node::from(section)
        }))
}

/// Catalog landing page.
pub fn index_page(catalog: &Catalog, options: &PageOptions) -> String {
    let stories: usize = catalog.groups().iter().map(|g| g.stories().len()).sum();
    let content = Element::new("section")
        .class("catalog-index")
        .child(Element::new("h1").child(options.site_title.as_str()))
        .child(Element::new("p").child(format!(
            "{} components, {stories} stories",
            catalog.groups().len()
        )));

    html_shell(options, "Index", &navigation(catalog), &content)
}

/// Page rendering a single story.
pub fn story_page(
    catalog: &Catalog,
    group: &StoryGroup,
    story: &Story,
    icons: &dyn IconAdapter,
    options: &PageOptions,
) -> String {
    let content = Element::new("article")
        .class("catalog-story")
        .child(Element::new("h1").child(group.title()))
        .child(Element::new("h2").child(story.name()))
        .child(story.render(icons));

    let title = format!("{} / {}", group.title(), story.name());
    html_shell(options, &title, &navigation(catalog), &content)
}
