//! Built-in stories for the Button and Input components.

use crate::ui::components::{
    ButtonProps, ButtonSize, ButtonVariant, InputProps, InputSize, button, input,
};
use crate::ui::dom::{Element, Event};
use crate::ui::icons::IconAdapter;

use super::StoryGroup;

/// Handler that logs the interaction, for stories that need a callback.
fn action(label: &'static str) -> impl Fn(&Event) + Send + Sync + 'static {
    move |event: &Event| {
        tracing::info!(
            name: "catalog.action",
            action = label,
            kind = ?event.kind,
            value = ?event.value,
            "Story action fired"
        );
    }
}

/// Button stories.
pub fn button_stories() -> StoryGroup {
    StoryGroup::new("Button Component")
        .add("default button", default_button)
        .add("button with size variants", button_with_size)
        .add("button with type variants", button_with_type)
}

/// Input stories.
pub fn input_stories() -> StoryGroup {
    StoryGroup::new("Input Component")
        .add("default input", default_input)
        .add("disabled input", disabled_input)
        .add("input with sizes", input_with_size)
        .add("input with icon", input_with_icon)
        .add("input with prefix and suffix", input_with_pend)
        .add("controlled input", controlled_input)
}

fn default_button(icons: &dyn IconAdapter) -> Vec<Element> {
    vec![
        button(
            &ButtonProps::new()
                .variant(ButtonVariant::Primary)
                .icon("search")
                .on_click(action("clicked"))
                .child("default button"),
            icons,
        ),
    ]
}

fn button_with_size(icons: &dyn IconAdapter) -> Vec<Element> {
    [(ButtonSize::Lg, "large button"), (ButtonSize::Sm, "small button")]
        .into_iter()
        .map(|(size, label)| {
            button(
                &ButtonProps::new()
                    .size(size)
                    .on_click(action("clicked"))
                    .child(label),
                icons,
            )
        })
        .collect()
}

fn button_with_type(icons: &dyn IconAdapter) -> Vec<Element> {
    vec![
        button(
            &ButtonProps::new()
                .variant(ButtonVariant::Primary)
                .on_click(action("clicked"))
                .child("primary button"),
            icons,
        ),
        button(
            &ButtonProps::new()
                .variant(ButtonVariant::Danger)
                .on_click(action("clicked"))
                .child("danger button"),
            icons,
        ),
        button(
            &ButtonProps::new()
                .variant(ButtonVariant::Link)
                .href("http://www.axtlive.com")
                .target("_blank")
                .on_click(action("clicked"))
                .child("link button"),
            icons,
        ),
    ]
}

fn default_input(icons: &dyn IconAdapter) -> Vec<Element> {
    vec![
        input(
            &InputProps::new()
                .style("width: 300px")
                .placeholder("placeholder")
                .on_change(action("changed")),
            icons,
        ),
    ]
}

fn disabled_input(icons: &dyn IconAdapter) -> Vec<Element> {
    vec![
        input(
            &InputProps::new()
                .style("width: 300px")
                .placeholder("disabled input")
                .disabled(true),
            icons,
        ),
    ]
}

fn input_with_size(icons: &dyn IconAdapter) -> Vec<Element> {
    [(InputSize::Lg, "large size"), (InputSize::Sm, "small size")]
        .into_iter()
        .map(|(size, placeholder)| {
            input(
                &InputProps::new()
                    .style("width: 300px")
                    .size(size)
                    .placeholder(placeholder),
                icons,
            )
        })
        .collect()
}

fn input_with_icon(icons: &dyn IconAdapter) -> Vec<Element> {
    vec![
        input(
            &InputProps::new()
                .style("width: 300px")
                .icon("search")
                .placeholder("input with icon"),
            icons,
        ),
    ]
}

fn input_with_pend(icons: &dyn IconAdapter) -> Vec<Element> {
    vec![
        input(
            &InputProps::new()
                .style("width: 300px")
                .prefix("https://")
                .placeholder("prefix"),
            icons,
        ),
        input(
            &InputProps::new()
                .style("width: 300px")
                .suffix(Element::new("span").class("suffix-domain").child(".com"))
                .placeholder("suffix"),
            icons,
        ),
    ]
}

fn controlled_input(icons: &dyn IconAdapter) -> Vec<Element> {
    vec![
        input(
            &InputProps::new()
                .style("width: 300px")
                .default_value("ignored once value is bound")
                .value_opt(None)
                .on_change(action("changed")),
            icons,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dom::EventKind;
    use crate::ui::icons::SvgIconSet;

    #[test]
    fn test_button_story_names() {
        let names: Vec<_> = button_stories().stories().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "default button",
                "button with size variants",
                "button with type variants"
            ]
        );
    }

    #[test]
    fn test_type_variants_story_renders_link_as_anchor() {
        let group = button_stories();
        let story = &group.stories()[2];
        let preview = story.render(&SvgIconSet);
        let link = preview.find_by_class("btn-link").expect("link button");
        assert_eq!(link.tag(), "a");
        assert_eq!(link.get_attr("target"), Some("_blank"));
        assert_eq!(preview.find_all(&|e: &Element| e.tag() == "button").len(), 2);
    }

    #[test]
    fn test_story_actions_fire_on_dispatch() {
        let group = button_stories();
        let preview = group.stories()[0].render(&SvgIconSet);
        let btn = preview.find_by_tag("button").expect("default button");
        assert_eq!(btn.listener_count(EventKind::Click), 1);
        assert_eq!(btn.dispatch(&Event::click()), 1);

        let group = input_stories();
        let preview = group.stories()[0].render(&SvgIconSet);
        let native = preview.find_by_tag("input").expect("native input");
        assert_eq!(native.dispatch(&Event::change("typed")), 1);
        assert_eq!(native.dispatch(&Event::click()), 0);
    }

    #[test]
    fn test_every_story_renders() {
        for group in [button_stories(), input_stories()] {
            for story in group.stories() {
                let html = story.render(&SvgIconSet).to_html();
                assert!(html.starts_with(r#"<div class="story-preview">"#), "{}", story.name());
            }
        }
    }

    #[test]
    fn test_controlled_story_value_is_empty() {
        let group = input_stories();
        let story = group
            .stories()
            .iter()
            .find(|s| s.name() == "controlled input")
            .expect("controlled story");
        let preview = story.render(&SvgIconSet);
        let native = preview.find_by_tag("input").expect("native input");
        assert_eq!(native.get_attr("value"), Some(""));
        assert!(!native.has_attr("defaultValue"));
    }
}
