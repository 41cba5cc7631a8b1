use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, NodeList};

use deck_engine::bridge::protocol::{attributes, classes, ids, selectors};
use deck_engine::{progress_width, DomCommand, StyleRule, StyleTarget};

/// Collect the elements of a `NodeList`, skipping non-element nodes.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// Set an inline style property. An empty value removes the property.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Apply hover style rules to a card and, where targeted, its importance badge.
pub fn apply_style_rules(card: &Element, rules: &[StyleRule]) -> Result<(), JsValue> {
    for rule in rules {
        match rule.target {
            StyleTarget::Card => set_style(card, rule.property, rule.value)?,
            StyleTarget::ImportanceBadge => {
                if let Some(badge) = card.query_selector(selectors::IMPORTANCE_BADGE)? {
                    set_style(&badge, rule.property, rule.value)?;
                }
            }
        }
    }
    Ok(())
}

/// Append a `<style>` block to `<head>` unless one with `id` already exists.
pub fn ensure_stylesheet(document: &Document, id: &str, css: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

/// Give matching badges a `title` tooltip chosen from their text.
pub fn apply_tooltips(
    document: &Document,
    selector: &str,
    tooltip: fn(&str) -> Option<&'static str>,
) -> Result<(), JsValue> {
    for badge in query_all(document, selector)? {
        let text = badge.text_content().unwrap_or_default();
        if let Some(title) = tooltip(&text) {
            badge.set_attribute("title", title)?;
        }
    }
    Ok(())
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn set_disabled(document: &Document, id: &str, disabled: bool) {
    if let Some(button) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        button.set_disabled(disabled);
    }
}

fn collapse_value_bars(document: &Document) -> Result<(), JsValue> {
    let Some(slide) = document.query_selector(selectors::ACTIVE_SLIDE)? else {
        return Ok(());
    };
    for bar in elements(slide.query_selector_all(selectors::VALUE_BARS)?) {
        if !bar.has_attribute(attributes::BAR_WIDTH) {
            let width = bar
                .dyn_ref::<HtmlElement>()
                .and_then(|html| html.style().get_property_value("width").ok())
                .unwrap_or_default();
            bar.set_attribute(attributes::BAR_WIDTH, &width)?;
        }
        set_style(&bar, "width", "0%")?;
    }
    Ok(())
}

fn expand_value_bars(document: &Document) -> Result<(), JsValue> {
    for bar in query_all(document, selectors::VALUE_BARS)? {
        if let Some(width) = bar.get_attribute(attributes::BAR_WIDTH) {
            set_style(&bar, "width", &width)?;
        }
    }
    Ok(())
}

fn modal_part(document: &Document, selector: &str) -> Result<Option<Element>, JsValue> {
    match document.get_element_by_id(ids::MODAL) {
        Some(modal) => modal.query_selector(selector),
        None => Ok(None),
    }
}

/// Apply one deck command. Missing elements are skipped.
///
/// `MountModal` needs event bindings and is handled by the runner.
pub fn apply_command(document: &Document, command: &DomCommand) -> Result<(), JsValue> {
    match command {
        DomCommand::ClearSlides { target } => {
            for (i, slide) in query_all(document, selectors::SLIDE)?.iter().enumerate() {
                let list = slide.class_list();
                list.remove_2(classes::ACTIVE, classes::PREV)?;
                if i < *target {
                    list.add_1(classes::PREV)?;
                }
            }
        }
        DomCommand::ActivateSlide { index } => {
            if let Some(slide) = query_all(document, selectors::SLIDE)?.get(*index) {
                slide.class_list().add_1(classes::ACTIVE)?;
            }
        }
        DomCommand::UpdateCounter { current, total } => {
            set_text(document, ids::CURRENT_SLIDE, &current.to_string());
            set_text(document, ids::TOTAL_SLIDES, &total.to_string());
        }
        DomCommand::SetNavDisabled { prev, next } => {
            set_disabled(document, ids::PREV_BUTTON, *prev);
            set_disabled(document, ids::NEXT_BUTTON, *next);
        }
        DomCommand::SetActiveDot { index } => {
            for (i, dot) in query_all(document, selectors::SLIDE_DOT)?.iter().enumerate() {
                dot.class_list().toggle_with_force(classes::ACTIVE, i == *index)?;
            }
        }
        DomCommand::SetProgress { percent } => {
            if let Some(fill) = document.get_element_by_id(ids::PROGRESS_FILL) {
                set_style(&fill, "width", &progress_width(*percent))?;
            }
        }
        DomCommand::CollapseValueBars => collapse_value_bars(document)?,
        DomCommand::ExpandValueBars => expand_value_bars(document)?,
        DomCommand::MountModal => {}
        DomCommand::ShowModal { title, body } => {
            if let Some(el) = modal_part(document, selectors::MODAL_TITLE)? {
                el.set_text_content(Some(title.as_str()));
            }
            if let Some(el) = modal_part(document, selectors::MODAL_BODY)? {
                el.set_inner_html(body);
            }
            if let Some(modal) = document.get_element_by_id(ids::MODAL) {
                set_style(&modal, "display", "flex")?;
            }
        }
        DomCommand::SetModalActive(active) => {
            if let Some(modal) = document.get_element_by_id(ids::MODAL) {
                modal.class_list().toggle_with_force(classes::ACTIVE, *active)?;
            }
        }
        DomCommand::HideModal => {
            if let Some(modal) = document.get_element_by_id(ids::MODAL) {
                set_style(&modal, "display", "none")?;
            }
        }
    }
    Ok(())
}

/// Create the modal node with its static markup and append it to `<body>`.
/// Returns the existing node if it is already mounted.
pub fn create_modal(document: &Document) -> Result<Option<Element>, JsValue> {
    if let Some(existing) = document.get_element_by_id(ids::MODAL) {
        return Ok(Some(existing));
    }
    let Some(body) = document.body() else {
        return Ok(None);
    };
    let modal = document.create_element("div")?;
    modal.set_id(ids::MODAL);
    modal.set_class_name(classes::MODAL);
    modal.set_inner_html(deck_engine::bridge::protocol::MODAL_MARKUP);
    body.append_child(&modal)?;
    Ok(Some(modal))
}
