//! Decorative page behavior: flash entrance, social-link hover lift, button
//! click pulse, and delete confirmation.
//!
//! None of these keep state beyond the element they touch. The decisions are
//! plain functions; the `browser` feature wires them to the document.

#[cfg(test)]
#[path = "page_effects_test.rs"]
mod page_effects_test;

use crate::config::EffectsConfig;

/// Inline style for a social link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkStyle<'a> {
    pub transform: &'a str,
    pub text_shadow: &'a str,
}

#[must_use]
pub fn link_style(effects: &EffectsConfig, hovered: bool) -> LinkStyle<'_> {
    if hovered {
        LinkStyle { transform: &effects.hover_transform, text_shadow: &effects.hover_text_shadow }
    } else {
        LinkStyle { transform: &effects.rest_transform, text_shadow: &effects.rest_text_shadow }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteAction {
    Submit,
    Cancel,
}

/// What a delete button click does.
///
/// `confirmed` is `None` when the prompt could not be shown.
#[must_use]
pub fn delete_action(confirmed: Option<bool>, has_form: bool) -> DeleteAction {
    if confirmed == Some(true) && has_form { DeleteAction::Submit } else { DeleteAction::Cancel }
}

/// Install every effect on the current document.
#[cfg(feature = "browser")]
pub fn install(effects: &EffectsConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    animate_alerts(&document, effects);
    bind_social_hover(&document, effects);
    bind_click_pulse(&document, effects);
    bind_delete_confirm(&document, effects);
}

#[cfg(feature = "browser")]
fn animate_alerts(document: &web_sys::Document, effects: &EffectsConfig) {
    for alert in crate::util::dom::query_all(document, &effects.alert_selector) {
        let _ = alert.class_list().add_1(&effects.alert_class);
    }
}

#[cfg(feature = "browser")]
fn set_link_style(link: &web_sys::HtmlElement, style: LinkStyle<'_>) {
    let css = link.style();
    let _ = css.set_property("transform", style.transform);
    let _ = css.set_property("text-shadow", style.text_shadow);
}

#[cfg(feature = "browser")]
fn bind_social_hover(document: &web_sys::Document, effects: &EffectsConfig) {
    use wasm_bindgen::JsCast;

    for link in crate::util::dom::query_all(document, &effects.social_link_selector) {
        let Ok(link) = link.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = link.clone();
            let effects = effects.clone();
            crate::util::dom::listen(&link, event, move |_event| {
                set_link_style(&target, link_style(&effects, hovered));
            });
        }
    }
}

#[cfg(feature = "browser")]
fn bind_click_pulse(document: &web_sys::Document, effects: &EffectsConfig) {
    use gloo_timers::callback::Timeout;

    for button in crate::util::dom::query_all(document, &effects.pulse_selector) {
        let target = button.clone();
        let class = effects.pulse_class.clone();
        let pulse_ms = effects.pulse_ms;
        crate::util::dom::listen(&button, "click", move |_event| {
            let _ = target.class_list().add_1(&class);
            let target = target.clone();
            let class = class.clone();
            Timeout::new(pulse_ms, move || {
                let _ = target.class_list().remove_1(&class);
            })
            .forget();
        });
    }
}

#[cfg(feature = "browser")]
fn bind_delete_confirm(document: &web_sys::Document, effects: &EffectsConfig) {
    use wasm_bindgen::JsCast;

    for button in crate::util::dom::query_all(document, &effects.delete_selector) {
        let target = button.clone();
        let prompt = effects.delete_prompt.clone();
        crate::util::dom::listen(&button, "click", move |event| {
            event.prevent_default();
            let confirmed = web_sys::window().and_then(|w| w.confirm_with_message(&prompt).ok());
            let form = if confirmed == Some(true) {
                target
                    .closest("form")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
            } else {
                None
            };
            match (delete_action(confirmed, form.is_some()), form) {
                (DeleteAction::Submit, Some(form)) => {
                    if let Err(e) = form.submit() {
                        log::warn!("delete form submit failed: {e:?}");
                    }
                }
                _ => log::debug!("delete cancelled"),
            }
        });
    }
}
