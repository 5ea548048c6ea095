//! Labelled range slider with a numeric text input and reset button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdRotateCcw;
use tldrify_summary::SliderInput;

use crate::files::set_input_value;

/// Props for the [`SliderControl`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SliderControlProps {
    /// Visible label.
    label: String,
    /// Id of the text input, referenced by the label.
    input_id: String,
    min: f64,
    max: f64,
    step: f64,
    /// Value the reset button restores.
    default: f64,
    /// Value owned by the parent.
    value: f64,
    #[props(default)]
    disabled: bool,
    /// Called with every committed value.
    on_change: EventHandler<f64>,
}

/// Slider and text input kept in sync.
///
/// Typing only updates the text; the value is committed on blur or
/// Enter, clamped to the range and rounded to the step.
#[component]
pub fn SliderControl(props: SliderControlProps) -> Element {
    let mut slider = use_signal(|| {
        SliderInput::new(props.min, props.max, props.step, props.default, props.value)
    });

    // Follow the parent when it loads different settings.
    use_effect(use_reactive((&props.value,), move |(value,)| {
        slider.write().sync(value);
    }));

    let on_change = props.on_change;
    let mut commit = move || {
        let value = slider.write().commit();
        on_change.call(value);
    };

    let state = slider.read().clone();
    let show_reset = state.show_reset(props.disabled);

    rsx! {
        div { class: "slider-control",
            div { class: "slider-header",
                label { r#for: "{props.input_id}", class: "slider-label", "{props.label}" }
                div { class: "slider-input-group",
                    if show_reset {
                        button {
                            class: "icon-button",
                            aria_label: "Reset",
                            title: "Reset to default",
                            onclick: move |_| {
                                slider.write().reset();
                                let value = slider.read().value();
                                on_change.call(value);
                            },
                            Icon { width: 16, height: 16, icon: LdRotateCcw }
                        }
                    }
                    input {
                        id: "{props.input_id}",
                        class: "slider-number",
                        r#type: "text",
                        inputmode: "decimal",
                        value: "{state.input()}",
                        disabled: props.disabled,
                        oninput: {
                            let input_id = props.input_id.clone();
                            move |evt: FormEvent| {
                                let mut text = slider.write();
                                if let Some(kept) = text.edit(&evt.value()) {
                                    set_input_value(&input_id, kept);
                                }
                            }
                        },
                        onblur: move |_| commit(),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                commit();
                            }
                        },
                    }
                }
            }
            input {
                class: "slider-range",
                r#type: "range",
                min: "{state.min()}",
                max: "{state.max()}",
                step: "{state.step()}",
                value: "{state.value()}",
                disabled: props.disabled,
                aria_label: "{props.label}",
                oninput: move |evt: FormEvent| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        slider.write().slide(value);
                        on_change.call(value);
                    }
                },
            }
        }
    }
}
