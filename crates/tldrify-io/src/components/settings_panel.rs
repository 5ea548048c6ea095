//! Settings panel: model, writing style and word budget.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdSettings;
use tldrify_summary::settings::{DEFAULT_WORDS, MAX_WORDS, MIN_WORDS, WORDS_STEP};
use tldrify_summary::{Model, Settings, WritingStyle};

use super::SliderControl;

/// Props for the [`SettingsPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SettingsPanelProps {
    settings: Settings,
    /// Read-only while a request is loading or once an answer exists.
    disabled: bool,
    on_change: EventHandler<Settings>,
}

/// Word budget from a committed slider value, which is already clamped
/// and stepped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn words(value: f64) -> u32 {
    value.clamp(f64::from(MIN_WORDS), f64::from(MAX_WORDS)).round() as u32
}

/// Side panel with the summarization presets.
#[component]
pub fn SettingsPanel(props: SettingsPanelProps) -> Element {
    let settings = props.settings;
    let on_change = props.on_change;

    rsx! {
        aside { class: "settings-panel",
            div { class: "settings-header",
                Icon { width: 20, height: 20, icon: LdSettings }
                h2 { "Settings" }
            }

            section { class: "settings-group",
                h3 { class: "settings-group-title", "Presets" }

                div { class: "settings-row",
                    label { r#for: "model-select", "Model" }
                    select {
                        id: "model-select",
                        disabled: props.disabled,
                        onchange: move |evt: FormEvent| match evt.value().parse::<Model>() {
                            Ok(model) => on_change.call(Settings { model, ..settings }),
                            Err(e) => tracing::warn!("{e}"),
                        },
                        for model in Model::ALL {
                            option {
                                value: model.as_str(),
                                selected: model == settings.model,
                                disabled: !model.is_selectable(),
                                "{model.label()}"
                            }
                        }
                    }
                }

                div { class: "settings-row",
                    label { r#for: "writing-style-select", "Writing style" }
                    select {
                        id: "writing-style-select",
                        disabled: props.disabled,
                        onchange: move |evt: FormEvent| match evt.value().parse::<WritingStyle>() {
                            Ok(writing_style) => {
                                on_change.call(Settings { writing_style, ..settings });
                            }
                            Err(e) => tracing::warn!("{e}"),
                        },
                        for style in WritingStyle::ALL {
                            option {
                                value: style.as_str(),
                                selected: style == settings.writing_style,
                                "{style.label()}"
                            }
                        }
                    }
                }
            }

            section { class: "settings-group",
                h3 { class: "settings-group-title", "Configurations" }
                SliderControl {
                    label: "Maximum words",
                    input_id: "max-words-input",
                    min: f64::from(MIN_WORDS),
                    max: f64::from(MAX_WORDS),
                    step: f64::from(WORDS_STEP),
                    default: f64::from(DEFAULT_WORDS),
                    value: f64::from(settings.max_words),
                    disabled: props.disabled,
                    on_change: move |value: f64| {
                        on_change.call(Settings { max_words: words(value), ..settings });
                    },
                }
            }
        }
    }
}
