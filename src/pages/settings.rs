use dioxus::prelude::*;
use log::{error, info};

use crate::models::Settings;
use crate::state::{AppState, FlashState};
use crate::storage::save_settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    Notifications,
    Appearance,
}

#[component]
fn Toggle(label: String, hint: String, on: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "row between toggle-row",
            div {
                div { class: "item-title", "{label}" }
                div { class: "meta", "{hint}" }
            }
            label { class: "switch",
                input { r#type: "checkbox", checked: on, onchange: move |_| on_toggle.call(!on) }
                span { class: "slider-knob" }
            }
        }
    }
}

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<AppState>();
    let mut flash = use_context::<FlashState>();
    let mut settings = state.settings;
    let mut tab = use_signal(|| SettingsTab::General);
    let active = *tab.read();
    let s = *settings.read();

    let on_save = move |_| match save_settings(&settings.read()) {
        Ok(()) => {
            info!("[Settings] Saved");
            flash.show("Settings saved successfully!");
        }
        Err(e) => {
            error!("[Settings] Save failed: {e}");
            flash.show(format!("Could not save settings: {e}"));
        }
    };
    let on_reset = move |_| {
        settings.set(Settings::default());
        flash.show("Settings reset to defaults.");
    };

    rsx! {
        div { class: "card",
            h2 { class: "title", "Settings" }
            div { class: "tabs",
                button { class: if active == SettingsTab::General { "tab active" } else { "tab" }, onclick: move |_| tab.set(SettingsTab::General), "General" }
                button { class: if active == SettingsTab::Notifications { "tab active" } else { "tab" }, onclick: move |_| tab.set(SettingsTab::Notifications), "Notifications" }
                button { class: if active == SettingsTab::Appearance { "tab active" } else { "tab" }, onclick: move |_| tab.set(SettingsTab::Appearance), "Appearance" }
            }
            if active == SettingsTab::General {
                Toggle {
                    label: "Online Mode".to_string(),
                    hint: "Show others that you are available for work".to_string(),
                    on: s.online_mode,
                    on_toggle: move |v: bool| settings.write().online_mode = v,
                }
                div { class: "actions",
                    button { class: "btn btn-ghost", onclick: on_reset, "Reset All Settings" }
                    button { class: "btn btn-primary", onclick: on_save, "Save Changes" }
                }
            }
            if active == SettingsTab::Notifications {
                Toggle {
                    label: "Push Notifications".to_string(),
                    hint: "Get notified about new bids and messages".to_string(),
                    on: s.notifications,
                    on_toggle: move |v: bool| settings.write().notifications = v,
                }
                Toggle {
                    label: "Email Updates".to_string(),
                    hint: "Receive task recommendations by email".to_string(),
                    on: s.email_updates,
                    on_toggle: move |v: bool| settings.write().email_updates = v,
                }
            }
            if active == SettingsTab::Appearance {
                Toggle {
                    label: "Dark Mode".to_string(),
                    hint: "Use a dark colour scheme".to_string(),
                    on: s.dark_mode,
                    on_toggle: move |v: bool| settings.write().dark_mode = v,
                }
            }
        }
    }
}
