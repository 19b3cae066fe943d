use dioxus::prelude::*;

/// One entry in a dashboard's tab strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: String,
}

impl TabItem {
    pub fn new(id: &'static str, icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            id,
            icon,
            label: label.into(),
        }
    }
}

/// Tab strip shared by the dashboards. Selection is view-local state and is
/// never persisted.
#[component]
pub fn TabBar(
    tabs: Vec<TabItem>,
    active: &'static str,
    on_select: EventHandler<&'static str>,
) -> Element {
    rsx! {
        div {
            class: "tab-bar",
            for tab in tabs {
                button {
                    key: "{tab.id}",
                    class: if tab.id == active { "tab active" } else { "tab" },
                    onclick: move |_| on_select.call(tab.id),
                    span { class: "tab-icon", "{tab.icon}" }
                    "{tab.label}"
                }
            }
        }
    }
}
