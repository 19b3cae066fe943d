use api::{NewProgress, ProgressEntry};
use dioxus::prelude::*;

use crate::alert::alert;
use crate::auth::use_api;

/// Weight/height entry form. The server computes BMI and attendance.
#[component]
pub fn ProgressForm(on_saved: EventHandler<()>) -> Element {
    let api = use_api();

    let mut weight = use_signal(String::new);
    let mut height = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            spawn(async move {
                let entry = NewProgress {
                    weight: weight().trim().parse().ok(),
                    height: height().trim().parse().ok(),
                };
                if entry.is_empty() {
                    return;
                }

                saving.set(true);
                match api.add_progress(&entry).await {
                    Ok(_) => {
                        weight.set(String::new());
                        height.set(String::new());
                        alert("Progress entry added successfully!");
                        on_saved.call(());
                    }
                    Err(err) => alert(&format!("Error adding progress: {err}")),
                }
                saving.set(false);
            });
        }
    };

    let nothing_entered = weight().trim().is_empty() && height().trim().is_empty();

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "form-grid progress-form",
            div {
                class: "form-field",
                label { "Weight (kg)" }
                input {
                    r#type: "number",
                    step: "0.1",
                    value: weight(),
                    oninput: move |evt| weight.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Height (cm)" }
                input {
                    r#type: "number",
                    step: "0.1",
                    value: height(),
                    oninput: move |evt| height.set(evt.value()),
                }
            }
            button {
                r#type: "submit",
                class: "primary",
                disabled: saving() || nothing_entered,
                if saving() { "Adding..." } else { "Add Entry" }
            }
        }
    }
}

/// Recorded progress entries, newest first as the server returns them.
#[component]
pub fn ProgressList(entries: Vec<ProgressEntry>) -> Element {
    rsx! {
        div {
            class: "stack",
            for entry in entries.iter() {
                ProgressCard { key: "{entry.id}", entry: entry.clone() }
            }
        }
    }
}

#[component]
fn ProgressCard(entry: ProgressEntry) -> Element {
    let date = entry.recorded_date.format("%b %e, %Y").to_string();

    rsx! {
        div {
            class: "card",
            div {
                class: "progress-grid",
                div {
                    p { class: "fine", "Date" }
                    p { class: "strong", "{date}" }
                }
                if let Some(weight) = entry.weight {
                    div {
                        p { class: "fine", "Weight" }
                        p { class: "strong", "{weight} kg" }
                    }
                }
                if let Some(height) = entry.height {
                    div {
                        p { class: "fine", "Height" }
                        p { class: "strong", "{height} cm" }
                    }
                }
                if let Some(bmi) = entry.bmi {
                    div {
                        p { class: "fine", "BMI" }
                        p { class: "strong", "{bmi:.1}" }
                    }
                }
                div {
                    p { class: "fine", "Classes Attended" }
                    p { class: "strong", "{entry.attendance_count}" }
                }
            }
        }
    }
}
