use chrono::{DateTime, NaiveDateTime, Utc};
use dioxus::prelude::*;

use api::NewClass;

use crate::alert::alert;
use crate::auth::use_api;

fn parse_form_datetime(value: &str) -> Option<DateTime<Utc>> {
    // datetime-local inputs yield minute precision; some browsers add seconds.
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Form the trainer dashboard uses to publish a new class. Calls `on_created`
/// after the backend accepts it, so the owning view can refresh its lists.
#[component]
pub fn ClassForm(trainer_id: String, on_created: EventHandler<()>) -> Element {
    let api = use_api();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut start_time = use_signal(String::new);
    let mut end_time = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let trainer_id = trainer_id.clone();
            spawn(async move {
                let (Some(start), Some(end)) = (
                    parse_form_datetime(&start_time()),
                    parse_form_datetime(&end_time()),
                ) else {
                    alert("Enter a valid start and end time");
                    return;
                };
                let (Ok(capacity_value), Ok(price_value)) = (
                    capacity().trim().parse::<u32>(),
                    price().trim().parse::<f64>(),
                ) else {
                    alert("Enter a valid capacity and price");
                    return;
                };

                let class = NewClass {
                    name: name().trim().to_string(),
                    description: description().trim().to_string(),
                    trainer_id,
                    start_time: start,
                    end_time: end,
                    capacity: capacity_value,
                    price: price_value,
                };

                saving.set(true);
                match api.create_class(&class).await {
                    Ok(_) => {
                        name.set(String::new());
                        description.set(String::new());
                        start_time.set(String::new());
                        end_time.set(String::new());
                        capacity.set(String::new());
                        price.set(String::new());
                        alert("Class created successfully!");
                        on_created.call(());
                    }
                    Err(err) => alert(&format!("Error creating class: {err}")),
                }
                saving.set(false);
            });
        }
    };

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "stack",
            div {
                class: "form-grid",
                div {
                    class: "form-field",
                    label { "Class Name" }
                    input {
                        r#type: "text",
                        required: true,
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Capacity" }
                    input {
                        r#type: "number",
                        required: true,
                        min: "1",
                        value: capacity(),
                        oninput: move |evt| capacity.set(evt.value()),
                    }
                }
            }
            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    required: true,
                    rows: "3",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div {
                class: "form-grid",
                div {
                    class: "form-field",
                    label { "Start Time" }
                    input {
                        r#type: "datetime-local",
                        required: true,
                        value: start_time(),
                        oninput: move |evt| start_time.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "End Time" }
                    input {
                        r#type: "datetime-local",
                        required: true,
                        value: end_time(),
                        oninput: move |evt| end_time.set(evt.value()),
                    }
                }
            }
            div {
                class: "form-field",
                label { "Price ($)" }
                input {
                    r#type: "number",
                    required: true,
                    min: "0",
                    step: "0.01",
                    value: price(),
                    oninput: move |evt| price.set(evt.value()),
                }
            }
            button {
                r#type: "submit",
                class: "primary full-width",
                disabled: saving(),
                if saving() { "Creating..." } else { "Create Class" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_datetime_local_values() {
        let parsed = parse_form_datetime("2025-06-01T09:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-01T09:30:00+00:00");
        assert!(parse_form_datetime("2025-06-01T09:30:15").is_some());
        assert!(parse_form_datetime("junk").is_none());
    }
}
