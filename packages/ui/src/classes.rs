use api::ClassOffering;
use dioxus::prelude::*;

/// A class offering as shown on the member and trainer dashboards.
///
/// `on_book` is wired on the member view only; when present, the book action
/// is withheld for full classes regardless of server enforcement.
#[component]
pub fn ClassCard(
    offering: ClassOffering,
    #[props(default)] on_book: Option<EventHandler<String>>,
    #[props(default)] show_status: bool,
) -> Element {
    let starts = offering.start_time.format("%b %e, %Y %H:%M").to_string();
    let ends = offering.end_time.format("%b %e, %Y %H:%M").to_string();
    let price = format!("${}", offering.price);
    let status = offering.status.as_str();
    let full = offering.is_full();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-row",
                div {
                    h4 { "{offering.name}" }
                    p { class: "muted", "{offering.description}" }
                    p { class: "fine", "Trainer: {offering.trainer_name}" }
                }
                div {
                    class: "card-aside",
                    p { class: "price", "{price}" }
                    p { class: "fine", "{offering.enrolled_count}/{offering.capacity} enrolled" }
                    if show_status {
                        span { class: "badge badge-{status}", "{status}" }
                    }
                }
            }
            div {
                class: "card-row",
                div {
                    p { class: "fine", "{starts} to {ends}" }
                    p { class: "fine", "Duration: {offering.duration} minutes" }
                }
                if let Some(on_book) = on_book {
                    button {
                        class: "primary",
                        disabled: full,
                        onclick: {
                            let class_id = offering.id.clone();
                            move |_| on_book.call(class_id.clone())
                        },
                        if full { "Full" } else { "Book Class" }
                    }
                }
            }
        }
    }
}
