use api::FeedbackEntry;
use dioxus::prelude::*;

/// Member feedback as shown to the trainer. Read-only.
#[component]
pub fn FeedbackList(feedback: Vec<FeedbackEntry>) -> Element {
    rsx! {
        div {
            class: "stack",
            for entry in feedback.iter() {
                FeedbackCard { key: "{entry.id}", entry: entry.clone() }
            }
            if feedback.is_empty() {
                div { class: "empty", "No feedback yet" }
            }
        }
    }
}

#[component]
fn FeedbackCard(entry: FeedbackEntry) -> Element {
    let when = entry.created_at.format("%b %e, %Y").to_string();
    let rating = entry.rating.min(5) as usize;
    let stars = format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating));

    rsx! {
        div {
            class: "card",
            div {
                class: "card-row",
                div {
                    p { class: "strong", "{entry.member_name}" }
                    p { class: "stars", "{stars} ({entry.rating}/5)" }
                }
                p { class: "fine", "{when}" }
            }
            p { "{entry.comment}" }
        }
    }
}
