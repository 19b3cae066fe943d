//! Trainer dashboard: own classes, class creation, member feedback.

use dioxus::prelude::*;
use futures::try_join;

use api::{ClassOffering, FeedbackEntry};
use session::UserProfile;
use ui::{use_api, ClassCard, ClassForm, FeedbackList, TabBar, TabItem};

use super::LoadingScreen;

#[component]
pub fn TrainerDashboard(user: UserProfile) -> Element {
    let api = use_api();

    let mut classes = use_signal(Vec::<ClassOffering>::new);
    let mut feedback = use_signal(Vec::<FeedbackEntry>::new);
    let mut loading = use_signal(|| true);
    let mut reload = use_signal(|| 0u32);
    let mut tab = use_signal(|| "classes");

    let _loader = use_resource({
        let api = api.clone();
        let trainer_id = user.id.clone();
        move || {
            let api = api.clone();
            let trainer_id = trainer_id.clone();
            let _ = reload();
            async move {
                loading.set(true);
                match try_join!(
                    api.trainer_classes(&trainer_id),
                    api.trainer_feedback(&trainer_id),
                ) {
                    Ok((class_list, feedback_list)) => {
                        classes.set(class_list);
                        feedback.set(feedback_list);
                    }
                    Err(err) => tracing::error!("trainer dashboard load failed: {err}"),
                }
                loading.set(false);
            }
        }
    });

    let tabs = vec![
        TabItem::new("classes", "🏋️", "My Classes"),
        TabItem::new("create", "➕", "Create Class"),
        TabItem::new("feedback", "⭐", "Feedback"),
    ];

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-heading",
                h2 { "Trainer Dashboard - {user.full_name}" }
            }

            TabBar { tabs, active: tab(), on_select: move |id| tab.set(id) }

            if loading() {
                LoadingScreen {}
            } else if tab() == "classes" {
                div {
                    class: "stack",
                    h3 { "My Classes" }
                    for class in classes() {
                        ClassCard {
                            key: "{class.id}",
                            offering: class.clone(),
                            show_status: true,
                        }
                    }
                }
            } else if tab() == "create" {
                div {
                    class: "card",
                    h3 { "Create New Class" }
                    ClassForm {
                        trainer_id: user.id.clone(),
                        on_created: move |_| reload += 1,
                    }
                }
            } else {
                div {
                    class: "stack",
                    h3 { "Student Feedback" }
                    FeedbackList { feedback: feedback() }
                }
            }
        }
    }
}
