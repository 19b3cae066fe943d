//! Member dashboard: browse classes, bookings, progress, notifications.

use dioxus::prelude::*;
use futures::try_join;

use api::models::unread_count;
use api::{Booking, ClassOffering, Notification, ProgressEntry};
use session::UserProfile;
use ui::{
    alert, use_api, use_payments, BookingCard, ClassCard, NotificationList, ProgressForm,
    ProgressList, TabBar, TabItem,
};

use super::LoadingScreen;

#[component]
pub fn MemberDashboard(user: UserProfile) -> Element {
    let api = use_api();
    let payments = use_payments();

    let mut classes = use_signal(Vec::<ClassOffering>::new);
    let mut bookings = use_signal(Vec::<Booking>::new);
    let mut progress = use_signal(Vec::<ProgressEntry>::new);
    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut loading = use_signal(|| true);
    let mut reload = use_signal(|| 0u32);
    let mut tab = use_signal(|| "classes");

    // All four lists are fetched concurrently and swapped in together; a
    // failed load keeps whatever was on screen. Bumping `reload` restarts
    // the resource, and unmounting the view drops an in-flight load.
    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let _ = reload();
            async move {
                loading.set(true);
                match try_join!(
                    api.classes(),
                    api.member_bookings(),
                    api.member_progress(),
                    api.notifications(),
                ) {
                    Ok((class_list, booking_list, progress_list, notification_list)) => {
                        classes.set(class_list);
                        bookings.set(booking_list);
                        progress.set(progress_list);
                        notifications.set(notification_list);
                    }
                    Err(err) => tracing::error!("member dashboard load failed: {err}"),
                }
                loading.set(false);
            }
        }
    });

    let handle_book = use_callback({
        let api = api.clone();
        move |class_id: String| {
            let api = api.clone();
            spawn(async move {
                match api.book_class(&class_id).await {
                    Ok(_) => {
                        alert("Class booked successfully!");
                        reload += 1;
                    }
                    Err(err) => alert(&format!("Error booking class: {err}")),
                }
            });
        }
    });

    let handle_cancel = use_callback({
        let api = api.clone();
        move |booking_id: String| {
            let api = api.clone();
            spawn(async move {
                match api.cancel_booking(&booking_id).await {
                    Ok(_) => {
                        alert("Booking cancelled successfully!");
                        reload += 1;
                    }
                    Err(err) => alert(&format!("Error cancelling booking: {err}")),
                }
            });
        }
    });

    // Simulated checkout: create the order, then immediately complete it
    // with a reference fabricated by the configured provider.
    let handle_pay = use_callback({
        let api = api.clone();
        let payments = payments.clone();
        move |booking_id: String| {
            let api = api.clone();
            let reference = payments.order_reference();
            spawn(async move {
                let completed = match api.create_payment_order(&booking_id).await {
                    Ok(order) => api.complete_payment(&order.order_id, &reference).await,
                    Err(err) => Err(err),
                };
                match completed {
                    Ok(_) => {
                        alert("Payment successful!");
                        reload += 1;
                    }
                    Err(err) => alert(&format!("Payment failed: {err}")),
                }
            });
        }
    });

    let handle_mark_read = use_callback({
        let api = api.clone();
        move |notification_id: String| {
            let api = api.clone();
            spawn(async move {
                match api.mark_notification_read(&notification_id).await {
                    Ok(_) => reload += 1,
                    Err(err) => tracing::error!("marking notification read failed: {err}"),
                }
            });
        }
    });

    let unread = unread_count(&notifications());
    let tabs = vec![
        TabItem::new("classes", "🏋️", "Browse Classes"),
        TabItem::new("bookings", "📅", "My Bookings"),
        TabItem::new("progress", "📊", "Progress"),
        TabItem::new("notifications", "🔔", format!("Notifications ({unread})")),
    ];

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-heading",
                h2 { "Welcome, {user.full_name}" }
                span { class: "fine", "Member Dashboard" }
            }

            TabBar { tabs, active: tab(), on_select: move |id| tab.set(id) }

            if loading() {
                LoadingScreen {}
            } else if tab() == "classes" {
                div {
                    class: "stack",
                    h3 { "Available Classes" }
                    for class in classes() {
                        ClassCard {
                            key: "{class.id}",
                            offering: class.clone(),
                            on_book: move |class_id: String| handle_book.call(class_id),
                        }
                    }
                }
            } else if tab() == "bookings" {
                div {
                    class: "stack",
                    h3 { "My Bookings" }
                    for booking in bookings() {
                        BookingCard {
                            key: "{booking.id}",
                            booking: booking.clone(),
                            on_pay: handle_pay,
                            on_cancel: handle_cancel,
                        }
                    }
                }
            } else if tab() == "progress" {
                div {
                    class: "stack",
                    h3 { "Fitness Progress" }
                    div {
                        class: "card",
                        h4 { "Add New Progress Entry" }
                        ProgressForm { on_saved: move |_| reload += 1 }
                    }
                    ProgressList { entries: progress() }
                }
            } else {
                NotificationList {
                    notifications: notifications(),
                    on_mark_read: handle_mark_read,
                }
            }
        }
    }
}
