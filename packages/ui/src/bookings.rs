use api::Booking;
use dioxus::prelude::*;

/// One booking with its status badges and the pay/cancel actions the
/// booking's state allows.
#[component]
pub fn BookingCard(
    booking: Booking,
    on_pay: EventHandler<String>,
    on_cancel: EventHandler<String>,
) -> Element {
    let starts = booking.class_start_time.format("%b %e, %Y %H:%M").to_string();
    let booked = booking.booking_time.format("%b %e, %Y %H:%M").to_string();
    let status = booking.status.as_str();
    let payment = booking.payment_status.as_str();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-row",
                div {
                    h4 { "{booking.class_name}" }
                    p { class: "muted", "{starts}" }
                    p { class: "fine", "Booked: {booked}" }
                    div {
                        class: "badge-row",
                        span { class: "badge badge-{status}", "{status}" }
                        span { class: "badge badge-{payment}", "Payment: {payment}" }
                    }
                }
                div {
                    class: "card-actions",
                    if booking.can_pay() {
                        button {
                            class: "primary",
                            onclick: {
                                let booking_id = booking.id.clone();
                                move |_| on_pay.call(booking_id.clone())
                            },
                            "Pay Now"
                        }
                    }
                    if booking.can_cancel() {
                        button {
                            class: "danger",
                            onclick: {
                                let booking_id = booking.id.clone();
                                move |_| on_cancel.call(booking_id.clone())
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
