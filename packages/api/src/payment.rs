//! Payment-provider seam.
//!
//! A real deployment would embed a provider SDK here; this client fabricates
//! an order reference and immediately completes the order server-side. The
//! trait keeps booking logic ignorant of that: swapping in a real provider
//! touches only this module and the app shell's context wiring.

use std::sync::Arc;

/// Source of provider-side order references for the checkout flow.
pub trait PaymentProvider {
    /// Reference handed to the complete-order endpoint.
    fn order_reference(&self) -> String;
}

/// How the dashboards receive the provider via context.
pub type SharedPaymentProvider = Arc<dyn PaymentProvider>;

/// Stand-in provider: timestamp-based references, no settlement.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedPayments;

impl SimulatedPayments {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProvider for SimulatedPayments {
    fn order_reference(&self) -> String {
        format!("DEMO_{}", now_millis())
    }
}

fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_reference_is_a_timestamped_demo_id() {
        let reference = SimulatedPayments::new().order_reference();
        let millis = reference.strip_prefix("DEMO_").unwrap();
        assert!(millis.parse::<u64>().unwrap() > 0);
    }
}
