//! Synchronous event dispatch with zero overhead when no handlers are registered.

use std::sync::Arc;

use super::handler::SimulationEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn SimulationEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn SimulationEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn SimulationEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::error!("simulation event handler panicked");
            }
        }
    }

    pub fn emit_risk_sampled(&self, event: &RiskSampledEvent) {
        self.emit(|h| h.on_risk_sampled(event));
    }

    pub fn emit_portfolio_aggregated(&self, event: &PortfolioAggregatedEvent) {
        self.emit(|h| h.on_portfolio_aggregated(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Counter(AtomicUsize);

    impl SimulationEventHandler for Counter {
        fn on_risk_sampled(&self, _event: &RiskSampledEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Panicker;

    impl SimulationEventHandler for Panicker {
        fn on_risk_sampled(&self, _event: &RiskSampledEvent) {
            panic!("boom");
        }
    }

    fn sampled() -> RiskSampledEvent {
        RiskSampledEvent {
            risk_name: "r".into(),
            occurrences: 1,
            iterations: 2,
            sample_mean: 0.5,
        }
    }

    #[test]
    fn empty_dispatcher_is_noop() {
        let dispatcher = EventDispatcher::new();
        assert_eq!(dispatcher.handler_count(), 0);
        dispatcher.emit_risk_sampled(&sampled());
    }

    #[test]
    fn panicking_handler_does_not_block_others() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Arc::new(Panicker));
        dispatcher.register(counter.clone());

        dispatcher.emit_risk_sampled(&sampled());
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
