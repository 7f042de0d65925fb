// src/events/bus/event_bus.rs
//
// Synchronous in-process event bus.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events, same result
// 3. Observable - every emission is logged and kept in a bounded log
// 4. Type-safe - handlers receive the concrete event type

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler
type EventHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Default number of emissions kept in the event log
pub const DEFAULT_LOG_CAPACITY: usize = 1024;

/// The Event Bus
///
/// Lets the application layer publish facts about saved aggregates without
/// knowing who reacts to them. Cloning shares the same handlers and log.
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Most recent emissions, oldest first
    event_log: Arc<RwLock<VecDeque<EventLogEntry>>>,

    log_capacity: usize,
}

/// A logged emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub aluno_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Bus whose log keeps at most `log_capacity` entries (0 disables the log)
    pub fn with_capacity(log_capacity: usize) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(VecDeque::new())),
            log_capacity,
        }
    }

    /// Subscribe to a specific event type.
    /// Handlers are executed in the order they are subscribed.
    ///
    /// ```ignore
    /// bus.subscribe::<CursoConcluido, _>(|event| {
    ///     println!("Curso concluído: {}", event.matricula_id);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Arc::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                log::error!(
                    "failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Emit an event: record it, then run every handler for its type.
    /// A panicking handler is logged and does not stop the others.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        // Snapshot so handlers may subscribe or emit without deadlocking
        let event_handlers: Vec<EventHandler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();
        let handler_count = event_handlers.len();

        log::debug!(
            "[EVENT] {} (id: {}, aluno: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            event.aluno_id(),
            handler_count
        );
        self.record(EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            aluno_id: event.aluno_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count,
        });

        for (idx, handler) in event_handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any);
            }));

            if result.is_err() {
                log::error!("handler {} for {} panicked", idx, event.event_type());
            }
        }
    }

    fn record(&self, entry: EventLogEntry) {
        if self.log_capacity == 0 {
            return;
        }
        let mut log = self.event_log.write().unwrap_or_else(PoisonError::into_inner);
        while log.len() >= self.log_capacity {
            log.pop_front();
        }
        log.push_back(entry);
    }

    /// Snapshot of the event log, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear_event_log(&self) {
        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
            log_capacity: self.log_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use uuid::Uuid;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<AlunoAtivado, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(AlunoAtivado::new(Uuid::new_v4()));
        bus.emit(AlunoInativado::new(Uuid::new_v4()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count::<AlunoAtivado>(), 1);
        assert_eq!(bus.subscriber_count::<AlunoInativado>(), 0);
    }

    #[test]
    fn test_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(Mutex::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<CursoConcluido, _>(move |_| {
                seq.lock().unwrap().push(n);
            });
        }

        bus.emit(CursoConcluido::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            chrono::Utc::now(),
        ));

        assert_eq!(*sequence.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_panicking_handler_does_not_stop_others() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<AlunoAtivado, _>(|_| panic!("boom"));
        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<AlunoAtivado, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(AlunoAtivado::new(Uuid::new_v4()));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_can_subscribe_and_emit_on_same_bus() {
        let bus = EventBus::new();
        let inner = bus.clone();

        bus.subscribe::<AlunoAtivado, _>(move |event| {
            inner.subscribe::<AlunoInativado, _>(|_| {});
            inner.emit(AlunoInativado::new(event.aluno_id));
        });

        bus.emit(AlunoAtivado::new(Uuid::new_v4()));

        assert_eq!(bus.subscriber_count::<AlunoInativado>(), 1);
        let tipos: Vec<String> = bus.get_event_log().into_iter().map(|e| e.event_type).collect();
        assert_eq!(tipos, ["AlunoAtivado", "AlunoInativado"]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();
        let aluno_id = Uuid::new_v4();

        bus.emit(AlunoAtivado::new(aluno_id));
        bus.emit(PagamentoMatriculaRegistrado::new(aluno_id, Uuid::new_v4()));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "AlunoAtivado");
        assert_eq!(log[1].event_type, "PagamentoMatriculaRegistrado");
        assert_eq!(log[1].aluno_id, aluno_id.to_string());

        bus.clear_event_log();
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_event_log_is_bounded() {
        let bus = EventBus::with_capacity(2);
        for _ in 0..3 {
            bus.emit(AlunoAtivado::new(Uuid::new_v4()));
        }
        bus.emit(AlunoInativado::new(Uuid::new_v4()));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].event_type, "AlunoInativado");

        let silent = EventBus::with_capacity(0);
        silent.emit(AlunoAtivado::new(Uuid::new_v4()));
        assert!(silent.get_event_log().is_empty());
    }

    #[test]
    fn test_clone_shares_handlers_and_log() {
        let bus = EventBus::new();
        let clone = bus.clone();
        clone.subscribe::<AlunoAtivado, _>(|_| {});
        clone.emit(AlunoAtivado::new(Uuid::new_v4()));

        assert_eq!(bus.subscriber_count::<AlunoAtivado>(), 1);
        assert_eq!(bus.get_event_log().len(), 1);
    }
}
