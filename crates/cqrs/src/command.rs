use groundwork_core::Id;

/// A request to perform a single state mutation (command abstraction).
///
/// Commands represent **intent** - a request to change state that a consumer
/// may accept or reject. They are **transient** (nothing here persists them)
/// and carry their own identity.
///
/// ## Command Identity
///
/// Every command instance is identified by an [`Id`] assigned at creation.
/// Consumers lean on it for:
/// - **Idempotency**: a retried command keeps its id, so a receiver can
///   detect and drop duplicates
/// - **Correlation**: log lines and audit trails reference one id across
///   process boundaries
///
/// ## Design Constraints
///
/// Commands must be:
/// - **Cloneable**: commands may be copied for retries, logging, etc.
/// - **Send + Sync**: commands cross thread boundaries (workers, async handlers)
/// - **'static**: commands don't contain borrowed data (must own all data)
///
/// These constraints ensure commands can be safely stored, transmitted, and
/// processed in concurrent systems.
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Identifier of this command instance, assigned at creation.
    fn id(&self) -> Id;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone, serde::Serialize)]
    struct RegisterCustomer {
        id: Id,
        name: String,
        occurred_at: DateTime<Utc>,
    }

    impl Command for RegisterCustomer {
        fn id(&self) -> Id {
            self.id
        }
    }

    #[test]
    fn identity_survives_thread_boundaries() {
        let cmd = RegisterCustomer {
            id: Id::new(),
            name: "Acme".to_string(),
            occurred_at: Utc::now(),
        };
        let id = cmd.id();

        let handle = std::thread::spawn(move || cmd.id());
        assert_eq!(handle.join().unwrap(), id);
    }

    #[test]
    fn clones_share_the_same_identity() {
        let cmd = RegisterCustomer {
            id: Id::new(),
            name: "Acme".to_string(),
            occurred_at: Utc::now(),
        };
        assert_eq!(cmd.clone().id(), cmd.id());
    }
}
