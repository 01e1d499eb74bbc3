/// A read request bound at the type level to its result shape (query
/// abstraction).
///
/// `Query` is a marker: it carries no behavior, only the association between
/// a query shape and the [`Output`](Query::Output) it produces. The
/// one-handler-per-query expectation is left to the consumer's registration
/// layer (e.g. dependency wiring).
pub trait Query: Send + Sync + 'static {
    /// Result shape this query produces.
    type Output;
}

/// Handles a query and produces its result (query handler abstraction).
///
/// This trait makes **no storage assumptions**: a handler may read an
/// in-memory map, a SQL projection or a remote service. Failure semantics
/// belong to each concrete handler; handlers that can fail typically bind a
/// `Result` as their query's `Output`.
pub trait QueryHandler {
    /// The query type served by this handler.
    type Query: Query;

    /// Execute the query synchronously and produce its bound result.
    fn handle(&self, query: Self::Query) -> <Self::Query as Query>::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundwork_core::Id;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    struct BalanceByCustomer {
        customer: Id,
    }

    impl Query for BalanceByCustomer {
        type Output = Option<i64>;
    }

    struct InMemoryBalances {
        balances: HashMap<Id, i64>,
    }

    impl QueryHandler for InMemoryBalances {
        type Query = BalanceByCustomer;

        fn handle(&self, query: BalanceByCustomer) -> Option<i64> {
            self.balances.get(&query.customer).copied()
        }
    }

    #[test]
    fn handler_produces_the_bound_result() {
        let customer = Id::new();
        let handler = InMemoryBalances {
            balances: HashMap::from([(customer, 2_500)]),
        };

        assert_eq!(handler.handle(BalanceByCustomer { customer }), Some(2_500));
        assert_eq!(
            handler.handle(BalanceByCustomer { customer: Id::new() }),
            None
        );
    }
}
