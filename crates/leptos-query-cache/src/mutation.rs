//! Mutations
//!
//! `use_mutation` wraps an async write in an `Action` and runs a cache
//! callback (usually invalidation) after each successful call.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::client::QueryClient;

pub struct Mutation<I: 'static, O: 'static> {
    action: Action<I, O>,
}

impl<I: 'static, O: 'static> Clone for Mutation<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: 'static, O: 'static> Copy for Mutation<I, O> {}

impl<I, O> Mutation<I, O>
where
    I: Send + Sync + 'static,
    O: Clone + Send + Sync + 'static,
{
    pub fn dispatch(&self, input: I) {
        self.action.dispatch(input);
    }

    /// True while any dispatched call is in flight
    pub fn pending(&self) -> bool {
        self.action.pending().get()
    }

    /// Result of the most recently completed call
    pub fn value(&self) -> Option<O> {
        self.action.value().get()
    }

    pub fn action(&self) -> Action<I, O> {
        self.action
    }
}

/// Build a mutation. `on_success` receives the client, the input and the
/// output after `mutation_fn` resolves with `Ok`.
pub fn use_mutation<I, T, E, F, Fut, S>(
    client: QueryClient,
    mutation_fn: F,
    on_success: S,
) -> Mutation<I, Result<T, E>>
where
    I: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    S: Fn(&QueryClient, &I, &T) + 'static,
{
    let on_success = Rc::new(on_success);
    let action = Action::new_local(move |input: &I| {
        let input = input.clone();
        let request = mutation_fn(input.clone());
        let on_success = Rc::clone(&on_success);
        async move {
            let result = request.await;
            if let Ok(output) = &result {
                on_success(&client, &input, output);
            }
            result
        }
    });

    Mutation { action }
}

/// Mutation with no cache interaction
pub fn use_stateless_mutation<I, T, E, F, Fut>(mutation_fn: F) -> Mutation<I, Result<T, E>>
where
    I: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let action = Action::new_local(move |input: &I| mutation_fn(input.clone()));
    Mutation { action }
}
