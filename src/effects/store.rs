//! Store that owns the flow state and runs the validation effect.

use stillwater::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::builder::StoreBuilder;
use crate::core::{reduce, Action, FlowState, Screen, ScreenView};
use crate::effects::validation::{validate, ValidationEnv};

/// Imperative shell around the pure flow core.
///
/// The store is the single writer of the state: only [`Store::dispatch`]
/// replaces it, by running the reducer. The one asynchronous piece is the
/// validation timer, armed when `loading` transitions from false to true.
/// The timer task never touches the state directly; it sends its result
/// actions into a channel, and the owner applies them through
/// [`Store::settle`] or [`Store::pump`] in FIFO order. `FinishLoading`
/// therefore always lands strictly after the `Confirm`/`Error` of the
/// same run.
///
/// Dispatching `Check` must happen inside a Tokio runtime, since arming
/// the timer spawns a task.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use deleteguard::core::Screen;
/// use deleteguard::effects::Store;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut store = Store::builder()
///     .secret("paradigma")
///     .delay(Duration::from_millis(10))
///     .item_name("the repository")
///     .build()
///     .unwrap();
///
/// store.write("paradigma");
/// store.check();
/// store.settle().await;
///
/// assert!(store.state().confirmed);
/// assert_eq!(store.screen(), Screen::Confirm);
/// # }
/// ```
pub struct Store {
    state: FlowState,
    env: ValidationEnv,
    item_name: String,
    tx: UnboundedSender<(u64, Action)>,
    rx: UnboundedReceiver<(u64, Action)>,
    pending: Option<JoinHandle<()>>,
    // Bumped whenever a run is cancelled; actions from older runs are
    // discarded even if their task managed to send before the abort.
    generation: u64,
}

impl Store {
    /// Start building a store.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(crate) fn new(env: ValidationEnv, item_name: String) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: FlowState::initial(),
            env,
            item_name,
            tx,
            rx,
            pending: None,
            generation: 0,
        }
    }

    /// Current state (pure).
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Display name of the item being deleted.
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Which screen the current state selects (pure).
    pub fn screen(&self) -> Screen {
        Screen::select(&self.state)
    }

    /// View model for the current screen (pure).
    pub fn view(&self) -> ScreenView {
        ScreenView::derive(&self.state, &self.item_name)
    }

    /// True while a validation run is in flight or its outcome has not
    /// been applied yet.
    pub fn is_validating(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply an action to the state and manage the validation timer.
    ///
    /// Arms the timer when `loading` transitions from false to true.
    /// `Reset` cancels an in-flight run, discards its queued outcome, and
    /// clears `loading` on its behalf, so the flow can never sit loading
    /// with no timer armed.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(action = action.name(), "dispatching action");
        let was_loading = self.state.loading;
        let is_reset = matches!(action, Action::Reset);

        self.state = reduce(&self.state, &action);

        if is_reset {
            self.cancel_pending();
        } else if !was_loading && self.state.loading {
            self.arm();
        }
    }

    /// Dispatch `Check`: request validation of the entered code.
    pub fn check(&mut self) {
        self.dispatch(Action::Check);
    }

    /// Dispatch `Write`: replace the entered code.
    pub fn write(&mut self, value: impl Into<String>) {
        self.dispatch(Action::Write(value.into()));
    }

    /// Dispatch `Delete`: confirm the deletion.
    pub fn delete(&mut self) {
        self.dispatch(Action::Delete);
    }

    /// Dispatch `Reset`: return to the entry screen.
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Wait for the in-flight validation run (if any) and apply every
    /// queued action.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
        self.pump();
    }

    /// Apply queued effect actions without waiting.
    pub fn pump(&mut self) {
        while let Ok((generation, action)) = self.rx.try_recv() {
            if generation == self.generation {
                self.dispatch(action);
            }
        }
        if self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            self.pending = None;
        }
    }

    /// Schedule the one-shot validation run for the current value.
    fn arm(&mut self) {
        // The input is disabled for the whole loading window, so the
        // value captured here is also the value at fire time.
        let value = self.state.value.clone();
        let env = self.env.clone();
        let tx = self.tx.clone();
        let generation = self.generation;

        tracing::debug!(
            delay_ms = env.delay().as_millis() as u64,
            "starting validation effect"
        );
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(env.delay()).await;
            tracing::debug!("running validation");

            if let Ok(outcome) = validate(&value).run(&env).await {
                let _ = tx.send((generation, outcome.action()));
            }
            // Loading always clears, strictly after the outcome.
            let _ = tx.send((generation, Action::FinishLoading));
            tracing::debug!("terminating validation");
        }));
    }

    /// Abort the in-flight run and drop anything it produced.
    fn cancel_pending(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.pending.take() {
            tracing::debug!("cancelling validation effect");
            handle.abort();
        }
        while self.rx.try_recv().is_ok() {}
        // The transition table leaves `loading` untouched on Reset; the
        // cancelled run will never clear it, so do it here.
        if self.state.loading {
            self.state = reduce(&self.state, &Action::FinishLoading);
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_store() -> Store {
        Store::builder()
            .secret("paradigma")
            .delay(Duration::from_millis(50))
            .item_name("the repository")
            .build()
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn correct_code_reaches_confirm_screen() {
        let mut store = test_store();

        store.write("paradigma");
        store.check();
        assert!(store.state().loading);
        assert!(store.is_validating());

        store.settle().await;

        assert!(store.state().confirmed);
        assert!(!store.state().loading);
        assert!(!store.state().error);
        assert_eq!(store.screen(), Screen::Confirm);
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_code_shows_error_on_entry_screen() {
        let mut store = test_store();

        store.write("wrong");
        store.check();
        store.settle().await;

        assert!(store.state().error);
        assert!(!store.state().loading);
        assert!(!store.state().confirmed);
        assert_eq!(store.screen(), Screen::Entry);

        match store.view() {
            ScreenView::Entry { error_visible, .. } => assert!(error_visible),
            other => panic!("expected entry view, got {:?}", other.screen()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delete_then_reset_returns_to_empty_entry() {
        let mut store = test_store();

        store.write("paradigma");
        store.check();
        store.settle().await;
        assert_eq!(store.screen(), Screen::Confirm);

        store.delete();
        assert!(store.state().deleted);
        assert_eq!(store.screen(), Screen::Deleted);

        store.reset();
        assert_eq!(store.screen(), Screen::Entry);
        assert_eq!(store.state().value, "");
        assert!(!store.state().confirmed);
        assert!(!store.state().deleted);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_after_error_succeeds() {
        let mut store = test_store();

        store.write("wrong");
        store.check();
        store.settle().await;
        assert!(store.state().error);

        store.write("paradigma");
        store.check();
        store.settle().await;

        assert!(store.state().confirmed);
        assert!(!store.state().error);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_in_flight_validation() {
        let mut store = test_store();

        store.write("paradigma");
        store.check();
        assert!(store.state().loading);

        store.reset();
        assert!(!store.state().loading);
        assert!(!store.is_validating());

        // Even well past the delay, no stale outcome may land.
        tokio::time::sleep(Duration::from_millis(500)).await;
        store.pump();

        assert!(!store.state().confirmed);
        assert!(!store.state().error);
        assert_eq!(store.screen(), Screen::Entry);
    }

    #[tokio::test(start_paused = true)]
    async fn check_while_loading_does_not_rearm() {
        let mut store = test_store();

        store.write("paradigma");
        store.check();
        let before = store.state().clone();

        store.check();
        assert_eq!(store.state(), &before);

        store.settle().await;
        assert!(store.state().confirmed);
        assert!(!store.state().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn input_is_disabled_while_validating() {
        let mut store = test_store();

        store.write("paradigma");
        store.check();

        match store.view() {
            ScreenView::Entry {
                input_disabled,
                loading_visible,
                error_visible,
                ..
            } => {
                assert!(input_disabled);
                assert!(loading_visible);
                assert!(!error_visible);
            }
            other => panic!("expected entry view, got {:?}", other.screen()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn finish_loading_after_outcome_is_idempotent() {
        let mut store = test_store();

        store.write("wrong");
        store.check();
        store.settle().await;

        let settled = store.state().clone();
        store.dispatch(Action::FinishLoading);
        assert_eq!(store.state(), &settled);
    }

    #[tokio::test(start_paused = true)]
    async fn view_titles_use_the_item_name() {
        let mut store = test_store();

        match store.view() {
            ScreenView::Entry { title, .. } => {
                assert_eq!(title, "Delete the repository");
            }
            other => panic!("expected entry view, got {:?}", other.screen()),
        }

        store.write("paradigma");
        store.check();
        store.settle().await;
        store.delete();

        match store.view() {
            ScreenView::Deleted { title } => {
                assert_eq!(title, "the repository was deleted");
            }
            other => panic!("expected deleted view, got {:?}", other.screen()),
        }
    }
}
