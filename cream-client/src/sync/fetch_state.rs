//! Resource fetch state
//!
//! The loading/error/data triple tracked per remote collection. It performs
//! no I/O; the owning sync component calls [`ResourceState::begin_fetch`]
//! before the request and reports the outcome with the returned ticket.
//!
//! Every fetch bumps a generation counter. A completion carrying a ticket
//! from an older generation is discarded, so a slow response can never
//! overwrite data from a newer one.

/// What happens to the current data when a fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Keep the last good data; the render gate hides it while the error is set
    KeepData,
    /// Drop the data so no stale entries are shown
    ClearData,
}

/// Identifies one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What the UI should render for a collection
#[derive(Debug, PartialEq, Eq)]
pub enum FetchView<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a [T]),
}

#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    data: Vec<T>,
    loading: bool,
    error: String,
    generation: u64,
    policy: ErrorPolicy,
}

impl<T> ResourceState<T> {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: String::new(),
            generation: 0,
            policy,
        }
    }

    /// Start a fetch: loading on, error cleared, previous tickets invalidated
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error.clear();
        FetchTicket(self.generation)
    }

    /// Returns `false` (and changes nothing) if `ticket` is stale
    pub fn fetch_succeeded(&mut self, ticket: FetchTicket, items: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.data = items;
        self.loading = false;
        true
    }

    /// Returns `false` (and changes nothing) if `ticket` is stale
    pub fn fetch_failed(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.error = message.into();
        self.loading = false;
        if self.policy == ErrorPolicy::ClearData {
            self.data.clear();
        }
        true
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Empty when there is no error
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Loading wins over error, error wins over data
    pub fn view(&self) -> FetchView<'_, T> {
        if self.loading {
            FetchView::Loading
        } else if self.has_error() {
            FetchView::Failed(&self.error)
        } else {
            FetchView::Ready(&self.data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ResourceState::<u32>::new(ErrorPolicy::KeepData);
        assert!(!state.loading());
        assert!(!state.has_error());
        assert!(state.data().is_empty());
        assert!(matches!(state.view(), FetchView::Ready(items) if items.is_empty()));
    }

    #[test]
    fn test_success_transition() {
        let mut state = ResourceState::new(ErrorPolicy::ClearData);
        let ticket = state.begin_fetch();
        assert!(state.loading());
        assert_eq!(state.view(), FetchView::Loading);

        assert!(state.fetch_succeeded(ticket, vec![1, 2, 3]));
        assert!(!state.loading());
        assert_eq!(state.data(), &[1, 2, 3]);
        assert_eq!(state.view(), FetchView::Ready(&[1, 2, 3][..]));
    }

    #[test]
    fn test_failure_keeps_data() {
        let mut state = ResourceState::new(ErrorPolicy::KeepData);
        let ticket = state.begin_fetch();
        state.fetch_succeeded(ticket, vec![1, 2]);

        let ticket = state.begin_fetch();
        assert!(state.fetch_failed(ticket, "boom"));
        assert!(!state.loading());
        assert_eq!(state.error(), "boom");
        assert_eq!(state.data(), &[1, 2]);
        assert_eq!(state.view(), FetchView::Failed("boom"));
    }

    #[test]
    fn test_failure_clears_data() {
        let mut state = ResourceState::new(ErrorPolicy::ClearData);
        let ticket = state.begin_fetch();
        state.fetch_succeeded(ticket, vec![1, 2]);

        let ticket = state.begin_fetch();
        state.fetch_failed(ticket, "boom");
        assert!(state.data().is_empty());
        assert_eq!(state.error(), "boom");
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = ResourceState::<u32>::new(ErrorPolicy::KeepData);
        let ticket = state.begin_fetch();
        state.fetch_failed(ticket, "boom");
        state.begin_fetch();
        assert!(!state.has_error());
        assert!(state.loading());
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let mut state = ResourceState::new(ErrorPolicy::KeepData);
        let older = state.begin_fetch();
        let newer = state.begin_fetch();

        assert!(state.fetch_succeeded(newer, vec![2]));
        assert!(!state.fetch_succeeded(older, vec![1]));
        assert_eq!(state.data(), &[2]);
        assert!(!state.loading());
    }

    #[test]
    fn test_stale_completion_does_not_end_loading() {
        let mut state = ResourceState::<u32>::new(ErrorPolicy::ClearData);
        let older = state.begin_fetch();
        let _newer = state.begin_fetch();

        assert!(!state.fetch_failed(older, "late failure"));
        assert!(state.loading());
        assert!(!state.has_error());
        assert_eq!(state.generation(), 2);
    }
}
