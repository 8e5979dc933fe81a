//! # Shared fetch lifecycle for screen controllers
//!
//! Every screen follows the same pattern: `load()` on mount, `refresh()` on
//! pull-to-refresh, replace the local snapshot wholesale on success, keep
//! whatever is already on screen on failure. [`ScreenState`] implements that
//! pattern once, together with the two guards that keep overlapping
//! responses from corrupting the view:
//!
//! - **Stale responses.** [`begin`](ScreenState::begin) hands out a
//!   monotonically increasing [`Fetch`] ticket. A completion whose ticket is
//!   older than the one already applied is discarded, so two rapid refreshes
//!   converge on the later-issued result regardless of arrival order.
//! - **Unmounted screens.** There is no way to abort a request that is
//!   already in flight; instead [`detach`](ScreenState::detach) marks the
//!   screen dead and any completion arriving afterwards is discarded rather
//!   than applied.
//!
//! The spinner flags are cleared on *every* completion, success or failure,
//! so a screen can never wedge in a loading state.

/// Distinguishes the initial-load spinner from the pull-to-refresh spinner.
/// The two are otherwise identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Load,
    Refresh,
}

/// Ticket for one issued fetch. Later tickets always win over earlier ones.
#[derive(Clone, Copy, Debug)]
pub struct Fetch {
    seq: u64,
    kind: FetchKind,
}

impl Fetch {
    pub fn kind(&self) -> FetchKind {
        self.kind
    }
}

/// What [`ScreenState::complete`] did with a finished fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The snapshot was replaced with the response.
    Replaced,
    /// A newer fetch was already applied; the response was dropped.
    Stale,
    /// The screen was detached; the response was dropped.
    Detached,
    /// The fetch failed; existing data stays on screen.
    Failed,
}

/// Transient view state for one screen: a data snapshot plus the flags a
/// shell renders spinners from.
#[derive(Debug)]
pub struct ScreenState<T> {
    data: T,
    loading: bool,
    refreshing: bool,
    live: bool,
    issued: u64,
    applied: u64,
}

impl<T> ScreenState<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            loading: false,
            refreshing: false,
            live: true,
            issued: 0,
            applied: 0,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutable access for optimistic local mutations (remove a cart line,
    /// delete a product) that bypass the fetch cycle.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Issue a fetch ticket and raise the matching spinner flag.
    pub fn begin(&mut self, kind: FetchKind) -> Fetch {
        self.issued += 1;
        match kind {
            FetchKind::Load => self.loading = true,
            FetchKind::Refresh => self.refreshing = true,
        }
        Fetch {
            seq: self.issued,
            kind,
        }
    }

    /// Finish a fetch. Spinners are always cleared; the snapshot is replaced
    /// only when this fetch is newer than the last applied one and the
    /// screen is still live.
    pub fn complete<E: std::fmt::Display>(&mut self, fetch: Fetch, result: Result<T, E>) -> Applied {
        self.loading = false;
        self.refreshing = false;

        if !self.live {
            return Applied::Detached;
        }

        match result {
            Ok(data) => {
                if fetch.seq <= self.applied {
                    return Applied::Stale;
                }
                self.applied = fetch.seq;
                self.data = data;
                Applied::Replaced
            }
            Err(e) => {
                tracing::warn!("fetch failed, keeping current data: {e}");
                Applied::Failed
            }
        }
    }

    /// Mark the screen unmounted. Any in-flight result arriving afterwards
    /// is discarded.
    pub fn detach(&mut self) {
        self.live = false;
    }
}
