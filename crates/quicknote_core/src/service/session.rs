//! Editing session lifecycle and the save pump.
//!
//! # Responsibility
//! - Wire board, snapshot store, debouncer and router into one owned
//!   coordinator with an explicit lifecycle.
//! - Rehydrate the board once at startup and warn once when persistence is
//!   unavailable.
//! - Drive deferred work: paste deferrals and due saves, with failure
//!   classification.
//!
//! # Invariants
//! - The board is replaced wholesale exactly once, at startup.
//! - A persistence failure never prevents or corrupts an in-progress edit.
//! - A quota failure is alerted exactly once per failed attempt and never
//!   retried automatically.
//! - Teardown leaves no pending deadline behind.

use crate::medium::StorageMedium;
use crate::model::board::NoteBoard;
use crate::model::item::ItemId;
use crate::service::debounce::SaveDebouncer;
use crate::service::router::{EventRouter, RouteOutcome, SurfaceEvent};
use crate::store::snapshot::{SaveOutcome, SnapshotStore};
use log::{error, info, warn};
use std::time::{Duration, Instant};

/// Message shown when a save is rejected for lack of space.
pub const QUOTA_ALERT: &str = "Storage quota exceeded. Please delete some notes.";

/// Message shown once when the session starts without usable storage.
pub const NO_STORAGE_ALERT: &str =
    "Storage is unavailable. Notes will not be saved in this session.";

/// Blocking user-notification channel.
///
/// The rendering host decides how to present the message; the core only
/// decides when one is warranted.
pub trait UserNotifier {
    fn alert(&mut self, message: &str);
}

/// What one tick of the session pump did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was due.
    Idle,
    /// A due save persisted the current snapshot.
    Saved,
    /// A due save was skipped because the medium is unavailable.
    SaveSkipped,
    /// A due save was rejected for quota; the user was alerted.
    QuotaRejected,
    /// A due save failed for another backend reason; logged and dropped.
    SaveFailed,
}

/// One editing session over one board and one persisted key.
///
/// Created at startup, torn down by `shutdown`. All timer state lives in the
/// owned debouncer; there is no free-floating module state.
pub struct NoteSession<M: StorageMedium, N: UserNotifier> {
    board: NoteBoard,
    store: SnapshotStore<M>,
    debouncer: SaveDebouncer,
    router: EventRouter,
    notifier: N,
}

impl<M: StorageMedium, N: UserNotifier> NoteSession<M, N> {
    /// Starts a session: probes the medium, warns once when it is unusable,
    /// and rehydrates the board from the persisted snapshot when present.
    pub fn start(medium: M, mut notifier: N, quiet: Duration) -> Self {
        let mut store = SnapshotStore::new(medium);

        if !store.available() {
            // Degrade to a non-persistent session; later saves become skips
            // and the user is not warned again.
            warn!("event=session_start module=session status=degraded reason=medium_unavailable");
            notifier.alert(NO_STORAGE_ALERT);
        }

        let board = match store.load() {
            Some(snapshot) => match NoteBoard::from_snapshot(&snapshot) {
                Ok(board) => board,
                Err(err) => {
                    // A snapshot that does not parse is treated as absent.
                    warn!(
                        "event=session_start module=session status=degraded error_code=load_failed error={err}"
                    );
                    NoteBoard::new()
                }
            },
            None => NoteBoard::new(),
        };

        info!(
            "event=session_start module=session status=ok items={}",
            board.len()
        );

        Self {
            board,
            store,
            debouncer: SaveDebouncer::new(quiet),
            router: EventRouter::new(),
            notifier,
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &NoteBoard {
        &self.board
    }

    /// Returns the live board for in-place edits.
    ///
    /// The surface mutates content directly and then reports the mutation to
    /// `handle_event` as an `Input` event.
    pub fn board_mut(&mut self) -> &mut NoteBoard {
        &mut self.board
    }

    /// Routes one bubbled surface event.
    pub fn handle_event(&mut self, event: SurfaceEvent, now: Instant) -> RouteOutcome {
        self.router
            .route(event, &mut self.board, &mut self.debouncer, now)
    }

    /// Creates one note through the dedicated create trigger.
    pub fn create_note(&mut self, now: Instant) -> ItemId {
        self.router
            .create_note(&mut self.board, &mut self.debouncer, now)
    }

    /// Returns whether a save is scheduled but not yet fired.
    pub fn save_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Pumps deferred work.
    ///
    /// A pending paste deferral converts into a save request first, so the
    /// quiet interval is measured from the tick after the paste. A due
    /// deadline then serializes the *current* board and saves it.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.router.take_deferred_save() {
            self.debouncer.request(now);
        }

        if !self.debouncer.fire_due(now) {
            return TickOutcome::Idle;
        }

        let snapshot = self.board.to_snapshot();
        match self.store.save(&snapshot) {
            Ok(SaveOutcome::Persisted) => TickOutcome::Saved,
            Ok(SaveOutcome::SkippedUnavailable) => TickOutcome::SaveSkipped,
            Err(err) if err.is_quota() => {
                // Retrying is pointless until the user frees space; the next
                // attempt happens only on the next user mutation.
                self.notifier.alert(QUOTA_ALERT);
                TickOutcome::QuotaRejected
            }
            Err(err) => {
                // Editing must never be interrupted by a transient failure.
                error!(
                    "event=snapshot_save module=session status=error error_code=save_failed error={err}"
                );
                TickOutcome::SaveFailed
            }
        }
    }

    /// Ends the session, cancelling any pending save deadline.
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
        info!(
            "event=session_end module=session status=ok items={}",
            self.board.len()
        );
    }
}
