//! Container-level event routing.
//!
//! # Responsibility
//! - Classify bubbled event targets into a closed role set and apply the
//!   matching board mutation.
//! - Signal the debouncer after every qualifying mutation.
//! - Own the dedicated create trigger and the one-tick paste deferral.
//!
//! # Invariants
//! - The router holds no board state; it borrows the board for the duration
//!   of one routed event.
//! - Delete removes exactly the item enclosing the delete control.
//! - Paste never requests a save on the tick it arrives; the request lands
//!   on the following tick, after the host's default insertion completed.

use crate::model::board::NoteBoard;
use crate::model::item::{ItemId, NoteItem};
use crate::service::debounce::SaveDebouncer;
use log::debug;
use std::time::Instant;

/// Shape of a bubbled event target as reported by the rendering surface.
///
/// The surface describes what was hit; the router decides what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetShape {
    /// Nearest enclosing item, when the target sits inside one.
    pub item: Option<ItemId>,
    /// Whether the target is an item's delete control.
    pub is_delete_control: bool,
    /// Whether the target is an item's editable text surface.
    pub is_editable: bool,
}

impl TargetShape {
    /// Shape for a target outside any item.
    pub fn outside() -> Self {
        Self {
            item: None,
            is_delete_control: false,
            is_editable: false,
        }
    }

    /// Shape for an item's delete control.
    pub fn delete_control(item: ItemId) -> Self {
        Self {
            item: Some(item),
            is_delete_control: true,
            is_editable: false,
        }
    }

    /// Shape for an item's editable text surface.
    pub fn editable(item: ItemId) -> Self {
        Self {
            item: Some(item),
            is_delete_control: false,
            is_editable: true,
        }
    }
}

/// Closed classification of the role a target plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRole {
    /// The delete control of the given item.
    DeleteControl(ItemId),
    /// The editable surface of the given item.
    EditableSurface(ItemId),
    /// Anything else. Incidental targets are ignored, not errors.
    Other,
}

/// Classifies a target shape into its semantic role.
///
/// A shape with no enclosing item is always `Other`, whatever its flags
/// claim: roles only exist inside an item.
pub fn classify_target(shape: TargetShape) -> TargetRole {
    match shape.item {
        Some(item) if shape.is_delete_control => TargetRole::DeleteControl(item),
        Some(item) if shape.is_editable => TargetRole::EditableSurface(item),
        _ => TargetRole::Other,
    }
}

/// Event classes bubbled from the rendering surface to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Pointer click anywhere inside the container.
    Click(TargetShape),
    /// Text-content mutation of some descendant; the edit itself already
    /// happened in place on the board.
    Input(TargetShape),
    /// Paste into some descendant; the host applies the insertion itself.
    Paste(TargetShape),
}

/// What routing one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// An item was removed and a save was requested. The surface must
    /// suppress the control's default action.
    ItemRemoved(ItemId),
    /// A save was requested; the router performed no board mutation.
    SaveRequested,
    /// A save request was deferred to the next tick.
    SaveDeferred,
    /// The event was not meaningful to the router.
    Ignored,
}

/// Dispatch table attached once at the container level.
///
/// The only state the router owns is the paste deferral flag; board and
/// debouncer are borrowed per call.
#[derive(Debug, Default)]
pub struct EventRouter {
    paste_pending: bool,
}

impl EventRouter {
    /// Creates a router with no deferred work.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one bubbled event in delegation order.
    pub fn route(
        &mut self,
        event: SurfaceEvent,
        board: &mut NoteBoard,
        debouncer: &mut SaveDebouncer,
        now: Instant,
    ) -> RouteOutcome {
        match event {
            SurfaceEvent::Click(shape) => match classify_target(shape) {
                TargetRole::DeleteControl(item) => {
                    if board.remove(item).is_none() {
                        debug!(
                            "event=route_click module=router status=skip reason=missing_item item={item}"
                        );
                        return RouteOutcome::Ignored;
                    }
                    debouncer.request(now);
                    RouteOutcome::ItemRemoved(item)
                }
                // Incidental clicks (caret placement and the like).
                _ => RouteOutcome::Ignored,
            },
            SurfaceEvent::Input(shape) => match classify_target(shape) {
                TargetRole::EditableSurface(_) => {
                    debouncer.request(now);
                    RouteOutcome::SaveRequested
                }
                _ => RouteOutcome::Ignored,
            },
            SurfaceEvent::Paste(_) => {
                // Defer one tick so the host's default insertion lands in the
                // snapshot instead of being short-circuited or duplicated.
                self.paste_pending = true;
                RouteOutcome::SaveDeferred
            }
        }
    }

    /// Dedicated create trigger; not a bubbled-event case.
    ///
    /// Appends one fresh empty item through the board's batched insertion,
    /// moves focus to it, and requests a save.
    pub fn create_note(
        &mut self,
        board: &mut NoteBoard,
        debouncer: &mut SaveDebouncer,
        now: Instant,
    ) -> ItemId {
        let item = NoteItem::new("");
        let id = item.id;
        board.append_all([item]);
        board.focus(id);
        debouncer.request(now);
        id
    }

    /// Consumes the paste deferral on the tick after the paste event.
    pub fn take_deferred_save(&mut self) -> bool {
        std::mem::take(&mut self.paste_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_target, TargetRole, TargetShape};
    use uuid::Uuid;

    #[test]
    fn classification_requires_an_enclosing_item() {
        let mut shape = TargetShape::outside();
        shape.is_delete_control = true;
        shape.is_editable = true;
        assert_eq!(classify_target(shape), TargetRole::Other);
    }

    #[test]
    fn delete_control_wins_over_editable_flag() {
        let item = Uuid::now_v7();
        let mut shape = TargetShape::delete_control(item);
        shape.is_editable = true;
        assert_eq!(classify_target(shape), TargetRole::DeleteControl(item));
    }
}
