mod common;

use common::{CapturingNotifier, ScriptedMedium};
use quicknote_core::{
    NoteSession, SurfaceEvent, TargetShape, TickOutcome, SNAPSHOT_KEY,
};
use std::time::{Duration, Instant};

const QUIET: Duration = Duration::from_millis(300);

fn started_session(
    medium: &ScriptedMedium,
) -> NoteSession<ScriptedMedium, CapturingNotifier> {
    NoteSession::start(medium.clone(), CapturingNotifier::new(), QUIET)
}

#[test]
fn burst_of_mutations_persists_exactly_once() {
    let medium = ScriptedMedium::new();
    let mut session = started_session(&medium);
    let start = Instant::now();

    let id = session.create_note(start);
    for offset_ms in [50, 100, 150] {
        session.board_mut().set_content(id, format!("draft {offset_ms}"));
        session.handle_event(
            SurfaceEvent::Input(TargetShape::editable(id)),
            start + Duration::from_millis(offset_ms),
        );
    }

    // Quiet interval measured from the first request has elapsed, but not
    // from the last: nothing fires.
    assert_eq!(
        session.tick(start + Duration::from_millis(400)),
        TickOutcome::Idle
    );
    assert!(medium.writes_of(SNAPSHOT_KEY).is_empty());

    // Quiet interval measured from the last request has elapsed.
    assert_eq!(
        session.tick(start + Duration::from_millis(450)),
        TickOutcome::Saved
    );
    assert_eq!(medium.writes_of(SNAPSHOT_KEY).len(), 1);

    // The slot was consumed; no trailing second save.
    assert_eq!(
        session.tick(start + Duration::from_millis(900)),
        TickOutcome::Idle
    );
    assert_eq!(medium.writes_of(SNAPSHOT_KEY).len(), 1);
}

#[test]
fn persisted_snapshot_reflects_fire_time_state_not_request_time() {
    let medium = ScriptedMedium::new();
    let mut session = started_session(&medium);
    let start = Instant::now();

    let id = session.create_note(start);
    session.board_mut().set_content(id, "at request time");
    session.handle_event(SurfaceEvent::Input(TargetShape::editable(id)), start);

    // The board keeps mutating after the last request, before the fire.
    session.board_mut().set_content(id, "at fire time");

    assert_eq!(session.tick(start + QUIET), TickOutcome::Saved);

    let writes = medium.writes_of(SNAPSHOT_KEY);
    assert_eq!(writes.len(), 1);
    assert!(writes[0].contains("at fire time"));
    assert!(!writes[0].contains("at request time"));
}

#[test]
fn a_new_request_supersedes_the_pending_deadline() {
    let medium = ScriptedMedium::new();
    let mut session = started_session(&medium);
    let start = Instant::now();

    let id = session.create_note(start);
    session.handle_event(SurfaceEvent::Input(TargetShape::editable(id)), start);
    session.handle_event(
        SurfaceEvent::Input(TargetShape::editable(id)),
        start + Duration::from_millis(200),
    );

    // Due relative to the first request only.
    assert_eq!(session.tick(start + QUIET), TickOutcome::Idle);
    // Due relative to the superseding request.
    assert_eq!(
        session.tick(start + Duration::from_millis(200) + QUIET),
        TickOutcome::Saved
    );
    assert_eq!(medium.writes_of(SNAPSHOT_KEY).len(), 1);
}

#[test]
fn a_tick_with_nothing_scheduled_is_idle() {
    let medium = ScriptedMedium::new();
    let mut session = started_session(&medium);

    assert!(!session.save_pending());
    assert_eq!(
        session.tick(Instant::now() + Duration::from_secs(60)),
        TickOutcome::Idle
    );
    assert!(medium.writes_of(SNAPSHOT_KEY).is_empty());
}
