//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicknote_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use quicknote_core::{
    default_log_level, init_logging, MemoryMedium, NoteSession, SaveDebouncer, SurfaceEvent,
    TargetShape, TickOutcome, UserNotifier,
};
use std::time::Instant;

struct StdoutNotifier;

impl UserNotifier for StdoutNotifier {
    fn alert(&mut self, message: &str) {
        println!("alert: {message}");
    }
}

fn main() {
    let log_dir = std::env::temp_dir().join("quicknote-logs");
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("quicknote_core logging=ok"),
        Err(err) => println!("quicknote_core logging=skipped ({err})"),
    }

    println!("quicknote_core ping={}", quicknote_core::ping());
    println!("quicknote_core version={}", quicknote_core::core_version());

    // One in-memory round-trip to exercise the session pump end to end.
    let mut session = NoteSession::start(
        MemoryMedium::new(),
        StdoutNotifier,
        SaveDebouncer::DEFAULT_QUIET,
    );
    let now = Instant::now();
    let id = session.create_note(now);
    session.board_mut().set_content(id, "hello from the smoke probe");
    session.handle_event(SurfaceEvent::Input(TargetShape::editable(id)), now);

    let outcome = session.tick(now + SaveDebouncer::DEFAULT_QUIET);
    println!(
        "quicknote_core smoke items={} saved={}",
        session.board().len(),
        matches!(outcome, TickOutcome::Saved)
    );
    session.shutdown();
}
