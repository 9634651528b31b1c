//! Leopard Run entry point
//!
//! The real deployment is wasm32 where the JS renderer drives the `web::Game`
//! wrapper. The native binary runs a short headless session as a smoke test.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use leopard_run::sim::{GameState, SessionPhase, tick};

    env_logger::init();
    log::info!("Leopard Run (native) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::new(seed);
    state.start();

    // Headless run: hop on a fixed cadence until an obstacle wins
    let mut frames = 0u64;
    while state.phase == SessionPhase::Running && frames < 100_000 {
        if frames % 70 == 0 {
            state.jump();
        }
        tick(&mut state);
        frames += 1;
    }

    println!(
        "run over after {} ticks: score {}, best {}",
        state.ticks, state.score, state.best
    );
    if let Some(quote) = state.end_quote {
        println!("{quote}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_init, this is just to satisfy the compiler
}
