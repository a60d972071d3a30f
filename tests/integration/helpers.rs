use chat_jumper::host::sim::SimulatedHost;
use chat_jumper::nav::{Navigator, PointerSample};
use chat_jumper::notice::MemorySink;

/// Build a navigator over a uniform simulated transcript.
/// No real renderer, no event loop -- just state.
pub fn test_nav(len: usize) -> Navigator<SimulatedHost, MemorySink> {
    Navigator::new(SimulatedHost::with_uniform(len), MemorySink::default())
}

/// A primary-button tap sample over the given floor.
pub fn tap(pointer_id: u64, x: f64, y: f64, hit: Option<usize>) -> PointerSample {
    PointerSample { pointer_id, x, y, primary: true, hit, over_overlay: false }
}
