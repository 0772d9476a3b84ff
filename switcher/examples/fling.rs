// Example: a leftward fling through the carousel, with selection reporting.
use switcher::{Layout, Switcher, SwitcherOptions};

fn main() {
    // A host would:
    // - feed pointer deltas into drag_move as they arrive
    // - call tick(now_ms) from its frame loop
    // - draw frame() output each tick
    let layout = Layout::new(1080.0, 2340.0);
    let options = SwitcherOptions::new(10, layout)
        .with_on_selection_changed(|index| println!("selection -> {index}"));
    let mut s = Switcher::new(options);

    let mut now_ms = 0u64;
    s.show(9, now_ms);
    loop {
        now_ms += 16;
        s.tick(now_ms);
        if !s.transition_state().in_flight() {
            break;
        }
    }

    // Swipe right over 5 frames: cards move toward older entries.
    s.drag_start(now_ms);
    for _ in 0..5 {
        now_ms += 16;
        s.drag_move(40.0, 2.0, now_ms);
        s.tick(now_ms);
    }
    s.drag_end(now_ms);

    loop {
        now_ms += 16;
        s.tick(now_ms);
        if !s.is_settling() {
            break;
        }
    }
    println!("landed on {}", s.scroll_pos());
}
