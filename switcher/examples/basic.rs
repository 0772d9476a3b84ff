// Example: open the switcher and print the settled stack.
use switcher::{Layout, Switcher, SwitcherOptions};

fn main() {
    let layout = Layout::new(1080.0, 2340.0);
    let mut s = Switcher::new(SwitcherOptions::new(8, layout));

    let mut now_ms = 0u64;
    s.show(7, now_ms);
    loop {
        now_ms += 16;
        s.tick(now_ms);
        if !s.transition_state().in_flight() && !s.is_settling() {
            break;
        }
    }

    let frame = s.frame().unwrap();
    println!("scroll_pos={}", s.scroll_pos());
    for card in &frame.cards {
        println!(
            "card {}: x={:.1} scale={:.3} alpha={:.2}",
            card.index, card.center_x, card.scale, card.alpha
        );
    }
}
