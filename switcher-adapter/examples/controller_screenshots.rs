// Example: back-stack controller resolving screenshots into a render frame.
use switcher::{Entry, Layout, SwitcherOptions};
use switcher_adapter::Controller;

fn main() {
    let entries = vec![
        Entry::new(0, "home"),
        Entry::new(1, "settings"),
        Entry::new(2, "settings"),
        Entry::new(3, "profile"),
    ];
    let layout = Layout::new(1080.0, 2340.0);
    let mut c: Controller<String> = Controller::new(SwitcherOptions::new(0, layout), entries);

    // A capture worker would write into a cache() clone; fake two captures.
    c.put_screenshot(&c.entries()[3], "png:profile".into());
    c.put_screenshot(&c.entries()[2], "png:settings#2".into());

    let mut now_ms = 0u64;
    c.switcher_mut().show(3, now_ms);
    loop {
        now_ms += 16;
        c.tick(now_ms);
        if !c.switcher().transition_state().in_flight() {
            break;
        }
    }

    let frame = c.render_frame().unwrap();
    for card in &frame.cards {
        println!(
            "{} ({}): {}",
            card.entry.id,
            card.entry.route_key,
            card.image.as_deref().unwrap_or("<pending capture>")
        );
    }
}
