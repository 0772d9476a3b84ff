use crate::*;

use std::sync::{Arc, Mutex};

fn layout() -> Layout {
    Layout::new(1000.0, 2000.0)
}

fn engine(count: usize) -> Switcher {
    Switcher::new(SwitcherOptions::new(count, layout()))
}

/// Steps the engine at 16 ms until every animation has finished.
fn run_until_idle(s: &mut Switcher, now: &mut u64) {
    for _ in 0..2000 {
        *now += 16;
        s.tick(*now);
        if !s.is_settling() && !s.transition_state().in_flight() {
            return;
        }
    }
    panic!("engine did not go idle");
}

fn show_and_settle(s: &mut Switcher, index: usize, now: &mut u64) {
    s.show(index, *now);
    run_until_idle(s, now);
    assert_eq!(s.transition_state(), TransitionState::Stack);
}

#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, s: impl Into<String>) {
        self.0.lock().unwrap().push(s.into());
    }

    fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

fn engine_with_log(count: usize) -> (Switcher, CallLog) {
    let log = CallLog::default();
    let (a, b, c) = (log.clone(), log.clone(), log.clone());
    let options = SwitcherOptions::new(count, layout())
        .with_on_card_selected(move |i| a.push(format!("selected({i})")))
        .with_on_switcher_dismissed(move || b.push("dismissed".to_string()))
        .with_on_selection_changed(move |i| c.push(format!("selection({i})")));
    (Switcher::new(options), log)
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
fn card_center_x_is_monotonic_in_index() {
    let l = layout();
    let count = 12;
    for &sp in &[0.0f32, 0.5, 2.5, 6.0, 10.3, 11.0] {
        let mut prev = f32::NEG_INFINITY;
        for k in 0..count {
            let x = geometry::card_center_x(&l, count, k, sp);
            assert!(
                x > prev,
                "center not increasing at k={k} sp={sp}: {x} <= {prev}"
            );
            prev = x;
        }
    }
}

#[test]
fn left_peek_series_converges_to_its_limit() {
    let l = layout();
    let count = 200;
    // Deep in the stack the total offset converges to base_peek/(1-decay)
    // = 0.22/0.72 of a card width, about 0.3056.
    let limit = l.left_base_peek() / (1.0 - l.left_decay);
    assert!((limit - 0.3056 * l.card_width()).abs() < 1e-3 * l.card_width());

    let x0 = geometry::card_center_x(&l, count, 0, 199.0);
    let offset = l.center_x() - x0;
    assert!((offset - limit).abs() < 1e-2);
}

#[test]
fn depth_scale_is_continuous_at_focus() {
    assert!((geometry::depth_scale(0.0) - 0.98).abs() < 1e-6);
    assert!((geometry::depth_scale(1e-4) - 0.98).abs() < 1e-3);
    assert!((geometry::depth_scale(-1e-4) - 0.98).abs() < 1e-3);
}

#[test]
fn depth_scale_branches() {
    // Right cards ramp toward 1.0 and saturate.
    assert!((geometry::depth_scale(1.0) - 1.0).abs() < 1e-6);
    assert_eq!(geometry::depth_scale(5.0), 1.0);
    // Left cards decay toward the 0.96 floor.
    assert!((geometry::depth_scale(-1.0) - 0.97).abs() < 1e-6);
    assert!(geometry::depth_scale(-8.0) > 0.96);
    assert!(geometry::depth_scale(-8.0) < 0.961);
}

#[test]
fn title_alpha_window() {
    assert_eq!(geometry::title_alpha(0.0), 1.0);
    assert_eq!(geometry::title_alpha(-2.0), 0.0);
    assert_eq!(geometry::title_alpha(2.0), 0.0);
    assert_eq!(geometry::title_alpha(-3.5), 0.0);
    assert_eq!(geometry::title_alpha(4.0), 0.0);
    assert!((geometry::title_alpha(1.5) - 0.5).abs() < 1e-6);
    assert!((geometry::title_alpha(-0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn title_blur_tracks_title_alpha() {
    assert_eq!(geometry::title_blur_radius(0.0), 0.0);
    // Alpha 0.5 maps to the 10-unit maximum.
    assert!((geometry::title_blur_radius(1.5) - 10.0).abs() < 1e-4);
    // Fully faded titles stay at the maximum.
    assert!((geometry::title_blur_radius(-2.5) - 10.0).abs() < 1e-4);
}

#[test]
fn dark_overlay_only_on_left_cards() {
    assert_eq!(geometry::dark_overlay_alpha(0.0), 0.0);
    assert_eq!(geometry::dark_overlay_alpha(1.5), 0.0);
    assert!((geometry::dark_overlay_alpha(-1.0) - 0.25).abs() < 1e-6);
    // Capped at 0.50 regardless of depth.
    assert_eq!(geometry::dark_overlay_alpha(-3.0), 0.5);
    assert_eq!(geometry::dark_overlay_alpha(-10.0), 0.5);
}

#[test]
fn overscroll_sink_scale_bounds() {
    let count = 5;
    // No sink when inside the range or past the left edge.
    assert_eq!(geometry::overscroll_sink_scale(count, 2, 2.0), 1.0);
    assert_eq!(geometry::overscroll_sink_scale(count, 0, -1.5), 1.0);

    // Past the right edge every card shrinks, but never below 85%, and the
    // rightmost card shrinks least.
    for &over in &[0.2f32, 1.0, 3.0] {
        let sp = 4.0 + over;
        let mut prev = f32::NEG_INFINITY;
        for index in 0..count {
            let s = geometry::overscroll_sink_scale(count, index, sp);
            assert!(s < 1.0);
            assert!(s >= 0.85);
            assert!(s >= prev, "rightmost card must sink the least");
            prev = s;
        }
    }
}

#[test]
fn overscroll_displacement_is_bounded() {
    let l = layout();
    let count = 4;
    // The damping term |x|/(1+0.8|x|) caps at 1.25, so even absurd
    // overscroll cannot push a card arbitrarily far.
    let at_rest = geometry::card_center_x(&l, count, 3, 3.0);
    let wild = geometry::card_center_x(&l, count, 3, 50.0);
    assert!((at_rest - wild).abs() < 1.25 * l.right_spacing());
}

#[test]
fn culling_rules() {
    let l = layout();
    let count = 20;
    // Deep left cards are gone regardless of their converged position.
    assert!(geometry::is_culled(&l, count, 10, 19.0));
    assert!(geometry::is_culled(&l, count, 16, 19.0));
    assert!(!geometry::is_culled(&l, count, 17, 19.0));
    // Far right cards drop off the edge of the screen.
    assert!(geometry::is_culled(&l, count, 19, 0.0));
    assert!(!geometry::is_culled(&l, count, 0, 0.0));
}

#[test]
fn left_fade_ramp() {
    assert_eq!(geometry::left_fade_alpha(0.0), 1.0);
    assert_eq!(geometry::left_fade_alpha(-2.0), 1.0);
    assert!((geometry::left_fade_alpha(-2.5) - 0.5).abs() < 1e-6);
    assert_eq!(geometry::left_fade_alpha(-3.0), 0.0);
}

// ---------------------------------------------------------------------------
// Spring / tween
// ---------------------------------------------------------------------------

#[test]
fn critically_damped_spring_settles_without_overshoot() {
    let mut s = Spring::new(0.0, 1.0).with_stiffness(STIFFNESS_FLING);
    for _ in 0..1000 {
        s.advance(0.016);
        assert!(s.position() <= 1.0 + 1e-4, "overshoot: {}", s.position());
        if s.is_at_rest() {
            break;
        }
    }
    assert!(s.is_at_rest());
    assert_eq!(s.position(), 1.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn spring_with_initial_velocity_still_lands_on_target() {
    let mut s = Spring::new(2.0, 3.0)
        .with_stiffness(STIFFNESS_FLING)
        .with_initial_velocity(8.0);
    for _ in 0..2000 {
        s.advance(0.016);
        if s.is_at_rest() {
            break;
        }
    }
    assert!(s.is_at_rest());
    assert_eq!(s.position(), 3.0);
}

#[test]
fn spring_subdivides_large_ticks() {
    let mut a = Spring::new(0.0, 1.0).with_stiffness(STIFFNESS_MEDIUM);
    let mut b = Spring::new(0.0, 1.0).with_stiffness(STIFFNESS_MEDIUM);
    a.advance(0.128);
    for _ in 0..8 {
        b.advance(0.016);
    }
    assert!((a.position() - b.position()).abs() < 1e-3);
}

#[test]
fn bezier_easing_endpoints_and_monotonicity() {
    let e = Easing::overlay();
    assert_eq!(e.sample(0.0), 0.0);
    assert_eq!(e.sample(1.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = e.sample(i as f32 / 100.0);
        assert!(v >= prev - 1e-4, "easing not monotone at step {i}");
        prev = v;
    }
}

#[test]
fn tween_samples_and_finishes() {
    let t = Tween::new(1.0, 0.0, 100, 400, Easing::Linear);
    assert_eq!(t.sample(100), 1.0);
    assert!((t.sample(300) - 0.5).abs() < 1e-6);
    assert_eq!(t.sample(500), 0.0);
    assert!(!t.is_done(499));
    assert!(t.is_done(500));
    // Sampling before the start clamps rather than extrapolating.
    assert_eq!(t.sample(0), 1.0);
}

#[test]
fn velocity_tracker_secant_estimate() {
    let mut v = VelocityTracker::new();
    v.add_sample(0, 0.0);
    v.add_sample(50, 100.0);
    v.add_sample(100, 200.0);
    assert!((v.velocity() - 2000.0).abs() < 1.0);

    // Old motion outside the 100 ms horizon is ignored.
    let mut v = VelocityTracker::new();
    v.add_sample(0, -500.0);
    v.add_sample(300, 0.0);
    v.add_sample(350, 10.0);
    assert!((v.velocity() - 200.0).abs() < 1.0);

    let v = VelocityTracker::new();
    assert_eq!(v.velocity(), 0.0);
}

// ---------------------------------------------------------------------------
// Scroll model
// ---------------------------------------------------------------------------

#[test]
fn drag_and_anim_values_hand_off_without_jumps() {
    let mut m = ScrollModel::new();
    m.snap_to(3.0);
    assert_eq!(m.current(), 3.0);

    m.begin_drag();
    assert_eq!(m.current(), 3.0);
    m.drag_by(0.4);
    assert!((m.current() - 3.4).abs() < 1e-6);

    // Ending the drag hands the value to the animated side unchanged.
    m.end_drag();
    assert!(!m.is_dragging());
    assert!((m.current() - 3.4).abs() < 1e-6);
}

#[test]
fn starting_a_drag_cancels_the_settle() {
    let mut m = ScrollModel::new();
    m.snap_to(0.0);
    m.settle_to(2, 0.0, STIFFNESS_FLING, SettleKind::Fling);
    assert!(m.is_settling());
    m.begin_drag();
    assert!(!m.is_settling());
}

#[test]
fn settle_lands_exactly_on_the_integer_target() {
    let mut m = ScrollModel::new();
    m.snap_to(1.3);
    m.settle_to(3, 0.0, STIFFNESS_FLING, SettleKind::Fling);
    let mut done = None;
    for _ in 0..2000 {
        if let Some(d) = m.tick(0.016) {
            done = Some(d);
            break;
        }
    }
    assert_eq!(done, Some((3, SettleKind::Fling)));
    assert_eq!(m.current(), 3.0);
}

#[test]
fn new_settle_replaces_the_old_one() {
    let mut m = ScrollModel::new();
    m.snap_to(0.0);
    m.settle_to(4, 0.0, STIFFNESS_FLING, SettleKind::Fling);
    m.settle_to(1, 0.0, STIFFNESS_MEDIUM, SettleKind::Recenter);
    assert_eq!(m.settle_target(), Some(1));
    let mut done = None;
    for _ in 0..2000 {
        if let Some(d) = m.tick(0.016) {
            done = Some(d);
            break;
        }
    }
    assert_eq!(done, Some((1, SettleKind::Recenter)));
}

// ---------------------------------------------------------------------------
// Engine scenarios
// ---------------------------------------------------------------------------

#[test]
fn show_centers_the_selected_card() {
    let mut s = engine(20);
    let mut now = 0u64;
    show_and_settle(&mut s, 19, &mut now);

    assert_eq!(s.scroll_pos(), 19.0);
    let frame = s.frame().unwrap();

    // Cards at rel <= -3 are culled: only 17, 18, 19 survive.
    let indexes: Vec<usize> = frame.cards.iter().map(|c| c.index).collect();
    assert_eq!(indexes, vec![17, 18, 19]);

    let focused = frame.cards.iter().find(|c| c.index == 19).unwrap();
    assert!((focused.scale - 0.98).abs() < 1e-6);
    assert_eq!(focused.center_x, s.layout().center_x());
    assert_eq!(focused.alpha, 1.0);
    assert!((frame.scrim_alpha - 0.92).abs() < 1e-6);
    assert!(frame.overlay.is_none());
}

#[test]
fn frame_is_none_while_hidden() {
    let s = engine(5);
    assert!(s.frame().is_none());
    assert_eq!(s.transition_state(), TransitionState::Hidden);
}

#[test]
fn show_on_empty_stack_is_a_no_op() {
    let mut s = engine(0);
    s.show(0, 0);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
    assert!(s.frame().is_none());
}

#[test]
fn show_passes_through_shrink_in() {
    let mut s = engine(5);
    s.show(2, 0);
    match s.transition_state() {
        TransitionState::ShrinkIn { progress } => assert_eq!(progress, 1.0),
        other => panic!("expected ShrinkIn, got {other:?}"),
    }

    // Mid-transition the overlay covers card 2 and cards are faded.
    s.tick(200);
    let frame = s.frame().unwrap();
    let overlay = frame.overlay.unwrap();
    assert_eq!(overlay.index, 2);
    assert!(overlay.width > s.layout().card_width());
    assert!(overlay.width < s.layout().screen_width);
    for card in &frame.cards {
        assert!(card.alpha < 1.0);
    }

    s.tick(420);
    assert_eq!(s.transition_state(), TransitionState::Stack);
    assert!(s.frame().unwrap().overlay.is_none());
}

#[test]
fn drag_one_spacing_with_zero_velocity_settles_on_next_card() {
    let mut s = engine(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    let spacing = s.layout().drag_spacing();
    s.drag_start(now);
    s.drag_move(-spacing, 0.0, now + 10);
    // Hold still long enough that the release velocity reads as zero.
    s.drag_move(0.0, 0.0, now + 200);
    s.drag_move(0.0, 0.0, now + 320);
    s.drag_end(now + 330);

    // Base friction puts the drag at 2.7; the projection rounds to 3.
    assert!((s.scroll_pos() - 2.7).abs() < 1e-3);
    assert!(s.is_settling());

    now += 330;
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.scroll_pos(), 3.0);
}

#[test]
fn fling_settle_reports_selection_change() {
    let (mut s, log) = engine_with_log(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.drag_start(now);
    s.drag_move(-400.0, 0.0, now + 16);
    s.drag_move(-400.0, 0.0, now + 32);
    s.drag_end(now + 40);
    now += 40;
    run_until_idle(&mut s, &mut now);

    assert_eq!(s.scroll_pos(), s.scroll_pos().round());
    let target = s.scroll_pos() as usize;
    assert!(target > 2, "fast leftward drag must advance the selection");
    assert_eq!(log.calls(), vec![format!("selection({target})")]);
}

#[test]
fn single_entry_stack_always_settles_back_to_zero() {
    let mut s = engine(1);
    let mut now = 0u64;
    show_and_settle(&mut s, 0, &mut now);

    s.drag_start(now);
    s.drag_move(-600.0, 0.0, now + 16);
    s.drag_move(-600.0, 0.0, now + 32);
    s.drag_end(now + 40);
    now += 40;
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.scroll_pos(), 0.0);

    s.drag_start(now);
    s.drag_move(500.0, 0.0, now + 16);
    s.drag_end(now + 32);
    now += 32;
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.scroll_pos(), 0.0);
}

#[test]
fn vertical_locked_drag_leaves_scroll_untouched() {
    let mut s = engine(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.drag_start(now);
    s.drag_move(-4.0, 60.0, now + 16);
    s.drag_move(-4.0, 80.0, now + 32);
    s.drag_end(now + 48);
    assert_eq!(s.scroll_pos(), 2.0);
    assert!(!s.is_settling());
}

#[test]
fn edge_friction_stiffens_with_overscroll() {
    let mut s = engine(3);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.drag_start(now);
    s.drag_move(-100.0, 0.0, now + 16);
    let first = s.scroll_pos() - 2.0;
    s.drag_move(-100.0, 0.0, now + 32);
    let second = s.scroll_pos() - 2.0 - first;
    assert!(first > 0.0);
    assert!(second > 0.0);
    assert!(
        second < first,
        "rubber-band must stiffen: {second} !< {first}"
    );
}

#[test]
fn overscrolled_release_discards_velocity_and_snaps_back() {
    let mut s = engine(3);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.drag_start(now);
    s.drag_move(-300.0, 0.0, now + 16);
    s.drag_move(-300.0, 0.0, now + 32);
    assert!(s.scroll_pos() > 2.0);
    s.drag_end(now + 40);
    now += 40;
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.scroll_pos(), 2.0);
}

#[test]
fn drag_cancel_settles_on_nearest_index() {
    let mut s = engine(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.drag_start(now);
    s.drag_move(-100.0, 0.0, now + 16);
    s.drag_cancel(now + 32);
    now += 32;
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.scroll_pos(), s.scroll_pos().round());
    assert!(s.scroll_pos() >= 0.0 && s.scroll_pos() <= 4.0);
}

#[test]
fn tap_on_a_card_selects_then_dismisses_in_order() {
    let (mut s, log) = engine_with_log(8);
    let mut now = 0u64;
    show_and_settle(&mut s, 7, &mut now);

    // x=0 lands inside card 5's peeking strip only (cards 6 and 7 start
    // further right), so the back-to-front scan resolves to 5.
    s.tap(0.0, s.layout().center_y(), now);
    match s.transition_state() {
        TransitionState::ExpandOut { target, .. } => assert_eq!(target, 5),
        other => panic!("expected ExpandOut, got {other:?}"),
    }

    run_until_idle(&mut s, &mut now);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
    assert_eq!(
        log.calls(),
        vec!["selected(5)".to_string(), "dismissed".to_string()]
    );
}

#[test]
fn overlay_lingers_at_fullscreen_after_a_select() {
    let (mut s, log) = engine_with_log(3);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.tap(s.layout().center_x(), s.layout().center_y(), now);

    // Run just past the expand animation: selection is out, dismissal is
    // still pending and the overlay covers the full viewport.
    for _ in 0..28 {
        now += 16;
        s.tick(now);
    }
    assert_eq!(log.calls(), vec!["selected(2)".to_string()]);
    let overlay = s.frame().unwrap().overlay.unwrap();
    assert_eq!(overlay.width, s.layout().screen_width);
    assert_eq!(overlay.corner_radius, 0.0);

    // Gestures stay blocked during the linger.
    s.drag_start(now);
    assert!(!s.is_dragging());

    run_until_idle(&mut s, &mut now);
    assert_eq!(
        log.calls(),
        vec!["selected(2)".to_string(), "dismissed".to_string()]
    );
    assert_eq!(s.transition_state(), TransitionState::Hidden);
}

#[test]
fn tap_on_empty_space_dismisses() {
    let (mut s, log) = engine_with_log(3);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    // Far above the card band.
    s.tap(s.layout().center_x(), 1.0, now);
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
    assert_eq!(log.calls(), vec!["dismissed".to_string()]);
}

#[test]
fn dismiss_recenters_on_the_last_entry_first() {
    let (mut s, log) = engine_with_log(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 4, &mut now);

    // Fling back to a lower index.
    s.drag_start(now);
    s.drag_move(500.0, 0.0, now + 16);
    s.drag_move(500.0, 0.0, now + 32);
    s.drag_end(now + 40);
    now += 40;
    run_until_idle(&mut s, &mut now);
    let settled = s.scroll_pos() as usize;
    assert!(settled < 4);

    s.dismiss(now);
    // The re-centering settle runs while the stack is still showing.
    assert!(s.is_settling());
    assert_eq!(s.transition_state(), TransitionState::Stack);

    run_until_idle(&mut s, &mut now);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
    let calls = log.calls();
    assert_eq!(calls.last().unwrap(), "dismissed");
    assert!(!calls.iter().any(|c| c.starts_with("selected(")));
}

#[test]
fn dismiss_when_already_centered_expands_immediately() {
    let mut s = engine(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 4, &mut now);

    s.dismiss(now);
    match s.transition_state() {
        TransitionState::ExpandOut { target, .. } => assert_eq!(target, 4),
        other => panic!("expected ExpandOut, got {other:?}"),
    }
}

#[test]
fn dismiss_during_an_active_drag_abandons_the_gesture() {
    let (mut s, log) = engine_with_log(4);
    let mut now = 0u64;
    show_and_settle(&mut s, 1, &mut now);

    s.drag_start(now);
    s.drag_move(-100.0, 0.0, now + 16);
    s.on_back_signal(now + 16);
    assert!(!s.is_dragging());
    assert!(s.is_settling());

    // The release of the abandoned gesture must not replace the
    // re-centering settle or strand the pending expand.
    s.drag_end(now + 32);
    s.drag_cancel(now + 32);
    now += 32;
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
    assert_eq!(log.calls(), vec!["dismissed".to_string()]);

    // The engine accepts input again afterwards.
    show_and_settle(&mut s, 3, &mut now);
    s.dismiss(now);
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
}

#[test]
fn dismiss_cancels_a_live_settle_before_expanding() {
    let (mut s, log) = engine_with_log(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 3, &mut now);

    // Fling toward the last card, then dismiss once the position rounds
    // to it while the spring is still live.
    s.drag_start(now);
    s.drag_move(-300.0, 0.0, now + 16);
    s.drag_move(-300.0, 0.0, now + 32);
    s.drag_end(now + 40);
    now += 40;
    for _ in 0..2000 {
        now += 16;
        s.tick(now);
        if s.scroll_pos().round() as usize == 4 {
            break;
        }
    }
    assert!(s.is_settling());

    // Tap above the card band: a miss, so an animated dismiss.
    s.tap(s.layout().center_x(), 1.0, now);
    assert!(!s.is_settling());
    match s.transition_state() {
        TransitionState::ExpandOut { target, .. } => assert_eq!(target, 4),
        other => panic!("expected ExpandOut, got {other:?}"),
    }

    // The cancelled fling never reports a selection.
    run_until_idle(&mut s, &mut now);
    assert_eq!(log.calls(), vec!["dismissed".to_string()]);
}

#[test]
fn back_signal_is_dismiss_and_reentrant_calls_are_no_ops() {
    let (mut s, log) = engine_with_log(3);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.on_back_signal(now);
    assert!(s.transition_state().in_flight());

    // Re-entrant dismiss/tap/drag during the transition are ignored.
    s.dismiss(now + 16);
    s.tap(s.layout().center_x(), s.layout().center_y(), now + 16);
    s.drag_start(now + 16);
    assert!(!s.is_dragging());

    run_until_idle(&mut s, &mut now);
    assert_eq!(log.calls(), vec!["dismissed".to_string()]);
}

#[test]
fn gestures_are_ignored_during_shrink_in() {
    let mut s = engine(5);
    s.show(2, 0);
    s.drag_start(16);
    assert!(!s.is_dragging());
    s.tick(100);
    s.tap(s.layout().center_x(), s.layout().center_y(), 100);
    assert!(matches!(
        s.transition_state(),
        TransitionState::ShrinkIn { .. }
    ));
}

#[test]
fn dismiss_then_show_round_trips_to_the_same_visuals() {
    let mut a = engine(6);
    let mut now_a = 0u64;
    show_and_settle(&mut a, 3, &mut now_a);
    let fresh = a.frame().unwrap();

    let mut b = engine(6);
    let mut now_b = 0u64;
    show_and_settle(&mut b, 3, &mut now_b);
    b.dismiss(now_b);
    run_until_idle(&mut b, &mut now_b);
    assert_eq!(b.transition_state(), TransitionState::Hidden);
    show_and_settle(&mut b, 3, &mut now_b);

    assert_eq!(b.frame().unwrap(), fresh);
}

#[test]
fn expand_out_fades_the_scrim() {
    let mut s = engine(3);
    let mut now = 0u64;
    show_and_settle(&mut s, 2, &mut now);

    s.dismiss(now);
    now += 200;
    s.tick(now);
    let frame = s.frame().unwrap();
    assert!(frame.scrim_alpha < 0.92);
    assert!(frame.scrim_alpha > 0.0);
}

#[test]
fn shrinking_the_stack_mid_expand_clamps_the_selection_index() {
    let (mut s, log) = engine_with_log(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 4, &mut now);

    s.tap(s.layout().center_x(), s.layout().center_y(), now);
    match s.transition_state() {
        TransitionState::ExpandOut { target, .. } => assert_eq!(target, 4),
        other => panic!("expected ExpandOut, got {other:?}"),
    }

    // Entries 3 and 4 disappear under the running expand; the reported
    // selection must stay within the new range.
    s.set_count(3);
    run_until_idle(&mut s, &mut now);
    assert_eq!(
        log.calls(),
        vec!["selected(2)".to_string(), "dismissed".to_string()]
    );
}

#[test]
fn shrinking_the_stack_mid_recenter_still_dismisses() {
    let (mut s, log) = engine_with_log(6);
    let mut now = 0u64;
    show_and_settle(&mut s, 1, &mut now);

    s.dismiss(now);
    assert!(s.is_settling());

    // The re-center target (5) no longer exists; the settle retargets to
    // the new last entry and the armed expand still fires.
    s.set_count(3);
    run_until_idle(&mut s, &mut now);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
    assert_eq!(log.calls(), vec!["dismissed".to_string()]);
}

#[test]
fn set_count_clamps_scroll_state() {
    let mut s = engine(5);
    let mut now = 0u64;
    show_and_settle(&mut s, 4, &mut now);
    assert_eq!(s.scroll_pos(), 4.0);

    s.set_count(3);
    assert_eq!(s.count(), 3);
    assert_eq!(s.scroll_pos(), 2.0);

    s.set_count(0);
    assert_eq!(s.transition_state(), TransitionState::Hidden);
}

#[test]
fn hit_test_prefers_higher_indexes() {
    let l = layout();
    // Dead center belongs to the focused (highest overlapping) card.
    assert_eq!(hit_test(&l, 8, 7.0, l.center_x(), l.center_y()), Some(7));
    // Outside the vertical band nothing is hit.
    assert_eq!(hit_test(&l, 8, 7.0, l.center_x(), 1.0), None);
    // An empty stack never hits.
    assert_eq!(hit_test(&l, 0, 0.0, l.center_x(), l.center_y()), None);
}
