use super::*;

fn rect(top: f64, bottom: f64) -> SectionRect {
    SectionRect { top, bottom }
}

// =============================================================
// Section table
// =============================================================

#[test]
fn section_ids_are_unique() {
    for (i, a) in Section::ALL.iter().enumerate() {
        for b in &Section::ALL[i + 1..] {
            assert_ne!(a.id(), b.id());
        }
    }
}

#[test]
fn hero_is_labelled_home() {
    assert_eq!(Section::Hero.label(), "Home");
    assert_eq!(Section::default(), Section::Hero);
}

// =============================================================
// resolve_active
// =============================================================

#[test]
fn resolve_active_picks_section_straddling_reference_line() {
    let rects = [
        (Section::About, rect(-600.0, -20.0)),
        (Section::Skills, rect(40.0, 700.0)),
        (Section::Education, rect(700.0, 1200.0)),
    ];
    assert_eq!(resolve_active(&rects, Section::Hero), Section::Skills);
}

#[test]
fn resolve_active_ignores_order_of_non_matching_sections() {
    let forward = [
        (Section::Hero, rect(-900.0, -300.0)),
        (Section::About, rect(50.0, 500.0)),
        (Section::Skills, rect(500.0, 900.0)),
    ];
    let shuffled = [
        (Section::Skills, rect(500.0, 900.0)),
        (Section::About, rect(50.0, 500.0)),
        (Section::Hero, rect(-900.0, -300.0)),
    ];
    assert_eq!(resolve_active(&forward, Section::Contact), Section::About);
    assert_eq!(resolve_active(&shuffled, Section::Contact), Section::About);
}

#[test]
fn resolve_active_first_declared_wins_on_overlap() {
    let rects = [(Section::Projects, rect(0.0, 100.0)), (Section::Contact, rect(100.0, 600.0))];
    assert_eq!(resolve_active(&rects, Section::Hero), Section::Projects);
}

#[test]
fn resolve_active_keeps_previous_when_nothing_straddles() {
    let rects = [(Section::Hero, rect(-800.0, 20.0)), (Section::About, rect(180.0, 900.0))];
    assert_eq!(resolve_active(&rects, Section::Experience), Section::Experience);
    assert_eq!(resolve_active(&[], Section::About), Section::About);
}

#[test]
fn resolve_active_boundaries_are_inclusive() {
    assert_eq!(resolve_active(&[(Section::About, rect(100.0, 400.0))], Section::Hero), Section::About);
    assert_eq!(resolve_active(&[(Section::About, rect(-300.0, 100.0))], Section::Hero), Section::About);
}

// =============================================================
// scroll_progress
// =============================================================

#[test]
fn scroll_progress_is_fraction_of_scrollable_range() {
    let metrics = ScrollMetrics { offset: 250.0, doc_height: 2000.0, viewport_height: 1000.0 };
    assert!((scroll_progress(metrics) - 25.0).abs() < f64::EPSILON);
}

#[test]
fn scroll_progress_is_zero_without_scrollable_range() {
    let flat = ScrollMetrics { offset: 0.0, doc_height: 800.0, viewport_height: 800.0 };
    let short = ScrollMetrics { offset: 10.0, doc_height: 600.0, viewport_height: 800.0 };
    assert!(scroll_progress(flat).abs() < f64::EPSILON);
    assert!(scroll_progress(short).abs() < f64::EPSILON);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    let past_end = ScrollMetrics { offset: 1500.0, doc_height: 2000.0, viewport_height: 1000.0 };
    let bounce = ScrollMetrics { offset: -40.0, doc_height: 2000.0, viewport_height: 1000.0 };
    assert!((scroll_progress(past_end) - 100.0).abs() < f64::EPSILON);
    assert!(scroll_progress(bounce).abs() < f64::EPSILON);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn target_offset_is_zero_for_hero() {
    assert!(target_offset(Section::Hero, 640.0).abs() < f64::EPSILON);
}

#[test]
fn target_offset_subtracts_header_height() {
    assert!((target_offset(Section::Contact, 4200.0) - 4120.0).abs() < f64::EPSILON);
}

#[test]
fn begin_navigation_closes_mobile_menu() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);

    let top = nav.begin_navigation(Section::Projects, 3000.0);
    assert!(!nav.menu_open);
    assert!((top - 2920.0).abs() < f64::EPSILON);
}

#[test]
fn apply_scroll_updates_flag_active_and_progress() {
    let mut nav = NavState::default();
    let metrics = ScrollMetrics { offset: 900.0, doc_height: 3800.0, viewport_height: 800.0 };
    nav.apply_scroll(metrics, &[(Section::Hero, rect(-900.0, -100.0)), (Section::About, rect(-100.0, 600.0))]);

    assert!(nav.scrolled);
    assert!(nav.is_active(Section::About));
    assert!((nav.progress - 30.0).abs() < 1e-9);
}

#[test]
fn apply_scroll_below_threshold_is_not_scrolled() {
    let mut nav = NavState { scrolled: true, ..NavState::default() };
    nav.apply_scroll(ScrollMetrics { offset: 50.0, doc_height: 3000.0, viewport_height: 1000.0 }, &[]);
    assert!(!nav.scrolled);
    assert_eq!(nav.active, Section::Hero);
}
