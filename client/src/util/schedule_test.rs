use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn new_scope_is_live() {
    assert!(!TaskScope::new().is_cancelled());
}

#[test]
fn guarded_task_runs_while_live() {
    let scope = TaskScope::new();
    let hits = Rc::new(Cell::new(0));
    let task = {
        let hits = Rc::clone(&hits);
        scope.guard(move || hits.set(hits.get() + 1))
    };
    assert!(task());
    assert_eq!(hits.get(), 1);
}

#[test]
fn guarded_task_is_skipped_after_cancel() {
    let scope = TaskScope::new();
    let hits = Rc::new(Cell::new(0));
    let task = {
        let hits = Rc::clone(&hits);
        scope.guard(move || hits.set(hits.get() + 1))
    };
    scope.cancel();
    assert!(!task());
    assert_eq!(hits.get(), 0);
}

#[test]
fn cancel_is_shared_across_clones() {
    let scope = TaskScope::new();
    let clone = scope.clone();
    let task = clone.guard(|| {});
    scope.cancel();
    assert!(clone.is_cancelled());
    assert!(!task());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn schedule_without_browser_never_runs() {
    let scope = TaskScope::new();
    let hits = Rc::new(Cell::new(0));
    {
        let hits = Rc::clone(&hits);
        scope.schedule(0, move || hits.set(1));
    }
    assert_eq!(hits.get(), 0);
}
