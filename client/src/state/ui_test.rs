use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let a = state.success("saved");
    let b = state.error("failed");
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    let remaining: Vec<u64> = state.toasts().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![b]);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.success("one");
    state.dismiss(a);
    let b = state.success("two");
    assert!(b > a);
}
