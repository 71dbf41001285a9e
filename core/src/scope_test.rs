use super::*;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use std::cell::RefCell;

#[test]
fn ticket_should_be_current_until_invalidated() {
    let scope = ViewScope::new();
    let ticket = scope.ticket();
    assert!(ticket.is_current());

    scope.invalidate();
    assert!(!ticket.is_current(), "ticket should be stale");
    assert!(scope.ticket().is_current(), "new tickets should be current");
}

#[test]
fn stale_result_should_not_be_applied() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    // view a starts a fetch, then the user navigates to view b
    let view_a = ViewScope::new();
    let view_b = ViewScope::new();
    let state_a = Rc::new(RefCell::new(Vec::<&str>::new()));
    let state_b = Rc::new(RefCell::new(Vec::<&str>::new()));

    let (resolve, response) = oneshot::channel::<&str>();
    {
        let ticket = view_a.ticket();
        let state_a = state_a.clone();
        spawner
            .spawn_local(async move {
                let Ok(data) = response.await else {
                    return;
                };

                ticket.apply(|| state_a.borrow_mut().push(data));
            })
            .expect("could not spawn fetch");
    }

    pool.run_until_stalled();
    view_a.invalidate();
    let ticket_b = view_b.ticket();

    resolve.send("news").expect("could not resolve fetch");
    pool.run_until_stalled();

    assert!(state_a.borrow().is_empty(), "discarded view should not be updated");
    assert!(state_b.borrow().is_empty(), "other view should not be updated");
    assert!(ticket_b.is_current(), "other view should be unaffected");
}

#[test]
fn apply_should_run_when_current() {
    let scope = ViewScope::new();
    let mut applied = false;
    assert!(scope.ticket().apply(|| applied = true));
    assert!(applied);
}
