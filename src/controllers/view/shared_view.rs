use crate::core::data::view::View;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to the session's single [`View`], shared by the main loop and the recording worker.
///
/// Every [`update`](Self::update) is one critical section. Readers work
/// from a [`snapshot`](Self::snapshot), so a render never observes a
/// half-applied transition, but consecutive snapshots may interleave with
/// another thread's updates.
#[derive(Debug, Clone, Default)]
pub struct SharedView {
    inner: Arc<Mutex<View>>,
}

impl SharedView {
    #[must_use]
    pub fn new(view: View) -> Self {
        Self {
            inner: Arc::new(Mutex::new(view)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> View {
        *self.lock()
    }

    /// Applies `f` atomically and returns its result.
    pub fn update<R>(&self, f: impl FnOnce(&mut View) -> R) -> R {
        let mut view = self.lock();
        f(&mut *view)
    }

    // View is plain data, so a panic mid-update cannot leave it unusable.
    fn lock(&self) -> MutexGuard<'_, View> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_same_view() {
        let shared = SharedView::default();
        let other = shared.clone();

        other.update(|view| view.toggle_julia());

        assert!(shared.snapshot().julia_mode);
    }

    #[test]
    fn update_returns_closure_result() {
        let shared = SharedView::new(View::default());

        let previous = shared.update(|view| {
            let previous = view.max_iter;
            view.set_max_iter(500);
            previous
        });

        assert_eq!(previous, 200);
        assert_eq!(shared.snapshot().max_iter, 500);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let shared = SharedView::new(View {
            max_iter: 20,
            ..View::default()
        });

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.update(|view| view.set_max_iter(view.max_iter + 1));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.snapshot().max_iter, 420);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let shared = SharedView::default();
        let poisoner = shared.clone();

        let _ = thread::spawn(move || {
            let _: () = poisoner.update(|_| panic!("poison"));
        })
        .join();

        assert_eq!(shared.snapshot(), View::default());
    }
}
