use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll, Waker};

#[derive(Debug)]
struct Inner {
    alive: AtomicBool,
    waiters: Mutex<Vec<Waker>>,
}

/// Mount-liveness token shared between a view and its pending fetch.
///
/// The view calls [`Liveness::unmount`] on teardown. Asynchronous
/// continuations check [`Liveness::is_alive`] before every state mutation
/// and drop their result once it reports false.
#[derive(Debug, Clone)]
pub struct Liveness {
    inner: Arc<Inner>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                alive: AtomicBool::new(true),
                waiters: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.load(Ordering::SeqCst)
    }

    /// Marks the owning view as torn down and wakes every [`Unmounted`]
    /// waiter. Idempotent.
    pub fn unmount(&self) {
        self.inner.alive.store(false, Ordering::SeqCst);
        let waiters = {
            let mut waiters = self
                .inner
                .waiters
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            mem::take(&mut *waiters)
        };
        for waker in waiters {
            waker.wake();
        }
    }

    /// Resolves once the view has been unmounted.
    pub fn unmounted(&self) -> Unmounted<'_> {
        Unmounted { liveness: self }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`Liveness::unmounted`].
#[derive(Debug)]
pub struct Unmounted<'a> {
    liveness: &'a Liveness,
}

impl Future for Unmounted<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let inner = &self.liveness.inner;
        if !inner.alive.load(Ordering::SeqCst) {
            return Poll::Ready(());
        }

        let mut waiters = inner.waiters.lock().unwrap_or_else(PoisonError::into_inner);
        // `unmount` drains the waiters under this lock after clearing the flag.
        if !inner.alive.load(Ordering::SeqCst) {
            return Poll::Ready(());
        }
        if !waiters.iter().any(|w| w.will_wake(cx.waker())) {
            waiters.push(cx.waker().clone());
        }
        Poll::Pending
    }
}
