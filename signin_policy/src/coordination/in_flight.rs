use std::sync::atomic::{AtomicBool, Ordering};

/// Busy flag allowing one sign-in action at a time
#[derive(Debug, Default)]
pub(super) struct InFlightLatch {
    busy: AtomicBool,
}

/// Holds the latch; dropping it clears the busy flag on every exit path
#[derive(Debug)]
pub(super) struct InFlightGuard<'a> {
    latch: &'a InFlightLatch,
}

impl InFlightLatch {
    pub(super) fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { latch: self })
    }

    pub(super) fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.latch.busy.store(false, Ordering::Release);
    }
}
