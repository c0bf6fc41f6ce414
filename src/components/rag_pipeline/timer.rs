use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use log::{info, warn};

/// Source of repeating callbacks.
pub trait Scheduler {
	type Handle;

	/// Returns `None` when the host refuses to register the callback.
	fn schedule_repeating(&self, period: Duration, tick: Box<dyn Fn()>) -> Option<Self::Handle>;

	fn cancel(&self, handle: Self::Handle);
}

/// `setInterval` on the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	type Handle = IntervalHandle;

	fn schedule_repeating(&self, period: Duration, tick: Box<dyn Fn()>) -> Option<IntervalHandle> {
		set_interval_with_handle(move || tick(), period)
			.map_err(|e| warn!("failed to register interval: {:?}", e))
			.ok()
	}

	fn cancel(&self, handle: IntervalHandle) {
		handle.clear();
	}
}

/// Owns a scheduled repeating callback. Stopping or dropping cancels it, and
/// a tick the host already queued becomes a no-op.
pub struct RepeatingTimer<S: Scheduler> {
	scheduler: S,
	handle: Option<S::Handle>,
	live: Arc<AtomicBool>,
}

impl<S: Scheduler> RepeatingTimer<S> {
	pub fn start(scheduler: S, period: Duration, on_tick: impl Fn() + 'static) -> Self {
		let live = Arc::new(AtomicBool::new(true));
		let guard = live.clone();
		let handle = scheduler.schedule_repeating(
			period,
			Box::new(move || {
				if guard.load(Ordering::Acquire) {
					on_tick();
				}
			}),
		);
		if handle.is_some() {
			info!("timer started ({} ms)", period.as_millis());
		}
		Self {
			scheduler,
			handle,
			live,
		}
	}

	pub fn is_running(&self) -> bool {
		self.handle.is_some()
	}

	pub fn stop(&mut self) {
		self.live.store(false, Ordering::Release);
		if let Some(handle) = self.handle.take() {
			self.scheduler.cancel(handle);
			info!("timer stopped");
		}
	}
}

impl<S: Scheduler> Drop for RepeatingTimer<S> {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
pub(super) mod manual {
	use std::cell::RefCell;
	use std::rc::Rc;
	use std::time::Duration;

	use super::Scheduler;

	type Slots = Rc<RefCell<Vec<(Rc<dyn Fn()>, bool)>>>;

	/// Fires ticks on demand. Cancelled callbacks are kept so a tick that was
	/// already queued when the timer stopped can still be replayed.
	#[derive(Clone, Default)]
	pub struct ManualScheduler {
		slots: Slots,
	}

	impl ManualScheduler {
		pub fn fire(&self) {
			let ticks: Vec<_> = self
				.slots
				.borrow()
				.iter()
				.filter(|(_, live)| *live)
				.map(|(f, _)| f.clone())
				.collect();
			for tick in ticks {
				tick();
			}
		}

		pub fn fire_stale(&self) {
			let ticks: Vec<_> = self.slots.borrow().iter().map(|(f, _)| f.clone()).collect();
			for tick in ticks {
				tick();
			}
		}

		pub fn live_count(&self) -> usize {
			self.slots.borrow().iter().filter(|(_, live)| *live).count()
		}

		pub fn scheduled(&self) -> usize {
			self.slots.borrow().len()
		}
	}

	impl Scheduler for ManualScheduler {
		type Handle = usize;

		fn schedule_repeating(&self, _: Duration, tick: Box<dyn Fn()>) -> Option<usize> {
			let mut slots = self.slots.borrow_mut();
			slots.push((Rc::from(tick), true));
			Some(slots.len() - 1)
		}

		fn cancel(&self, handle: usize) {
			self.slots.borrow_mut()[handle].1 = false;
		}
	}
}
