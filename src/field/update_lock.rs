// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Flag shared by every entry point of a field that marks one logical
/// update as in flight. Derived writes performed while it is held must not
/// start another derivation.
#[derive(Debug, Clone, Default)]
pub struct UpdateLock {
    in_flight: Arc<AtomicBool>,
}

impl UpdateLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when an update is already in flight.
    pub fn try_acquire(&self) -> Option<UpdateGuard> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(UpdateGuard { in_flight: Arc::clone(&self.in_flight) })
    }

    pub fn is_held(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases the lock when dropped, unwinding included.
#[derive(Debug)]
#[must_use = "the update lock is released as soon as the guard is dropped"]
pub struct UpdateGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for UpdateGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::UpdateLock;

    #[test]
    fn second_acquire_is_refused() {
        let lock = UpdateLock::new();
        let guard = lock.try_acquire();
        assert!(guard.is_some());
        assert!(lock.is_held());
        assert!(lock.try_acquire().is_none());
        assert!(lock.clone().try_acquire().is_none());

        drop(guard);
        assert!(!lock.is_held());
        assert!(lock.try_acquire().is_some());
    }

    #[test]
    fn released_on_panic() {
        let lock = UpdateLock::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = lock.try_acquire().unwrap();
            panic!("update failed");
        }));
        assert!(result.is_err());
        assert!(!lock.is_held());
    }
}
