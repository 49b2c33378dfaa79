//! Top-level crash boundary
//!
//! Wraps every update and render cycle. A panic inside trips the boundary and
//! the console shows the fallback screen until the user picks `reload` or
//! `home`.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use tracing::error;

#[derive(Debug, Default)]
pub struct CrashBoundary {
    tripped: bool,
}

impl CrashBoundary {
    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    pub fn reset(&mut self) {
        self.tripped = false;
    }

    /// Runs an update cycle. `None` means it panicked.
    pub async fn guard<F: Future>(&mut self, cycle: F) -> Option<F::Output> {
        match AssertUnwindSafe(cycle).catch_unwind().await {
            Ok(output) => Some(output),
            Err(payload) => {
                self.trip(payload.as_ref());
                None
            }
        }
    }

    /// Runs a render cycle. `None` means it panicked.
    pub fn guard_sync<T>(&mut self, cycle: impl FnOnce() -> T) -> Option<T> {
        match panic::catch_unwind(AssertUnwindSafe(cycle)) {
            Ok(output) => Some(output),
            Err(payload) => {
                self.trip(payload.as_ref());
                None
            }
        }
    }

    fn trip(&mut self, payload: &(dyn Any + Send)) {
        error!("Recovered from crash: {}", panic_message(payload));
        self.tripped = true;
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_panic_trips() {
        let mut boundary = CrashBoundary::default();

        assert_eq!(boundary.guard_sync(|| 2 + 2), Some(4));
        assert!(!boundary.is_tripped());

        let crashed: Option<()> = boundary.guard_sync(|| panic!("bad render"));
        assert!(crashed.is_none());
        assert!(boundary.is_tripped());

        boundary.reset();
        assert!(!boundary.is_tripped());
    }

    #[tokio::test]
    async fn test_update_panic_trips() {
        let mut boundary = CrashBoundary::default();

        assert_eq!(boundary.guard(async { "ok" }).await, Some("ok"));

        let crashed = boundary
            .guard(async {
                let parsed: Option<u8> = None;
                parsed.unwrap()
            })
            .await;
        assert!(crashed.is_none());
        assert!(boundary.is_tripped());
    }

    #[test]
    fn test_panic_message_variants() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        let other: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
