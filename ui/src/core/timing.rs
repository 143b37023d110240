//! Timer utilities shared by the upload flow and the results view.

use std::future::Future;

/// Platform sleep: `gloo-timers` in the browser, `tokio` on native targets.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Something that can wait for a number of milliseconds. Lets flows that
/// schedule timers run under a plain executor in tests.
pub trait Sleeper {
    fn sleep(&self, ms: u64) -> impl Future<Output = ()>;
}

/// The real clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformSleeper;

impl Sleeper for PlatformSleeper {
    fn sleep(&self, ms: u64) -> impl Future<Output = ()> {
        sleep_ms(ms)
    }
}
