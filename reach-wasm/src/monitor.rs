//! Event-driven connectivity monitor over `navigator.onLine`.

use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::mpsc::UnboundedSender;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Window;

use reach_traits::error::{MonitorError, Result};
use reach_traits::monitor::{BoxedStream, ChannelStream, ConnectivityMonitor};
use reach_traits::status::{ReachabilityStatus, TransportType};

use crate::transport::transport_from_user_agent;

/// Delay between an `online`/`offline` event and the follow-up read.
/// The events can fire while the browser's own flag is still changing.
const SETTLE_MS: u32 = 50;

/// Browser-backed monitor bound to the current window.
///
/// Each subscription installs one `online` and one `offline` listener and
/// removes both when the stream is dropped. Values are always re-read from
/// `navigator` after the settle delay, never taken from the event, so a
/// spurious event simply re-emits the current state and gets suppressed by
/// the stream's duplicate filter.
pub struct BrowserNetworkMonitor {
    window: Window,
}

impl BrowserNetworkMonitor {
    /// Creates a monitor bound to the current browser window.
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| MonitorError::NotAvailable("window".to_string()))?;
        Ok(Self { window })
    }

    fn read<T>(&self, derive: &dyn Fn(bool, &str) -> T) -> T {
        read_from_window(&self.window, derive)
    }

    fn subscribe<T, F>(&self, derive: F) -> BoxedStream<T>
    where
        T: Clone + PartialEq + 'static,
        F: Fn(bool, &str) -> T + 'static,
    {
        let (tx, mut stream) = ChannelStream::channel();
        let derive = Rc::new(derive);

        // First value: the state current at subscribe time.
        let _ = tx.unbounded_send(self.read(derive.as_ref()));

        let online = event_callback(self.window.clone(), tx.clone(), Rc::clone(&derive));
        let offline = event_callback(self.window.clone(), tx, derive);
        for (event, callback) in [("online", &online), ("offline", &offline)] {
            if let Err(err) = self
                .window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!(?err, event, "failed to install connectivity listener");
            }
        }

        stream.attach_guard(Box::new(ListenerGuard {
            window: self.window.clone(),
            online,
            offline,
        }));
        Box::new(stream)
    }
}

#[async_trait(?Send)]
impl ConnectivityMonitor for BrowserNetworkMonitor {
    async fn current_status(&self) -> ReachabilityStatus {
        ReachabilityStatus::from_reachable(self.window.navigator().on_line())
    }

    async fn current_transport(&self) -> TransportType {
        self.read(&transport_from_user_agent)
    }

    async fn status_changes(&self) -> BoxedStream<ReachabilityStatus> {
        self.subscribe(|online, _| ReachabilityStatus::from_reachable(online))
    }

    async fn transport_changes(&self) -> BoxedStream<TransportType> {
        self.subscribe(transport_from_user_agent)
    }
}

fn read_from_window<T>(window: &Window, derive: &dyn Fn(bool, &str) -> T) -> T {
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    derive(navigator.on_line(), &user_agent)
}

fn event_callback<T, F>(
    window: Window,
    tx: UnboundedSender<T>,
    derive: Rc<F>,
) -> Closure<dyn FnMut()>
where
    T: 'static,
    F: Fn(bool, &str) -> T + 'static,
{
    Closure::new(move || {
        let window = window.clone();
        let tx = tx.clone();
        let derive = Rc::clone(&derive);
        spawn_local(async move {
            TimeoutFuture::new(SETTLE_MS).await;
            let _ = tx.unbounded_send(read_from_window(&window, derive.as_ref()));
        });
    })
}

/// Removes both listeners when the subscription ends.
struct ListenerGuard {
    window: Window,
    online: Closure<dyn FnMut()>,
    offline: Closure<dyn FnMut()>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for (event, callback) in [("online", &self.online), ("offline", &self.offline)] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }
}
