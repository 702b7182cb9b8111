use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Attaches a debounced window-resize listener.
///
/// Resize events fire continuously while the window is dragged; re-rendering
/// the timeseries chart on every one of them is wasteful. The callback only
/// runs once `delay_ms` elapses with no further resize event.
///
/// The returned `EventListener` must be kept alive for the component
/// lifetime; dropping it detaches the listener.
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(&window().unwrap(), "resize", move |_| {
        let cb = callback.clone();
        // Replacing the handle drops (and thereby cancels) the pending timeout.
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || cb()));
    })
}
