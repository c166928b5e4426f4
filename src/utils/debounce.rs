use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for `resize` on the window and runs `callback` once the window has
/// been still for `delay_ms`.
///
/// Each new event drops the pending [`Timeout`], which cancels it. The
/// returned listener must be kept alive; dropping it unregisters the handler.
///
/// ```rust,ignore
/// use_effect_with((), move |_| {
///     let listener = create_debounced_resize_listener(move || slot.borrow_mut().redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(&gloo::utils::window(), "resize", move |_| {
        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    })
}
