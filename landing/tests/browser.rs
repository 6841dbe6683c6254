//! In-browser checks: `wasm-pack test --headless --firefox landing`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Reflect;
use shilog_landing::App;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document")
}

/// Mount a fresh copy of the page into its own host element.
fn mount_app() -> HtmlElement {
    let doc = document();
    let host: HtmlElement = doc.create_element("div").unwrap().unchecked_into();
    doc.body().unwrap().append_child(&host).unwrap();
    leptos::mount::mount_to(host.clone(), App).forget();
    host
}

/// Let scheduled reactive updates flush.
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn menu_button_toggles_mobile_links() {
    let host = mount_app();
    assert!(host.query_selector(".mobile-menu").unwrap().is_none());

    let button: HtmlElement = host
        .query_selector(".menu-toggle")
        .unwrap()
        .expect("toggle button")
        .unchecked_into();

    button.click();
    next_tick().await;
    let menu = host
        .query_selector(".mobile-menu")
        .unwrap()
        .expect("menu open after first click");
    assert_eq!(menu.query_selector_all("a").unwrap().length(), 5);
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));

    button.click();
    next_tick().await;
    assert!(host.query_selector(".mobile-menu").unwrap().is_none());

    host.remove();
}

/// Replaces `window.fetch` and `XMLHttpRequest.prototype.open` with stubs
/// that count calls, and puts the originals back on drop.
struct NetworkSpy {
    calls: Rc<Cell<u32>>,
    fetch: JsValue,
    xhr_proto: JsValue,
    xhr_open: JsValue,
    _stub: Closure<dyn FnMut() -> JsValue>,
}

impl NetworkSpy {
    fn install() -> Self {
        let window: JsValue = web_sys::window().unwrap().into();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let stub = Closure::<dyn FnMut() -> JsValue>::new(move || {
            counter.set(counter.get() + 1);
            JsValue::UNDEFINED
        });

        let fetch = Reflect::get(&window, &"fetch".into()).unwrap();
        let xhr = Reflect::get(&window, &"XMLHttpRequest".into()).unwrap();
        let xhr_proto = Reflect::get(&xhr, &"prototype".into()).unwrap();
        let xhr_open = Reflect::get(&xhr_proto, &"open".into()).unwrap();

        Reflect::set(&window, &"fetch".into(), stub.as_ref()).unwrap();
        Reflect::set(&xhr_proto, &"open".into(), stub.as_ref()).unwrap();

        Self {
            calls,
            fetch,
            xhr_proto,
            xhr_open,
            _stub: stub,
        }
    }

    fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl Drop for NetworkSpy {
    fn drop(&mut self) {
        let window: JsValue = web_sys::window().unwrap().into();
        let _ = Reflect::set(&window, &"fetch".into(), &self.fetch);
        let _ = Reflect::set(&self.xhr_proto, &"open".into(), &self.xhr_open);
    }
}

fn set_input(host: &HtmlElement, selector: &str, value: &str) {
    let input: HtmlInputElement = host
        .query_selector(selector)
        .unwrap()
        .expect("input field")
        .unchecked_into();
    input.set_value(value);
}

#[wasm_bindgen_test]
async fn contact_submit_sends_nothing_and_stays_on_page() {
    let host = mount_app();
    next_tick().await;
    let before = web_sys::window().unwrap().location().href().unwrap();
    let spy = NetworkSpy::install();

    set_input(&host, "#contact-name", "Ada");
    set_input(&host, "#contact-email", "ada@example.com");
    let message: HtmlTextAreaElement = host
        .query_selector("#contact-message")
        .unwrap()
        .expect("message field")
        .unchecked_into();
    message.set_value("Hello");

    let form: HtmlFormElement = host
        .query_selector(".contact-form")
        .unwrap()
        .expect("form")
        .unchecked_into();
    assert!(form.check_validity(), "filled form should pass native validation");
    form.request_submit().unwrap();
    next_tick().await;

    assert_eq!(spy.calls(), 0, "contact submit reached the network");
    assert_eq!(web_sys::window().unwrap().location().href().unwrap(), before);

    drop(spy);
    host.remove();
}
