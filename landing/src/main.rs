// Shilog landing page entry point (Leptos 0.8, CSR)

use shilog_landing::{App, telemetry};

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();
    tracing::info!("mounting landing page");
    leptos::mount::mount_to_body(App);
}
