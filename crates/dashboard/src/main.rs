use dashboard::components::App as DashboardApp;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/dashboard.css");

#[cfg(not(any(feature = "web", feature = "desktop")))]
compile_error!("enable the `web` or `desktop` feature to pick a platform");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Acme Dashboard")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 800.0))
                .with_min_inner_size(LogicalSize::new(640.0, 480.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! is unreliable on desktop, inline the stylesheet there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/dashboard.css")} }
        }

        DashboardApp {}
    }
}
