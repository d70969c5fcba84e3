use dioxus::prelude::*;

/// Outline magnifying-glass icon (24x24, stroke uses `currentColor`).
#[component]
pub fn MagnifyingGlassIcon(#[props(into, default)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "m21 21-5.197-5.197m0 0A7.5 7.5 0 1 0 5.196 5.196a7.5 7.5 0 0 0 10.607 10.607Z",
            }
        }
    }
}
