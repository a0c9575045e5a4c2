//! When page setup runs, judged from `document.readyState`.

/// Class put on `<body>` once the window has loaded.
pub const LOADED_CLASS: &str = "loaded";

/// Whether setup has to wait for `DOMContentLoaded`.
pub fn needs_dom_ready(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Whether the window `load` event has already fired.
pub fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}
