//! Shared helpers for TUI views

/// Shortens `name` to at most `width` characters, ending in "…" when cut
pub fn fit_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let kept: String = name.chars().take(width - 1).collect();
    format!("{}…", kept)
}

/// On/off label for a flag
pub fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
