//! Shared class names so pages and components stay visually consistent.

pub const PANEL: &str = "panel";
pub const INPUT: &str = "field-input";
pub const LABEL: &str = "field-label";
pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";

/// Colour class for a profit delta.
pub fn delta_class(value: f64) -> &'static str {
    if !value.is_finite() || value.round() == 0.0 {
        "delta delta-flat"
    } else if value > 0.0 {
        "delta delta-up"
    } else {
        "delta delta-down"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_colour_follows_sign() {
        assert_eq!(delta_class(120.0), "delta delta-up");
        assert_eq!(delta_class(-3.0), "delta delta-down");
        assert_eq!(delta_class(0.3), "delta delta-flat");
    }
}
