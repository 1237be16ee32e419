use termcolor::ColorChoice;

/// Environment variable selecting `always`, `never` or `auto` coloring.
pub const COLOR_ENV: &str = "TCALC_COLOR";

pub fn color_choice(value: Option<&str>, is_terminal: bool) -> ColorChoice {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("always") => ColorChoice::Always,
        Some(v) if v.eq_ignore_ascii_case("never") => ColorChoice::Never,
        _ if is_terminal => ColorChoice::Auto,
        _ => ColorChoice::Never,
    }
}
