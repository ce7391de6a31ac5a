use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Whether stderr, where pies are drawn, is a terminal
    pub is_tty: bool,
    pub supports_true_color: bool,
    pub supports_unicode: bool,
    pub width: u16,
    pub height: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stderr().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let supports_true_color = is_tty && !term_is_dumb && supports_true_color_env(&get_env);
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    // Size is only meaningful on a terminal
    let (width, height) = size.filter(|_| is_tty).unwrap_or((80, 24));
    TerminalCapabilities {
        is_tty,
        supports_true_color,
        supports_unicode,
        width,
        height,
    }
}

fn supports_true_color_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let colorterm = get_env("COLORTERM").unwrap_or_default().to_lowercase();
    colorterm.contains("truecolor") || colorterm.contains("24bit")
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            // The first variable that is set decides
            if !v.is_empty() && v != "c" && v != "posix" {
                return true;
            }
            if !v.is_empty() {
                return false;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}
