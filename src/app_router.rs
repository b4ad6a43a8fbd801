use web_sys::UrlSearchParams;

use kokuhaku_core::page::normalize_recipient;
use kokuhaku_core::PAGE_CONFIG;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageOptions {
    pub(crate) recipient: Option<String>,
    pub(crate) start_muted: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            recipient: None,
            start_muted: PAGE_CONFIG.start_muted,
        }
    }
}

pub(crate) fn load_page_options() -> PageOptions {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    parse_page_options(&search)
}

pub(crate) fn parse_page_options(search: &str) -> PageOptions {
    let mut options = PageOptions::default();
    let search = search.trim();
    if search.is_empty() {
        return options;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return options;
    };
    if let Some(raw) = params.get("to").or_else(|| params.get("name")) {
        options.recipient = normalize_recipient(&raw);
    }
    if let Some(raw) = params.get("sound") {
        match parse_sound_flag(&raw) {
            Some(enabled) => options.start_muted = !enabled,
            None => gloo::console::warn!("page: ignoring sound flag", raw),
        }
    }
    options
}

fn parse_sound_flag(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if ["on", "1", "true", "yes"]
        .iter()
        .any(|flag| value.eq_ignore_ascii_case(flag))
    {
        Some(true)
    } else if ["off", "0", "false", "no"]
        .iter()
        .any(|flag| value.eq_ignore_ascii_case(flag))
    {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_query_uses_page_defaults() {
        assert_eq!(parse_page_options(""), PageOptions::default());
    }

    #[wasm_bindgen_test]
    fn recipient_and_sound_from_query() {
        let options = parse_page_options("?to=%20Alex%20&sound=ON");
        assert_eq!(options.recipient.as_deref(), Some("Alex"));
        assert!(!options.start_muted);

        let options = parse_page_options("?name=Robin&sound=off");
        assert_eq!(options.recipient.as_deref(), Some("Robin"));
        assert!(options.start_muted);
    }

    #[wasm_bindgen_test]
    fn unknown_sound_flag_is_ignored() {
        let options = parse_page_options("?sound=loud");
        assert_eq!(options.start_muted, PAGE_CONFIG.start_muted);
        assert_eq!(parse_sound_flag("maybe"), None);
    }
}
