//! Page copy and asset paths, generated at build time from `page.toml`.

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const RECIPIENT_MAX_CHARS: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioSources {
    pub background: &'static str,
    pub click: &'static str,
    pub woosh: &'static str,
    pub win: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub title: &'static str,
    pub question: &'static str,
    pub question_named: &'static str,
    pub accept_label: &'static str,
    pub decline_label: &'static str,
    pub sign_heading: &'static str,
    pub sign_hint: &'static str,
    pub submit_label: &'static str,
    pub wheel_heading: &'static str,
    pub spin_label: &'static str,
    pub spinning_label: &'static str,
    pub victory_heading: &'static str,
    pub victory_message: &'static str,
    pub start_muted: bool,
    pub evasion_threshold: u32,
    pub audio: AudioSources,
}

include!(concat!(env!("OUT_DIR"), "/page_config.rs"));

impl PageConfig {
    pub fn question_for(&self, recipient: Option<&str>) -> String {
        match recipient.and_then(normalize_recipient) {
            Some(name) => self.question_named.replace(NAME_PLACEHOLDER, &name),
            None => self.question.to_string(),
        }
    }
}

/// Trims and bounds a recipient name; blank names fall back to the plain question.
pub fn normalize_recipient(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let name: String = trimmed
        .chars()
        .filter(|ch| !ch.is_control())
        .take(RECIPIENT_MAX_CHARS)
        .collect();
    let name = name.trim_end().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
