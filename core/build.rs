use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[allow(dead_code)]
#[path = "src/config_check.rs"]
mod config_check;

use config_check::ConfigError;

#[derive(Deserialize)]
struct PageFile {
    title: String,
    question: String,
    question_named: Option<String>,
    accept_label: String,
    decline_label: String,
    sign_heading: String,
    sign_hint: String,
    submit_label: String,
    wheel_heading: String,
    spin_label: String,
    spinning_label: String,
    victory_heading: String,
    victory_message: String,
    #[serde(default)]
    behaviour: BehaviourEntry,
    audio: AudioEntry,
}

#[derive(Deserialize)]
struct BehaviourEntry {
    #[serde(default = "default_start_muted")]
    start_muted: bool,
    #[serde(default = "default_evasion_threshold")]
    evasion_threshold: u32,
}

impl Default for BehaviourEntry {
    fn default() -> Self {
        Self {
            start_muted: default_start_muted(),
            evasion_threshold: default_evasion_threshold(),
        }
    }
}

fn default_start_muted() -> bool {
    true
}

fn default_evasion_threshold() -> u32 {
    3
}

#[derive(Deserialize)]
struct AudioEntry {
    background: String,
    click: String,
    woosh: String,
    win: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PAGE_CONFIG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let config_path = resolve_config_path(workspace_root);
    println!("cargo:rerun-if-changed={}", config_path.display());

    let contents = fs::read_to_string(&config_path).unwrap_or_else(|err| {
        panic!(
            "failed to read page config at {}: {err}",
            config_path.display()
        )
    });

    let page: PageFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse page config at {}: {err}",
            config_path.display()
        )
    });

    if let Err(err) = validate_page(&page) {
        panic!("invalid page config at {}: {err}", config_path.display());
    }

    let question_named = page
        .question_named
        .clone()
        .unwrap_or_else(|| format!("{{name}}, {}", lowercase_first(&page.question)));

    let mut output = String::new();
    writeln!(&mut output, "pub const PAGE_CONFIG: PageConfig = PageConfig {{").unwrap();
    for (field, value) in [
        ("title", page.title.as_str()),
        ("question", page.question.as_str()),
        ("question_named", question_named.as_str()),
        ("accept_label", page.accept_label.as_str()),
        ("decline_label", page.decline_label.as_str()),
        ("sign_heading", page.sign_heading.as_str()),
        ("sign_hint", page.sign_hint.as_str()),
        ("submit_label", page.submit_label.as_str()),
        ("wheel_heading", page.wheel_heading.as_str()),
        ("spin_label", page.spin_label.as_str()),
        ("spinning_label", page.spinning_label.as_str()),
        ("victory_heading", page.victory_heading.as_str()),
        ("victory_message", page.victory_message.as_str()),
    ] {
        writeln!(&mut output, "    {field}: {},", rust_string(value)).unwrap();
    }
    writeln!(&mut output, "    start_muted: {},", page.behaviour.start_muted).unwrap();
    writeln!(
        &mut output,
        "    evasion_threshold: {},",
        page.behaviour.evasion_threshold
    )
    .unwrap();
    writeln!(&mut output, "    audio: AudioSources {{").unwrap();
    for (field, value) in [
        ("background", page.audio.background.as_str()),
        ("click", page.audio.click.as_str()),
        ("woosh", page.audio.woosh.as_str()),
        ("win", page.audio.win.as_str()),
    ] {
        writeln!(&mut output, "        {field}: {},", rust_string(value)).unwrap();
    }
    writeln!(&mut output, "    }},").unwrap();
    writeln!(&mut output, "}};").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("page_config.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_config_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PAGE_CONFIG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("page.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn lowercase_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn validate_page(page: &PageFile) -> Result<(), ConfigError> {
    for (field, value) in [
        ("title", &page.title),
        ("question", &page.question),
        ("accept_label", &page.accept_label),
        ("decline_label", &page.decline_label),
        ("sign_heading", &page.sign_heading),
        ("submit_label", &page.submit_label),
        ("wheel_heading", &page.wheel_heading),
        ("spin_label", &page.spin_label),
        ("spinning_label", &page.spinning_label),
        ("victory_heading", &page.victory_heading),
    ] {
        config_check::check_text(field, value)?;
    }
    if let Some(named) = page.question_named.as_deref() {
        config_check::check_named_question("question_named", named)?;
    }
    config_check::check_threshold(page.behaviour.evasion_threshold)?;
    for (field, src) in [
        ("background", &page.audio.background),
        ("click", &page.audio.click),
        ("woosh", &page.audio.woosh),
        ("win", &page.audio.win),
    ] {
        config_check::check_audio_src(field, src)?;
    }
    Ok(())
}
