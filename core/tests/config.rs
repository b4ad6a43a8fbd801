use kokuhaku_core::config_check::{
    check_audio_src, check_named_question, check_text, check_threshold, EVASION_THRESHOLD_MAX,
};
use kokuhaku_core::{ConfigError, PAGE_CONFIG};

#[test]
fn bundled_page_passes_checks() {
    check_text("title", PAGE_CONFIG.title).expect("title");
    check_named_question("question_named", PAGE_CONFIG.question_named).expect("named question");
    check_threshold(PAGE_CONFIG.evasion_threshold).expect("threshold");
    check_audio_src("win", PAGE_CONFIG.audio.win).expect("win src");
}

#[test]
fn blank_copy_is_rejected_with_field_name() {
    let err = check_text("accept_label", "   ").unwrap_err();
    assert_eq!(
        err,
        ConfigError::EmptyField {
            field: "accept_label".to_string()
        }
    );
    assert_eq!(err.to_string(), "field 'accept_label' cannot be empty");
}

#[test]
fn named_question_needs_placeholder() {
    assert_eq!(
        check_named_question("question_named", "Will you?"),
        Err(ConfigError::MissingPlaceholder {
            field: "question_named".to_string()
        })
    );
    assert!(check_named_question("question_named", "{name}, will you?").is_ok());
}

#[test]
fn threshold_bounds() {
    assert!(check_threshold(1).is_ok());
    assert!(check_threshold(EVASION_THRESHOLD_MAX).is_ok());
    let err = check_threshold(0).unwrap_err();
    assert_eq!(err.to_string(), "evasion_threshold 0 must be within 1..=10");
    assert!(matches!(
        check_threshold(EVASION_THRESHOLD_MAX + 1),
        Err(ConfigError::ThresholdOutOfRange { .. })
    ));
}

#[test]
fn audio_sources_stay_local() {
    assert!(check_audio_src("click", "assets/audio/click.mp3").is_ok());
    assert_eq!(
        check_audio_src("click", "https://cdn.example/click.mp3"),
        Err(ConfigError::RemoteAudio {
            field: "click".to_string()
        })
    );
    assert_eq!(
        check_audio_src("win", "data:audio/mpeg;base64,AAAA"),
        Err(ConfigError::DataUrlAudio {
            field: "win".to_string()
        })
    );
    assert_eq!(
        check_audio_src("woosh", ""),
        Err(ConfigError::EmptyField {
            field: "audio.woosh".to_string()
        })
    );
    let err: Box<dyn std::error::Error> = Box::new(ConfigError::RemoteAudio {
        field: "background".into(),
    });
    assert_eq!(err.to_string(), "audio 'background' src cannot be a URL");
}
