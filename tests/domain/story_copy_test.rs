use adoptify::domain::story_copy::{
    DEFAULT_CAPTION, DEFAULT_HASHTAGS, DEFAULT_HOOK, extract_hashtags, extract_hooks,
};
use adoptify::domain::{CaptionDeck, StoryCopy};

const SCRIPT: &str = "\
- Meet Luna, the gentle giant -

• She loves long naps in the sun
HOOK (0-3s): Wait: meet Luna
Heart moment: she greets every volunteer
Adopt her today #adoptdontshop #luna #bigdog";

#[test]
fn given_script_with_bullets_when_extracting_captions_then_first_three_lines_are_stripped() {
    let deck = CaptionDeck::from_script(SCRIPT);

    assert_eq!(
        deck.captions(),
        &[
            "Meet Luna, the gentle giant".to_string(),
            "She loves long naps in the sun".to_string(),
            "HOOK (0-3s): Wait: meet Luna".to_string(),
        ]
    );
}

#[test]
fn given_blank_script_when_extracting_captions_then_default_caption_is_used() {
    let deck = CaptionDeck::from_script("  \n\n - \n");

    assert_eq!(deck.captions(), &[DEFAULT_CAPTION.to_string()]);
}

#[test]
fn given_single_line_script_when_extracting_captions_then_deck_is_not_empty() {
    let deck = CaptionDeck::from_script("[mock:a] Meet Rex. Hook: 'hi'. Story beats, CTA, hashtags...");

    assert_eq!(deck.len(), 1);
    assert!(!deck.is_empty());
}

#[test]
fn given_blank_explicit_captions_when_building_deck_then_single_default_slide() {
    let deck = CaptionDeck::from_captions(vec!["   ".to_string(), String::new()]);

    assert_eq!(deck.into_inner(), vec![DEFAULT_CAPTION.to_string()]);
}

#[test]
fn given_hook_line_when_extracting_hooks_then_text_after_last_colon_is_kept() {
    let hooks = extract_hooks("HOOK (0-3s): Wait: meet Luna");

    assert_eq!(hooks, vec!["meet Luna".to_string()]);
}

#[test]
fn given_no_hook_line_when_extracting_hooks_then_default_hook_is_returned() {
    assert_eq!(extract_hooks("just a story"), vec![DEFAULT_HOOK.to_string()]);
}

#[test]
fn given_hook_line_ending_in_colon_when_extracting_hooks_then_empty_hook_is_skipped() {
    let hooks = extract_hooks("Hook:\nhook: second chance");

    assert_eq!(hooks, vec!["second chance".to_string()]);
}

#[test]
fn given_only_empty_hook_lines_when_extracting_hooks_then_default_hook_is_returned() {
    let hooks = extract_hooks("Hook:\nHOOK (0-3s):   ");

    assert_eq!(hooks, vec![DEFAULT_HOOK.to_string()]);
}

#[test]
fn given_three_tags_when_extracting_hashtags_then_padded_with_unused_defaults_and_capped() {
    let tags = extract_hashtags(SCRIPT);

    assert_eq!(
        tags,
        vec!["#adoptdontshop", "#luna", "#bigdog", "#adoptify", "#petrescue", "#shelterlove"]
    );
}

#[test]
fn given_repeated_single_tag_when_extracting_hashtags_then_deduplicated_before_padding() {
    let tags = extract_hashtags("#luna #luna #luna #luna");

    assert_eq!(tags.len(), 5);
    assert_eq!(tags[0], "#luna");
    assert_eq!(&tags[1..], &DEFAULT_HASHTAGS.map(String::from));
}

#[test]
fn given_many_tags_when_extracting_hashtags_then_first_six_in_order() {
    let tags = extract_hashtags("#a #b #c #d #e #f #g #h");

    assert_eq!(tags, vec!["#a", "#b", "#c", "#d", "#e", "#f"]);
}

#[test]
fn given_any_script_when_extracting_hashtags_then_between_four_and_six_unique() {
    let scripts = [
        "",
        "#one",
        "#adoptify #adoptify",
        "#a #b #c #d",
        "#adoptify #petrescue #x",
        "#1 #2 #3 #4 #5 #6 #7 #1 #2",
    ];

    for script in scripts {
        let tags = extract_hashtags(script);
        assert!((4..=6).contains(&tags.len()), "{script:?} -> {tags:?}");

        let mut unique = tags.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), tags.len(), "{script:?} -> {tags:?}");
    }
}

#[test]
fn given_same_script_when_extracting_twice_then_results_are_identical() {
    let first = StoryCopy::extract(SCRIPT);
    let second = StoryCopy::extract(SCRIPT);

    assert_eq!(first, second);
}
