//! Integration tests for the colorizer's public API

use logtint::colorize::{colorize, colorize_with, Attribute, Color, Flag, NBSP};
use logtint::{AttributeSet, ColorizeOptions, Segment};

fn tokens(segment: &Segment) -> String {
    segment.attributes().to_string()
}

#[test]
fn text_without_escapes_is_single_unstyled_segment() {
    for input in ["", "plain", "a < b > c\r\nnext\tcol", "  indented"] {
        let segments: Vec<_> = colorize(input).collect();
        assert_eq!(segments.len(), 1, "input {:?}", input);
        assert!(segments[0].attributes().is_empty());
        assert_eq!(
            segments[0].text(),
            logtint::colorize::normalize_text(input, true)
        );
    }
}

#[test]
fn reset_wraps_to_empty_state() {
    let mut segments = colorize("\x1b[0m\x1b[1;4;31;42m\x1b[7mx\x1b[0m");
    let styled = segments.next().expect("styled segment");
    assert_eq!(tokens(&styled), "bright underscore fg-red bg-undefined reverse");
    assert!(segments.next().is_none());
    assert!(segments.current().is_empty());
}

#[test]
fn red_text_then_reset() {
    let segments: Vec<_> = colorize("\x1b[31mred\x1b[0m").collect();
    let expected: AttributeSet = [Attribute::Foreground(Color::Red)].into_iter().collect();
    assert_eq!(segments, vec![Segment::new("red", expected)]);
}

#[test]
fn one_sequence_with_two_params_is_one_state_change() {
    let segments: Vec<_> = colorize("\x1b[1;32mhi").collect();
    let expected: AttributeSet = [
        Attribute::Flag(Flag::Bright),
        Attribute::Foreground(Color::Green),
    ]
    .into_iter()
    .collect();
    assert_eq!(segments, vec![Segment::new("hi", expected)]);
}

#[test]
fn double_space_gets_marker_and_folds_back() {
    let segments: Vec<_> = colorize("a  b").collect();
    let text = segments[0].text();
    assert_eq!(text, format!("a {}b", NBSP));
    assert_eq!(text.replace(NBSP, " "), "a  b");
}

#[test]
fn erase_in_line_is_invisible() {
    let with: Vec<_> = colorize("\x1b[36mfoo\x1b[Kbar\x1b[0m").collect();
    let without: Vec<_> = colorize("\x1b[36mfoobar\x1b[0m").collect();
    assert_eq!(with, without);
    assert_eq!(with.len(), 1);
}

#[test]
fn missing_terminator_is_literal_text() {
    let segments: Vec<_> = colorize("abc\x1b[1").collect();
    assert_eq!(segments, vec![Segment::new("abc\x1b[1", AttributeSet::new())]);
}

#[test]
fn adversarial_input_never_panics() {
    let inputs = [
        "\x1b",
        "\x1b[",
        "\x1b[;;;;m",
        "\x1b[99999999999999999999m",
        "\x1b(",
        "\x1b[\x1b[1m",
        "\x1b[1;2;3;4;5;6;7;8;9;30;40;10;50m",
        "\u{1b}\u{1b}\u{1b}[K",
        "é\x1b(ñ\x1b[1mü",
    ];
    for input in inputs {
        let segments: Vec<_> = colorize(input).collect();
        assert!(!segments.is_empty(), "input {:?}", input);
    }
}

#[test]
fn all_flags_map_in_order() {
    let segments: Vec<_> = colorize("\x1b[1;2;3;4;5;6;7;8;9mx").collect();
    assert_eq!(
        tokens(&segments[0]),
        "bright dim italic underscore blink blinkRapid reverse hidden crossed"
    );
}

#[test]
fn foreground_palette_covers_thirty_to_thirty_nine() {
    let names = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "extended",
        "default",
    ];
    for (i, name) in names.iter().enumerate() {
        let input = format!("\x1b[{}mx", 30 + i);
        let segments: Vec<_> = colorize(&input).collect();
        assert_eq!(tokens(&segments[0]), format!("fg-{}", name));
    }
}

#[test]
fn background_keeps_legacy_offset_by_default() {
    let segments: Vec<_> = colorize("\x1b[44mx").collect();
    assert_eq!(segments[0].attributes().background(), Some(None));
    assert_eq!(tokens(&segments[0]), "bg-undefined");
}

#[test]
fn background_standard_offset_when_configured() {
    let options = ColorizeOptions {
        background_palette: logtint::colorize::BackgroundPalette::Standard,
        ..Default::default()
    };
    let segments: Vec<_> = colorize_with("\x1b[44mx", options).collect();
    assert_eq!(tokens(&segments[0]), "bg-blue");
}

#[test]
fn independent_parses_do_not_share_state() {
    let mut first = colorize("\x1b[31ma\x1b[1mb");
    let mut second = colorize("c");
    assert_eq!(first.next().map(|s| tokens(&s)), Some("fg-red".into()));
    assert_eq!(second.next().map(|s| tokens(&s)), Some(String::new()));
    drop(first);
    let third: Vec<_> = colorize("d").collect();
    assert!(third[0].attributes().is_empty());
}

#[test]
fn parallel_parses_agree_with_sequential() {
    let logs: Vec<String> = (0..16)
        .map(|i| format!("line {}\x1b[{}mcolored\x1b[0m\n", i, 30 + i % 10))
        .collect();
    let sequential: Vec<Vec<Segment>> = logs.iter().map(|l| colorize(l).collect()).collect();
    let parallel: Vec<Vec<Segment>> = std::thread::scope(|scope| {
        let handles: Vec<_> = logs
            .iter()
            .map(|l| scope.spawn(move || colorize(l).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}
