//! Integration tests for rendering fixture logs

use super::helpers::{fixture_text, temp_fixture};
use logtint::source::LogSource;
use logtint::{render_str, ColorizeOptions, FileSource, Format};

#[test]
fn build_log_renders_as_html() {
    let html = render_str(
        &fixture_text("build.log"),
        Format::Html,
        ColorizeOptions::default(),
    );
    assert_eq!(
        html,
        "checking for gcc... <span class=\"fg-green\">yes</span><br>\
         <span class=\"bright fg-red\">error:</span> &nbsp; &nbsp; &nbsp; &nbsp;missing &lt;stdio.h&gt;<br>\
         <span class=\"fg-yellow\">warning:</span> &nbsp;unused variable<br>\
         <span class=\"bright fg-blue\">==&gt;</span> done<br>"
    );
}

#[test]
fn build_log_renders_as_plain_text() {
    let plain = render_str(
        &fixture_text("build.log"),
        Format::Plain,
        ColorizeOptions::default(),
    );
    assert_eq!(
        plain,
        "checking for gcc... yes\n\
         error:        missing <stdio.h>\n\
         warning:  unused variable\n\
         ==> done\n"
    );
}

#[test]
fn truncated_log_keeps_partial_escape() {
    let (_dir, path) = temp_fixture("truncated.log");
    let text = FileSource::new(&path).read_log().expect("fixture readable");
    let json = render_str(&text, Format::Json, ColorizeOptions::default());
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(
        value,
        serde_json::json!([
            {"text": "compiling ", "attributes": []},
            {"text": "foo.c", "attributes": ["bright"]},
            {"text": "\n", "attributes": []},
            {"text": "Killed\u{1b}[1", "attributes": ["fg-red"]},
        ])
    );
}

#[test]
fn truncated_log_renders_for_terminal() {
    let ansi = render_str(
        &fixture_text("truncated.log"),
        Format::Ansi,
        ColorizeOptions::default(),
    );
    assert_eq!(
        ansi,
        "compiling \x1b[1mfoo.c\x1b[0m\n\x1b[31mKilled^[[1\x1b[0m"
    );
}
