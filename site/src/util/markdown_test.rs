use super::*;

#[test]
fn render_produces_headings_and_code_blocks() {
    let out = render("## Install\n\n```sh\ncargo add okami-ui\n```\n");
    assert!(out.contains("<h2>Install</h2>"));
    assert!(out.contains("<code class=\"language-sh\">cargo add okami-ui\n</code>"));
}

#[test]
fn render_strips_raw_html() {
    let out = render("hello <script>alert(1)</script> world");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hello"));
}

#[test]
fn render_supports_tables() {
    let out = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.contains("<table>"));
}
