use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**Respirez**\n\n- lentement\n- profondément");
    assert!(html.contains("<strong>Respirez</strong>"));
    assert!(html.contains("<li>lentement</li>"));
}

#[test]
fn drops_raw_html_blocks() {
    let html = render_markdown_html("<script>alert(1)</script>\n\nBonjour");
    assert!(!html.contains("<script>"));
    assert!(html.contains("Bonjour"));
}

#[test]
fn drops_inline_html() {
    let html = render_markdown_html("Salut <img src=x onerror=alert(1)> toi");
    assert!(!html.contains("<img"));
    assert!(html.contains("Salut"));
}
