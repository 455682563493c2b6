//! Standalone HTML page for a unified diff.

const STYLE: &str = "body{background:#272822;color:#f8f8f2;font-family:monospace}\
pre{white-space:pre-wrap}\
.add{color:#a6e22e}.del{color:#f92672}.hunk{color:#66d9ef}.meta{color:#e6db74;font-weight:bold}";

/// Render `diff` as a self-contained HTML document.
pub fn render_html(title: &str, diff: &str) -> String {
    let mut body = String::new();
    for line in diff.lines() {
        let class = if line.starts_with("+++") || line.starts_with("---") {
            Some("meta")
        } else if line.starts_with("@@") {
            Some("hunk")
        } else if line.starts_with('+') {
            Some("add")
        } else if line.starts_with('-') {
            Some("del")
        } else {
            None
        };
        match class {
            Some(class) => {
                body.push_str(&format!("<span class=\"{class}\">{}</span>\n", escape(line)))
            }
            None => {
                body.push_str(&escape(line));
                body.push('\n');
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n<pre>\n{body}</pre>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_html;

    #[test]
    fn classifies_and_escapes_lines() {
        let html = render_html(
            "site-a <diff>",
            "--- expected\n+++ actual\n@@ -1 +1 @@\n-banner <x>\n+hostname r1\n ## Section: A\n",
        );

        assert!(html.contains("<title>site-a &lt;diff&gt;</title>"));
        assert!(html.contains("<span class=\"del\">-banner &lt;x&gt;</span>"));
        assert!(html.contains("<span class=\"add\">+hostname r1</span>"));
        assert!(html.contains("<span class=\"hunk\">@@ -1 +1 @@</span>"));
        assert!(html.contains("\n ## Section: A\n"));
    }
}
