//! Landing page template.
//!
//! The page greets the caller with their IP and runs a small script that
//! opens a WebSocket to `/ws`, sends a `tick` every two seconds and counts
//! the echoed replies.

/// Interval between client heartbeats, in milliseconds.
pub const HEARTBEAT_INTERVAL_MS: u64 = 2000;

const HEAD: &str = r#"
<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
</head>
<body>
<h1>Welcome</h1>
"#;

const SCRIPT: &str = r#"<p id="ws" style="display: none;">Websocket connection established</p>
<p id="ws-counter" style="display: none;"></p>
<script>
let counter = 0;
let ws = new WebSocket("ws://" + location.host + "/ws");

ws.onmessage = function(e) {
    counter++;
    document.getElementById("ws").style.display = "block";
    document.getElementById("ws-counter").style.display = "block";
    document.getElementById("ws-counter").innerHTML = "Websocket message count: " + counter;
};

ws.onopen = function(e) {
    console.log("ws connection open");
    ws.send("connection established");
};

ws.onerror = function(error) {
    console.log("error", error.message);
};

setInterval(function() {
    ws.send("tick");
}, "#;

const TAIL: &str = r#");
</script>
</body>
</html>
"#;

/// Landing page rendered for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    /// Resolved caller IP, unescaped.
    pub client_ip: String,
}

impl HomePage {
    /// Creates a page for the given IP.
    #[must_use]
    pub fn new(client_ip: impl Into<String>) -> Self {
        Self {
            client_ip: client_ip.into(),
        }
    }

    /// Renders the full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(HEAD.len() + SCRIPT.len() + TAIL.len() + 64);
        html.push_str(HEAD);
        html.push_str("<h2>Your IP is: ");
        html.push_str(&escape_html(&self.client_ip));
        html.push_str("</h2>\n");
        html.push_str(SCRIPT);
        html.push_str(&HEARTBEAT_INTERVAL_MS.to_string());
        html.push_str(TAIL);
        html
    }
}

/// Escapes `s` for HTML text context.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '+' => out.push_str("&#43;"),
            '\0' => out.push('\u{FFFD}'),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ip_in_heading() {
        let html = HomePage::new("1.2.3.4").render();
        assert!(html.contains("<h2>Your IP is: 1.2.3.4</h2>"));
        assert!(html.starts_with("\n<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn script_targets_ws_endpoint_with_heartbeat() {
        let html = HomePage::new("::1").render();
        assert!(html.contains(r#"new WebSocket("ws://" + location.host + "/ws")"#));
        assert!(html.contains(r#"ws.send("tick");"#));
        assert!(html.contains("}, 2000);"));
        assert!(html.contains(r#"ws.send("connection established");"#));
    }

    #[test]
    fn ip_is_escaped() {
        let html = HomePage::new("<script>alert('x')</script>").render();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn escape_covers_text_context_specials() {
        assert_eq!(escape_html(r#"a&b"c+d"#), "a&amp;b&#34;c&#43;d");
        assert_eq!(escape_html("plain 1.2.3.4"), "plain 1.2.3.4");
        assert_eq!(escape_html("a\0b"), "a\u{FFFD}b");
    }
}
