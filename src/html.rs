//! HTML rendering for the clan pages.
//!
//! Page chrome lives in const strings and rows are rendered with
//! `format!` helpers. Keep the markup here to avoid a runtime template
//! dependency.

use serde_json::Value;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="/static/style.css">
"#;

/// Escape text for safe interpolation into HTML
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped string field, or a dash when the upstream omitted it
fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(escape)
        .unwrap_or_else(|| "-".to_string())
}

/// Numeric field rendered as text, or a dash when missing
fn num_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Badge `<img>` tag for the given size, empty when the upstream
/// carries no badge URL
fn badge_img(value: &Value, size: &str) -> String {
    value
        .get("badgeUrls")
        .and_then(|urls| urls.get(size))
        .and_then(Value::as_str)
        .map(|url| format!("<img class=\"badge\" src=\"{}\" alt=\"\">", escape(url)))
        .unwrap_or_default()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "{}    <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        PAGE_HEAD,
        escape(title),
        body
    )
}

/// Render the clan list page. Each row links to the clan's detail page
/// by its bare tag (the route normalizes and re-encodes it).
pub fn clan_list(clans: &[Value]) -> String {
    let rows: String = clans
        .iter()
        .map(|clan| {
            let name = text_field(clan, "name");
            let name_cell = match clan.get("tag").and_then(Value::as_str) {
                Some(tag) => format!(
                    "<a href=\"/{}\">{}</a>",
                    escape(tag.trim_start_matches('#')),
                    name
                ),
                None => name,
            };
            format!(
                "            <tr>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>\n",
                badge_img(clan, "small"),
                name_cell,
                text_field(clan, "tag"),
                num_field(clan, "clanLevel"),
                num_field(clan, "members"),
                num_field(clan, "clanPoints")
            )
        })
        .collect();

    let body = format!(
        "    <h1>Clans</h1>\n    <table>\n        <thead>\n            <tr><th></th><th>Name</th><th>Tag</th><th>Level</th><th>Members</th><th>Points</th></tr>\n        </thead>\n        <tbody>\n{}        </tbody>\n    </table>\n",
        rows
    );

    page("Clans", &body)
}

/// Render the detail page for a single clan
pub fn clan_detail(clan: &Value) -> String {
    let name = clan.get("name").and_then(Value::as_str).unwrap_or("-");

    let body = format!(
        "    <h1>{}{} <span class=\"tag\">{}</span></h1>\n    <p>{}</p>\n    <dl>\n        <dt>Level</dt><dd>{}</dd>\n        <dt>Points</dt><dd>{}</dd>\n        <dt>Members</dt><dd>{}</dd>\n        <dt>War wins</dt><dd>{}</dd>\n    </dl>\n    <p><a href=\"/\">Back to clan list</a></p>\n",
        badge_img(clan, "medium"),
        escape(name),
        text_field(clan, "tag"),
        text_field(clan, "description"),
        num_field(clan, "clanLevel"),
        num_field(clan, "clanPoints"),
        num_field(clan, "members"),
        num_field(clan, "warWins")
    );

    page(name, &body)
}
