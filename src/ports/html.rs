// src/ports/html.rs
use crate::domain::VocabEntry;
use html_escape::encode_text;

/// Standalone HTML page with one card per word.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_card(&self, entry: &VocabEntry) -> String {
        let badges: String = [entry.part_of_speech.as_deref(), entry.article()]
            .into_iter()
            .flatten()
            .filter(|b| !b.is_empty())
            .map(|b| format!(r#"<span class="badge">{}</span>"#, encode_text(b)))
            .collect();

        format!(
            r#"        <div class="card">
            <h2>{word} {badges}</h2>
            <div class="meaning">{meaning}</div>
            <div class="example">{example}</div>
        </div>
"#,
            word = encode_text(&entry.display_word()),
            badges = badges,
            meaning = encode_text(&entry.meaning),
            example = encode_text(&entry.example),
        )
    }

    pub fn render(&self, heading: &str, entries: &[VocabEntry]) -> String {
        let cards: String = entries.iter().map(|e| self.render_card(e)).collect();
        let heading = encode_text(heading);

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{heading}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 1rem 2rem;
            margin-bottom: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .badge {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.5em;
            vertical-align: middle;
        }}
        .meaning {{
            font-weight: bold;
        }}
        .example {{
            color: #666;
            font-style: italic;
        }}
    </style>
</head>
<body>
    <h1>{heading}</h1>
{cards}</body>
</html>"#,
            heading = heading,
            cards = cards,
        )
    }
}
