// src/ports/html.rs
use crate::domain::{ImageAttachment, Note};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use html_escape::{encode_double_quoted_attribute, encode_text};
use url::Url;

/// Renders notes and image previews as standalone HTML pages. All dynamic
/// text goes through `html_escape` here, so escaping is guaranteed by
/// construction rather than left to call sites.
#[derive(Debug)]
pub struct HtmlPresenter {
    base_url: Url,
}

const PAGE_STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }
        .card {
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .note-content {
            white-space: pre-wrap;
        }
        .muted {
            color: #666;
            font-style: italic;
        }
        img {
            max-width: 100%;
            border-radius: 4px;
        }
        .note-info {
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }
"#;

impl HtmlPresenter {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Absolute URL of a server-hosted upload.
    fn upload_url(&self, filename: &str) -> String {
        format!(
            "{}/static/uploads/{}",
            self.base_url.as_str().trim_end_matches('/'),
            filename
        )
    }

    pub fn render(&self, note: &Note) -> String {
        let title = encode_text(&note.title);

        let content = if note.content.is_empty() {
            r#"<em class="muted">No content</em>"#.to_string()
        } else {
            format!(
                r#"<p class="note-content">{}</p>"#,
                encode_text(&note.content)
            )
        };

        let image = match &note.image_filename {
            Some(filename) => format!(
                r#"<img src="{}" alt="Note image">"#,
                encode_double_quoted_attribute(&self.upload_url(filename))
            ),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Note {id}</title>
    <style>{style}</style>
</head>
<body>
    <div class="card">
        <h2>{title}</h2>
        {image}
        {content}
        <div class="note-info">
            <div><strong>Created:</strong> {created}</div>
            <div><strong>Updated:</strong> {updated}</div>
        </div>
    </div>
</body>
</html>"#,
            id = note.id,
            style = PAGE_STYLE,
            title = title,
            image = image,
            content = content,
            created = encode_text(&note.created_at),
            updated = encode_text(&note.updated_at),
        )
    }

    /// Local preview for a validated attachment, embedded as a `data:` URL
    /// so the page works without the server.
    pub fn render_preview(&self, image: &ImageAttachment) -> String {
        let payload = STANDARD.encode(&image.bytes);

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Image preview</title>
    <style>{style}</style>
</head>
<body>
    <div class="card">
        <p class="muted">New image preview: {name}</p>
        <img src="data:{mime};base64,{payload}" alt="Image preview">
    </div>
</body>
</html>"#,
            style = PAGE_STYLE,
            name = encode_text(&image.file_name),
            mime = image.mime,
            payload = payload,
        )
    }
}
