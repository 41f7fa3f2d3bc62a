use serde_json::Value;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Resolve `wp:featuredmedia[0].source_url` from a post's `_embedded` object.
///
/// Anything else (no embed, an error object in place of the media, a
/// non-string url) resolves to [`PLACEHOLDER_IMAGE_URL`].
pub fn featured_image_url(embedded: Option<&Value>) -> &str {
    embedded
        .and_then(|e| e.pointer("/wp:featuredmedia/0/source_url"))
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_source_url_wins() {
        let e = json!({"wp:featuredmedia": [{"id": 9, "source_url": "https://cdn.example.com/a.jpg"}]});
        assert_eq!(featured_image_url(Some(&e)), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn placeholder_for_every_other_shape() {
        let shapes = [
            json!({}),
            json!({"wp:featuredmedia": []}),
            json!({"wp:featuredmedia": [{"code": "rest_forbidden"}]}),
            json!({"wp:featuredmedia": [{"source_url": null}]}),
            json!({"wp:featuredmedia": [{"source_url": 17}]}),
            json!({"wp:featuredmedia": {"source_url": "https://x/y.png"}}),
            json!("not an object"),
            Value::Null,
        ];
        for e in &shapes {
            assert_eq!(featured_image_url(Some(e)), PLACEHOLDER_IMAGE_URL, "shape {e}");
        }
        assert_eq!(featured_image_url(None), PLACEHOLDER_IMAGE_URL);
    }
}
