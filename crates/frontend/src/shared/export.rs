//! CSV export: build a file in memory and trigger a browser download.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Quote a CSV field when it contains separators, quotes or newlines.
pub fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Offer `csv` as a download named `filename` via a temporary object URL.
pub fn download_csv(filename: &str, csv: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    // BOM so Excel opens the file as UTF-8.
    let content = format!("\u{FEFF}{}", csv);

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(&content));

    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");

    let blob = Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|_| "Failed to create blob")?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| "Failed to create URL")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create element")?
        .dyn_into()
        .map_err(|_| "Failed to cast to anchor")?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
