use crate::error::VejviserError;
use crate::extraction::{BBox, DocumentExtractor, Label, PageLabels};
use std::io::Write;
use std::process::Command;
use tracing::debug;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout` restricted to a single page, which emits
/// word-level bounding boxes plus the page dimensions in one pass. Word
/// granularity suits plan documents, where room labels are single tokens.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for PdftotextExtractor {
    fn extract_page(
        &self,
        doc_bytes: &[u8],
        page_number: usize,
    ) -> Result<PageLabels, VejviserError> {
        // Write document bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| VejviserError::DocumentRead(e.to_string()))?;
        tmpfile
            .write_all(doc_bytes)
            .map_err(|e| VejviserError::DocumentRead(e.to_string()))?;

        let page_arg = page_number.to_string();
        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg("-f")
            .arg(&page_arg)
            .arg("-l")
            .arg(&page_arg)
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    VejviserError::PdftotextNotFound
                } else {
                    VejviserError::DocumentRead(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(VejviserError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let page = parse_bbox_page(&xml).ok_or(VejviserError::PageMissing { page: page_number })?;

        debug!(
            "extracted page {}: {}x{}, {} labels",
            page_number,
            page.page_width,
            page.page_height,
            page.labels.len()
        );

        Ok(page)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse the first page of `pdftotext -bbox-layout` XML output into
/// labels plus page dimensions. Returns None when no page element is
/// present (empty document or out-of-range page request).
fn parse_bbox_page(xml: &str) -> Option<PageLabels> {
    let mut page: Option<PageLabels> = None;

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            if page.is_some() {
                // Only the requested page is processed.
                break;
            }
            let width = parse_attr_f64(line, "width")?;
            let height = parse_attr_f64(line, "height")?;
            if width <= 0.0 || height <= 0.0 {
                return None;
            }
            page = Some(PageLabels {
                page_width: width,
                page_height: height,
                labels: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<word ") {
            if let (Some(page), Some(bbox), Some(text)) =
                (page.as_mut(), parse_bbox(line), parse_word_text(line))
            {
                let text = decode_xml_entities(&text).trim().to_string();
                if !text.is_empty() {
                    page.labels.push(Label { text, bbox });
                }
            }
        }
    }

    page
}

fn parse_attr_f64(tag: &str, name: &str) -> Option<f64> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_bbox(word_tag: &str) -> Option<BBox> {
    Some(BBox {
        x_min: parse_attr_f64(word_tag, "xMin")?,
        y_min: parse_attr_f64(word_tag, "yMin")?,
        x_max: parse_attr_f64(word_tag, "xMax")?,
        y_max: parse_attr_f64(word_tag, "yMax")?,
    })
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"
<?xml version="1.0"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<body>
<doc>
  <page width="600.000000" height="1200.000000">
    <flow>
      <block xMin="150.0" yMin="300.0" xMax="190.0" yMax="310.0">
        <line xMin="150.0" yMin="300.0" xMax="190.0" yMax="310.0">
          <word xMin="150.0" yMin="300.0" xMax="190.0" yMax="310.0">A.1.10</word>
        </line>
      </block>
      <block xMin="60.0" yMin="1080.0" xMax="110.0" yMax="1090.0">
        <line xMin="60.0" yMin="1080.0" xMax="110.0" yMax="1090.0">
          <word xMin="60.0" yMin="1080.0" xMax="110.0" yMax="1090.0">Indgang</word>
        </line>
      </block>
    </flow>
  </page>
</doc>
</body>
</html>
"#;

    #[test]
    fn test_parse_bbox_page() {
        let page = parse_bbox_page(SAMPLE_XML).unwrap();
        assert_eq!(page.page_width, 600.0);
        assert_eq!(page.page_height, 1200.0);
        assert_eq!(page.labels.len(), 2);
        assert_eq!(page.labels[0].text, "A.1.10");
        assert_eq!(page.labels[0].bbox.x_min, 150.0);
        assert_eq!(page.labels[0].bbox.y_min, 300.0);
        assert_eq!(page.labels[1].text, "Indgang");
    }

    #[test]
    fn test_parse_no_page() {
        assert!(parse_bbox_page("<doc>\n</doc>").is_none());
    }

    #[test]
    fn test_only_first_page_parsed() {
        let xml = r#"
<doc>
  <page width="600.0" height="1200.0">
    <word xMin="10.0" yMin="20.0" xMax="30.0" yMax="30.0">A101</word>
  </page>
  <page width="600.0" height="1200.0">
    <word xMin="10.0" yMin="20.0" xMax="30.0" yMax="30.0">B202</word>
  </page>
</doc>
"#;
        let page = parse_bbox_page(xml).unwrap();
        assert_eq!(page.labels.len(), 1);
        assert_eq!(page.labels[0].text, "A101");
    }

    #[test]
    fn test_entity_decoding_and_empty_words() {
        let xml = r#"
<doc>
  <page width="600.0" height="1200.0">
    <word xMin="10.0" yMin="20.0" xMax="30.0" yMax="30.0">A &amp; B</word>
    <word xMin="40.0" yMin="20.0" xMax="50.0" yMax="30.0">   </word>
  </page>
</doc>
"#;
        let page = parse_bbox_page(xml).unwrap();
        assert_eq!(page.labels.len(), 1);
        assert_eq!(page.labels[0].text, "A & B");
    }

    #[test]
    fn test_degenerate_page_dimensions_rejected() {
        let xml = r#"<page width="0.0" height="1200.0">"#;
        assert!(parse_bbox_page(xml).is_none());
    }
}
