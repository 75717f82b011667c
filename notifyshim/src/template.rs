use std::path::Path;

use crate::request::NotificationRequest;
use crate::text::escape_xml;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstLine,
    SecondLine,
}

impl TextField {
    fn id(self) -> u8 {
        match self {
            TextField::FirstLine => 1,
            TextField::SecondLine => 2,
        }
    }
}

/// Two text lines plus an optional image, rendered as the legacy
/// `ToastImageAndText02` toast template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastTemplate {
    first_line: String,
    second_line: String,
    image: Option<String>,
}

impl ToastTemplate {
    pub fn image_and_text02() -> Self {
        Self::default()
    }

    pub fn from_request(request: &NotificationRequest) -> Self {
        let mut template = Self::image_and_text02();
        template.set_text_field(&request.title, TextField::FirstLine);
        template.set_text_field(&request.message, TextField::SecondLine);
        if let Some(icon) = request.icon() {
            template.set_image_path(icon);
        }
        template
    }

    pub fn set_text_field(&mut self, text: &str, field: TextField) {
        match field {
            TextField::FirstLine => self.first_line = text.to_string(),
            TextField::SecondLine => self.second_line = text.to_string(),
        }
    }

    pub fn set_image_path(&mut self, path: &Path) {
        self.image = Some(format!("file:///{}", path.display()));
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(r#"<toast><visual><binding template="ToastImageAndText02">"#);
        if let Some(src) = &self.image {
            xml.push_str(&format!(r#"<image id="1" src="{}"/>"#, escape_xml(src)));
        }
        for (field, text) in [
            (TextField::FirstLine, &self.first_line),
            (TextField::SecondLine, &self.second_line),
        ] {
            xml.push_str(&format!(r#"<text id="{}">{}</text>"#, field.id(), escape_xml(text)));
        }
        xml.push_str("</binding></visual></toast>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_lines_without_image() {
        let req = NotificationRequest::new("Build Complete", "Target X finished in 12s");
        let xml = ToastTemplate::from_request(&req).to_xml();
        assert_eq!(
            xml,
            concat!(
                r#"<toast><visual><binding template="ToastImageAndText02">"#,
                r#"<text id="1">Build Complete</text>"#,
                r#"<text id="2">Target X finished in 12s</text>"#,
                "</binding></visual></toast>"
            )
        );
        assert!(!xml.contains("<image"));
    }

    #[test]
    fn image_uses_file_uri() {
        let req = NotificationRequest::new("t", "m").with_icon(Some("C:\\icons\\bell.png"));
        let template = ToastTemplate::from_request(&req);
        assert!(template.has_image());
        assert!(template
            .to_xml()
            .contains(r#"<image id="1" src="file:///C:\icons\bell.png"/>"#));
    }

    #[test]
    fn text_is_escaped() {
        let req = NotificationRequest::new("<Deploy>", "a & b");
        let xml = ToastTemplate::from_request(&req).to_xml();
        assert!(xml.contains(r#"<text id="1">&lt;Deploy&gt;</text>"#));
        assert!(xml.contains(r#"<text id="2">a &amp; b</text>"#));
    }

    #[test]
    fn control_characters_are_stripped() {
        let req = NotificationRequest::new("\u{1b}[32mBuild OK\u{1b}[0m", "line one\nline\ttwo\u{7}");
        let xml = ToastTemplate::from_request(&req).to_xml();
        assert!(xml.contains(r#"<text id="1">[32mBuild OK[0m</text>"#));
        assert!(xml.contains("<text id=\"2\">line one\nline\ttwo</text>"));
        assert!(!xml.chars().any(|c| c < ' ' && !matches!(c, '\t' | '\n' | '\r')));
    }

    #[test]
    fn empty_text_keeps_both_lines() {
        let xml = ToastTemplate::from_request(&NotificationRequest::new("", "")).to_xml();
        assert!(xml.contains(r#"<text id="1"></text><text id="2"></text>"#));
    }
}
