//! 页面生成服务 - 业务能力层
//!
//! 把导航状态拼成一个完整的 HTML 页面：标题、文档列表、题目侧边栏、正文或错误提示

use crate::models::question::{anchor_id, QuestionMarker};
use crate::orchestrator::{DocumentEntry, NavigatorSnapshot};

/// HTML 转义
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 页面生成器
#[derive(Debug, Clone, Default)]
pub struct PageBuilder;

impl PageBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, snapshot: &NavigatorSnapshot, documents: &[DocumentEntry]) -> String {
        let lang = snapshot.active_group.as_deref().unwrap_or("en");
        let title = snapshot
            .content
            .as_ref()
            .map(|c| c.descriptor.title.as_str())
            .unwrap_or("");

        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n");
        page.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_html(lang)));
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        page.push_str("</head>\n<body>\n");

        page.push_str(&format!(
            "<h1 id=\"current-title\">{}</h1>\n",
            escape_html(title)
        ));
        page.push_str(&self.document_list(documents));

        if let Some(content) = &snapshot.content {
            page.push_str(&self.question_list(
                &content.questions,
                snapshot.active_question_index,
            ));
        }

        if let Some(message) = &snapshot.last_error {
            page.push_str(&format!(
                "<div class=\"error\">{}</div>\n",
                escape_html(message)
            ));
        }

        page.push_str("<main id=\"document-content\">\n");
        if let Some(content) = &snapshot.content {
            page.push_str(&content.html);
        }
        page.push_str("</main>\n</body>\n</html>\n");
        page
    }

    fn document_list(&self, documents: &[DocumentEntry]) -> String {
        let mut list = String::from("<ul id=\"document-list\">\n");
        for entry in documents {
            let class = if entry.active {
                "doc-item active"
            } else {
                "doc-item"
            };
            list.push_str(&format!(
                "<li class=\"{}\"><span class=\"doc-number\">{}</span> {}</li>\n",
                class,
                escape_html(&entry.descriptor.id.to_string()),
                escape_html(&entry.descriptor.title)
            ));
        }
        list.push_str("</ul>\n");
        list
    }

    fn question_list(&self, questions: &[QuestionMarker], active: Option<usize>) -> String {
        if questions.is_empty() {
            return String::new();
        }

        let mut list = String::from("<nav id=\"question-list\">\n");
        for (index, question) in questions.iter().enumerate() {
            let class = if Some(index) == active {
                "question-item active"
            } else {
                "question-item"
            };
            list.push_str(&format!(
                "<a class=\"{}\" href=\"#{}\"><span class=\"question-number\">{}</span> {}</a>\n",
                class,
                anchor_id(question.ordinal),
                question.ordinal,
                escape_html(&question.label)
            ));
        }
        list.push_str("</nav>\n");
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::descriptor::DocumentDescriptor;
    use crate::orchestrator::{DocumentContent, LoadPhase};

    fn snapshot() -> NavigatorSnapshot {
        let descriptor = DocumentDescriptor::new("part1", "p1.md", "Basics <JS>").in_group("en");
        NavigatorSnapshot {
            phase: LoadPhase::Ready,
            active_group: Some("en".to_string()),
            active_document_index: 0,
            active_question_index: Some(1),
            content: Some(DocumentContent {
                descriptor,
                raw_text: String::new(),
                annotated_markdown: String::new(),
                html: "<p>body</p>\n".to_string(),
                questions: vec![
                    QuestionMarker {
                        ordinal: 1,
                        label: "Closure".to_string(),
                        source_line_index: 0,
                        literal_number: Some(1),
                    },
                    QuestionMarker {
                        ordinal: 2,
                        label: "a < b".to_string(),
                        source_line_index: 4,
                        literal_number: Some(2),
                    },
                ],
            }),
            last_error: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_page_links_questions_to_anchors() {
        let snap = snapshot();
        let entries = vec![DocumentEntry {
            index: 0,
            descriptor: snap.content.as_ref().unwrap().descriptor.clone(),
            active: true,
        }];
        let page = PageBuilder::new().build(&snap, &entries);

        assert!(page.contains("<title>Basics &lt;JS&gt;</title>"));
        assert!(page.contains(r##"<a class="question-item" href="#question-1">"##));
        assert!(page.contains(r##"<a class="question-item active" href="#question-2">"##));
        assert!(page.contains("a &lt; b"));
        assert!(page.contains(r#"<li class="doc-item active">"#));
        assert!(page.contains("<p>body</p>"));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_page_shows_error_banner_with_previous_content() {
        let mut snap = snapshot();
        snap.phase = LoadPhase::Failed;
        snap.last_error = Some("Unable to load document. Error: Failed to load document: 404".to_string());

        let page = PageBuilder::new().build(&snap, &[]);
        assert!(page.contains("<div class=\"error\">Unable to load document."));
        assert!(page.contains("<p>body</p>"));
    }
}
