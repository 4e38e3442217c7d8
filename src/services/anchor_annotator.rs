//! 锚点注释服务 - 业务能力层
//!
//! 在每个题目行前插入可跳转的锚点。只使用提取阶段给出的行号，
//! 不重新扫描，保证侧边栏条目和锚点指向同一行。

use regex::Regex;
use std::sync::LazyLock;

use crate::models::question::{anchor_id, QuestionMarker};
use crate::services::question_extractor::split_lines;

static ANCHOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a id="question-(\d+)"></a>"#).expect("锚点正则必须合法")
});

/// 锚点标签
pub fn anchor_tag(ordinal: usize) -> String {
    format!(r#"<a id="{}"></a>"#, anchor_id(ordinal))
}

/// 在题目行前插入锚点
///
/// 锚点单独成段（前后各留空行），避免被并入上一段或吞掉下一行的列表语法。
/// 落在围栏代码块里的题目行仍然计数，锚点放到代码块开头那一行之前，
/// 跳转会停在代码块顶部。
/// `markers` 必须按行号升序，与提取器输出一致。
pub fn annotate(text: &str, markers: &[QuestionMarker]) -> String {
    let fences = enclosing_fences(text);
    let mut pending = markers
        .iter()
        .map(|m| {
            let target = fences
                .get(m.source_line_index)
                .copied()
                .flatten()
                .unwrap_or(m.source_line_index);
            (target, m.ordinal)
        })
        .peekable();
    let mut output: Vec<String> = Vec::new();

    for (line_index, line) in split_lines(text).enumerate() {
        while let Some((_, ordinal)) = pending.next_if(|(target, _)| *target == line_index) {
            if output.last().is_some_and(|prev| !prev.trim().is_empty()) {
                output.push(String::new());
            }
            output.push(anchor_tag(ordinal));
            output.push(String::new());
        }
        output.push(line.to_string());
    }

    if pending.peek().is_some() {
        tracing::warn!("有 {} 个题目标记超出文本范围，已忽略", pending.count());
    }

    output.join("\n")
}

/// 每一行所在围栏代码块的起始行号，不在代码块内为 `None`
fn enclosing_fences(text: &str) -> Vec<Option<usize>> {
    let mut open: Option<(usize, char, usize)> = None;

    split_lines(text)
        .enumerate()
        .map(|(index, line)| match (open, fence_marker(line)) {
            (Some((start, ch, len)), Some((c, n, bare))) if c == ch && n >= len && bare => {
                open = None;
                Some(start)
            }
            (Some((start, ..)), _) => Some(start),
            (None, Some((c, n, _))) => {
                open = Some((index, c, n));
                None
            }
            (None, None) => None,
        })
        .collect()
}

/// 识别 ``` 或 ~~~ 围栏行，返回（字符，长度，后面是否没有其他内容）
fn fence_marker(line: &str) -> Option<(char, usize, bool)> {
    let line = line.trim_end_matches('\r');
    let rest = line.trim_start_matches(' ');
    if line.len() - rest.len() > 3 {
        return None;
    }

    let ch = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.chars().take_while(|c| *c == ch).count();
    if len < 3 {
        return None;
    }
    Some((ch, len, rest[len..].trim().is_empty()))
}

/// 按出现顺序找出文本（Markdown 或 HTML）中的锚点编号
pub fn scan_anchors(text: &str) -> Vec<usize> {
    ANCHOR_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::markdown_renderer::{GfmRenderer, MarkdownRenderer};
    use crate::services::question_extractor::QuestionExtractor;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const DOC: &str = indoc! {"
        # Scope
        5. **What is hoisting?**
        Declarations move up.

        9. **What is TDZ?**
           1. **Nested, not a question**
        Temporal dead zone.
    "};

    #[test]
    fn test_annotate_inserts_anchor_before_each_marker() {
        let markers = QuestionExtractor::default().extract(DOC);
        let annotated = annotate(DOC, &markers);

        let expected = indoc! {r#"
            # Scope

            <a id="question-1"></a>

            5. **What is hoisting?**
            Declarations move up.

            <a id="question-2"></a>

            9. **What is TDZ?**
               1. **Nested, not a question**
            Temporal dead zone.
        "#};
        assert_eq!(annotated, expected);
    }

    #[test]
    fn test_anchors_biject_with_markers() {
        let markers = QuestionExtractor::default().extract(DOC);
        let annotated = annotate(DOC, &markers);

        let ordinals: Vec<usize> = markers.iter().map(|m| m.ordinal).collect();
        assert_eq!(scan_anchors(&annotated), ordinals);
    }

    #[test]
    fn test_original_lines_are_preserved() {
        let markers = QuestionExtractor::default().extract(DOC);
        let annotated = annotate(DOC, &markers);

        let without_anchors: Vec<&str> = annotated
            .split('\n')
            .filter(|line| !line.starts_with("<a id="))
            .filter(|line| !line.is_empty())
            .collect();
        let original: Vec<&str> = DOC.split('\n').filter(|line| !line.is_empty()).collect();
        assert_eq!(without_anchors, original);
    }

    #[test]
    fn test_annotate_without_markers_is_identity() {
        assert_eq!(annotate(DOC, &[]), DOC);
    }

    #[test]
    fn test_marker_inside_code_fence_anchors_before_fence() {
        let text = "1. **Real**\nA\n\n```md\n2. **In code**\n```\n";
        let markers = QuestionExtractor::default().extract(text);
        assert_eq!(markers.len(), 2);

        let annotated = annotate(text, &markers);
        assert_eq!(
            annotated,
            "<a id=\"question-1\"></a>\n\n1. **Real**\nA\n\n<a id=\"question-2\"></a>\n\n```md\n2. **In code**\n```\n"
        );

        let html = GfmRenderer::new().render(&annotated).unwrap();
        assert_eq!(scan_anchors(&html), vec![1, 2]);
    }

    #[test]
    fn test_fence_tracking() {
        let text = "~~~~\n```\n~~~\n~~~~\nafter\n    ```\n";
        assert_eq!(
            enclosing_fences(text),
            vec![None, Some(0), Some(0), Some(0), None, None, None]
        );
    }

    #[test]
    fn test_first_line_marker_gets_no_leading_blank() {
        let text = "1. **Top**\nbody";
        let markers = QuestionExtractor::default().extract(text);
        assert_eq!(
            annotate(text, &markers),
            "<a id=\"question-1\"></a>\n\n1. **Top**\nbody"
        );
    }
}
