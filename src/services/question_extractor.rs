//! 题目提取服务 - 业务能力层
//!
//! 逐行扫描文档文本，找出符合题目规则的行

use crate::models::question::{QuestionMarker, QuestionPattern};

/// 按行切分文本
///
/// 提取和注释必须使用同一种切分方式，保证行号一致
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// 题目提取器
///
/// - 只匹配第 0 列，不去掉行首空白
/// - 编号按扫描顺序从 1 开始，不信任原文里的数字
/// - 没有匹配时返回空列表
#[derive(Debug, Clone, Default)]
pub struct QuestionExtractor {
    pattern: QuestionPattern,
}

impl QuestionExtractor {
    pub fn new(pattern: QuestionPattern) -> Self {
        Self { pattern }
    }

    pub fn extract(&self, text: &str) -> Vec<QuestionMarker> {
        let mut questions = Vec::new();

        for (line_index, line) in split_lines(text).enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some((label, literal_number)) = self.pattern.capture(line) {
                questions.push(QuestionMarker {
                    ordinal: questions.len() + 1,
                    label,
                    source_line_index: line_index,
                    literal_number,
                });
            }
        }

        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ordinal_follows_scan_order() {
        let text = indoc! {"
            # Functions

            Some intro.

            Context line
            3. **What is closure?**
            Answer text.
        "};

        let questions = QuestionExtractor::default().extract(text);
        assert_eq!(
            questions,
            vec![QuestionMarker {
                ordinal: 1,
                label: "What is closure?".to_string(),
                source_line_index: 5,
                literal_number: Some(3),
            }]
        );
    }

    #[test]
    fn test_gaps_and_duplicates_in_numbering() {
        let text = indoc! {"
            1. **First**
            1. **Duplicate number**
            7. **Gap**
        "};

        let questions = QuestionExtractor::default().extract(text);
        let ordinals: Vec<usize> = questions.iter().map(|q| q.ordinal).collect();
        let literals: Vec<Option<u64>> = questions.iter().map(|q| q.literal_number).collect();

        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(literals, vec![Some(1), Some(1), Some(7)]);
    }

    #[test]
    fn test_nested_list_items_are_ignored() {
        let text = indoc! {"
            1. **Top level**
               1. **Nested example**
            - 2. **In bullet**
            2. **Second top level**
        "};

        let labels: Vec<String> = QuestionExtractor::default()
            .extract(text)
            .into_iter()
            .map(|q| q.label)
            .collect();
        assert_eq!(labels, vec!["Top level", "Second top level"]);
    }

    #[test]
    fn test_no_questions_is_empty() {
        let text = "# 테라폼 소개\n\n테라폼은 인프라를 코드로 관리합니다.\n";
        assert!(QuestionExtractor::default().extract(text).is_empty());
        assert!(QuestionExtractor::default().extract("").is_empty());
    }

    #[test]
    fn test_crlf_lines_match() {
        let text = "intro\r\n2. **Hoisting**\r\nanswer\r\n";
        let questions = QuestionExtractor::default().extract(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].label, "Hoisting");
        assert_eq!(questions[0].source_line_index, 1);
    }
}
