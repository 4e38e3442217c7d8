//! 交互命令解析
//!
//! 每行一条命令，对应原页面上的按钮、下拉框和方向键

use crate::orchestrator::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Step(Direction),
    /// 选择文档，输入为 1 起始的序号
    Document(usize),
    Group(String),
    /// 选择题目，输入为 1 起始的序号
    Question(usize),
    List,
    Reload,
    Help,
    Quit,
}

impl Command {
    /// 解析一行输入，无法识别时返回 None
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?.to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (head.as_str(), arg) {
            ("next" | "n" | "right" | "→", None) => Some(Command::Step(Direction::Next)),
            ("prev" | "p" | "left" | "←", None) => Some(Command::Step(Direction::Prev)),
            ("doc" | "d", Some(n)) => n.parse().ok().map(Command::Document),
            ("group" | "lang" | "g", Some(tag)) => Some(Command::Group(tag.to_string())),
            ("q" | "question", Some(n)) => n.parse().ok().map(Command::Question),
            ("list" | "ls", None) => Some(Command::List),
            ("reload" | "r", None) => Some(Command::Reload),
            ("help" | "h" | "?", None) => Some(Command::Help),
            ("quit" | "exit", None) => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(Command::parse("next"), Some(Command::Step(Direction::Next)));
        assert_eq!(Command::parse("  ← "), Some(Command::Step(Direction::Prev)));
        assert_eq!(Command::parse("doc 3"), Some(Command::Document(3)));
        assert_eq!(Command::parse("lang en"), Some(Command::Group("en".to_string())));
        assert_eq!(Command::parse("Q 12"), Some(Command::Question(12)));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("doc"), None);
        assert_eq!(Command::parse("doc x"), None);
        assert_eq!(Command::parse("next 2"), None);
        assert_eq!(Command::parse("group ko en"), None);
        assert_eq!(Command::parse("jump"), None);
    }
}
