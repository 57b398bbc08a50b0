//! 控制台补全器
//!
//! 基于 rustyline 实现 Tab 补全：命令名和顶点名

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::graph::Graph;

/// 查询命令列表
const QUERY_COMMANDS: &[&str] = &[
    "stats",
    "edges",
    "degrees",
    "neighbors",
    "bfs",
    "dfs",
    "shortest",
    "all-pairs",
    "components",
    "export",
    "report",
];

/// 控制台命令列表
const CONSOLE_COMMANDS: &[&str] = &[
    ":help", ":h",
    ":quit", ":q",
    ":exit", ":e",
    ":mode",
    ":parallel",
    ":tee",
    ":notee",
    ":clear",
];

/// 控制台补全器
#[derive(Default)]
pub struct RoadCompleter {
    /// 顶点名称（按插入顺序）
    vertices: Vec<String>,
}

impl RoadCompleter {
    pub fn new(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertices().map(|v| v.name().to_string()).collect(),
        }
    }

    fn candidates<'a, I>(words: I, prefix: &str) -> Vec<Pair>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .filter(|w| w.starts_with(prefix))
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect()
    }
}

impl Completer for RoadCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 检查是否是控制台命令
        if line_to_cursor.starts_with(':') {
            return Ok((0, Self::candidates(CONSOLE_COMMANDS.iter().copied(), line_to_cursor)));
        }

        // 当前正在输入的单词及其起始位置
        let word_start = line_to_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let current_word = &line_to_cursor[word_start..];
        let is_first_word = line_to_cursor[..word_start].trim().is_empty();

        let completions = if is_first_word {
            Self::candidates(QUERY_COMMANDS.iter().copied(), current_word)
        } else {
            Self::candidates(self.vertices.iter().map(String::as_str), current_word)
        };

        Ok((word_start, completions))
    }
}

impl Hinter for RoadCompleter {
    type Hint = String;
}

impl Highlighter for RoadCompleter {}

impl Validator for RoadCompleter {}

impl Helper for RoadCompleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::city_network;
    use rustyline::history::DefaultHistory;

    fn complete(completer: &RoadCompleter, line: &str) -> (usize, Vec<String>) {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = completer.complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_complete_command() {
        let completer = RoadCompleter::new(&city_network().unwrap());

        let (start, words) = complete(&completer, "sh");
        assert_eq!(start, 0);
        assert_eq!(words, vec!["shortest"]);
    }

    #[test]
    fn test_complete_vertex() {
        let completer = RoadCompleter::new(&city_network().unwrap());

        let (start, words) = complete(&completer, "bfs Home M");
        assert_eq!(start, 9);
        assert_eq!(words, vec!["Market", "Mall"]);
    }

    #[test]
    fn test_complete_after_full_width_space() {
        let completer = RoadCompleter::new(&city_network().unwrap());

        let (start, words) = complete(&completer, "bfs\u{3000}Ho");
        assert_eq!(start, 6);
        assert_eq!(words, vec!["Home"]);
    }

    #[test]
    fn test_complete_console_command() {
        let completer = RoadCompleter::new(&city_network().unwrap());

        let (_, words) = complete(&completer, ":pa");
        assert_eq!(words, vec![":parallel"]);
    }
}
