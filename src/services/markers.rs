//! 题号 / 答案标记 - 业务能力层
//!
//! 每组标记是一个有序的正则列表，而不是一条合并后的大正则：
//! 在同一位置上，列表中靠前的模式优先（源顺序优先，不是最长匹配）。
//!
//! 所有模式都锚定在文本开头或换行之后，允许前导空白，
//! 并吞掉标记后面的空白。段落中间出现的 "1." 不会被当作题号。
//!
//! 两组标记只编译一次，之后只读共享，可以在多个线程中同时使用。

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// 题号标记，按优先级排列
const QUESTION_MARKER_DEFS: &[(&str, &str)] = &[
    // 1. 或 1、
    ("数字编号", r"[0-9]+[.、．]"),
    // Q1: 或 Q1：
    ("Q编号", r"[QqＱ][0-9]+[:：]"),
    // 题目1
    ("题目编号", r"题目\s*[0-9]+"),
    // 第1题
    ("第N题", r"第\s*[0-9]+\s*题"),
    // 问题1
    ("问题编号", r"问题\s*[0-9]+"),
];

/// 答案标记，按优先级排列（不区分大小写）
const ANSWER_MARKER_DEFS: &[(&str, &str)] = &[
    ("答案", r"答案\s*[:：]"),
    ("Answer", r"Answer\s*[:：]"),
    ("参考答案", r"参考答案\s*[:：]"),
    ("A", r"[AaＡ]\s*[:：]"),
];

/// 全局题号标记集合
pub static QUESTION_MARKERS: LazyLock<MarkerSet> =
    LazyLock::new(|| MarkerSet::compile(QUESTION_MARKER_DEFS, false));

/// 全局答案标记集合
pub static ANSWER_MARKERS: LazyLock<MarkerSet> =
    LazyLock::new(|| MarkerSet::compile(ANSWER_MARKER_DEFS, true));

/// 单个标记模式
#[derive(Debug)]
pub struct MarkerPattern {
    name: &'static str,
    regex: Regex,
}

impl MarkerPattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// 一次标记匹配（字节偏移）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    /// 匹配起点，包含行首锚定的换行符
    pub start: usize,
    /// 匹配终点，包含标记后被吞掉的空白
    pub end: usize,
    /// 命中的模式在集合中的下标
    pub pattern: usize,
}

/// 有序的标记模式集合
#[derive(Debug)]
pub struct MarkerSet {
    patterns: Vec<MarkerPattern>,
}

impl MarkerSet {
    fn compile(defs: &[(&'static str, &str)], case_insensitive: bool) -> Self {
        let patterns = defs
            .iter()
            .map(|&(name, body)| {
                let source = format!(r"(?:^|\n)\s*(?:{})\s*", body);
                let regex = RegexBuilder::new(&source)
                    .case_insensitive(case_insensitive)
                    .build()
                    .unwrap_or_else(|e| panic!("内置标记正则无效 ({}): {}", name, e));
                MarkerPattern { name, regex }
            })
            .collect();
        Self { patterns }
    }

    pub fn patterns(&self) -> &[MarkerPattern] {
        &self.patterns
    }

    /// 命中模式的名称
    pub fn name_of(&self, m: &MarkerMatch) -> &'static str {
        self.patterns[m.pattern].name
    }

    /// 从 `pos` 开始查找第一个标记
    ///
    /// 起点最靠左的匹配获胜；起点相同时取列表中靠前的模式。
    pub fn find_at(&self, text: &str, pos: usize) -> Option<MarkerMatch> {
        let mut best: Option<MarkerMatch> = None;
        for (index, pattern) in self.patterns.iter().enumerate() {
            if let Some(m) = pattern.regex.find_at(text, pos) {
                if best.map_or(true, |b| m.start() < b.start) {
                    best = Some(MarkerMatch {
                        start: m.start(),
                        end: m.end(),
                        pattern: index,
                    });
                }
            }
        }
        best
    }

    pub fn find(&self, text: &str) -> Option<MarkerMatch> {
        self.find_at(text, 0)
    }

    /// 从左到右遍历所有不重叠的标记
    pub fn find_iter<'s, 't>(&'s self, text: &'t str) -> MarkerMatches<'s, 't> {
        MarkerMatches {
            set: self,
            text,
            pos: 0,
            lookahead: vec![Lookahead::Unknown; self.patterns.len()],
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Lookahead {
    Unknown,
    At(usize, usize),
    Exhausted,
}

/// `MarkerSet::find_iter` 返回的迭代器
///
/// 每个模式缓存自己的下一个匹配，只有当缓存落在当前位置之前时才重新搜索，
/// 所以整次扫描对每个模式都是线性的。
pub struct MarkerMatches<'s, 't> {
    set: &'s MarkerSet,
    text: &'t str,
    pos: usize,
    lookahead: Vec<Lookahead>,
}

impl Iterator for MarkerMatches<'_, '_> {
    type Item = MarkerMatch;

    fn next(&mut self) -> Option<MarkerMatch> {
        if self.pos > self.text.len() {
            return None;
        }

        let mut best: Option<MarkerMatch> = None;
        for (index, pattern) in self.set.patterns.iter().enumerate() {
            let refresh = match self.lookahead[index] {
                Lookahead::Unknown => true,
                Lookahead::At(start, _) => start < self.pos,
                Lookahead::Exhausted => false,
            };
            if refresh {
                self.lookahead[index] = match pattern.regex.find_at(self.text, self.pos) {
                    Some(m) => Lookahead::At(m.start(), m.end()),
                    None => Lookahead::Exhausted,
                };
            }
            if let Lookahead::At(start, end) = self.lookahead[index] {
                if best.map_or(true, |b| start < b.start) {
                    best = Some(MarkerMatch {
                        start,
                        end,
                        pattern: index,
                    });
                }
            }
        }

        let m = best?;
        self.pos = if m.end > m.start {
            m.end
        } else {
            // 空匹配时前进一个字符，避免原地打转
            m.end
                + self.text[m.end..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8)
        };
        Some(m)
    }
}
