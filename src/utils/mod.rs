pub mod screenplay_constants;

use unicode_segmentation::UnicodeSegmentation;
pub use screenplay_constants::{CLASSIFY_REGEX, EXTRACT_REGEX};

/// 按字素计的字符数(排版宽度用)
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// 统计词数(按空白切分)
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 检查一行是否为空白行(只含空白字符)
pub fn is_blank_line(text: &str) -> bool {
    text.trim().is_empty()
}

/// 去掉行尾括注得到规范形式，如 "ANNA (CONT'D)" → "ANNA"
pub fn strip_trailing_paren(text: &str) -> String {
    match EXTRACT_REGEX["trailing_paren"].captures(text) {
        Some(caps) => caps[1].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// 轻量页数估算: max(1, ceil(字素数 / 250))
///
/// 仅用于存档元数据，与交互式分页器相互独立
pub fn estimate_page_count(text: &str) -> usize {
    let chars = grapheme_count(text);
    std::cmp::max(1, (chars + 249) / 250)
}
