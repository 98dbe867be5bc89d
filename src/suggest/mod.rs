use lazy_static::lazy_static;
use crate::models::ElementType;

/// 词典条目: 小写触发词 → 规范短语
#[derive(Debug, Clone)]
pub struct SuggestionEntry {
    pub trigger: &'static str,
    pub phrase: &'static str,
    /// 规范短语接受后所属的元素类型
    pub element_type: ElementType,
}

lazy_static! {
    // 固定词典，插入顺序即匹配顺序，不做排序
    pub static ref SUGGESTION_DICTIONARY: Vec<SuggestionEntry> = vec![
        SuggestionEntry { trigger: "int", phrase: "INT. COFFEE SHOP - DAY", element_type: ElementType::SceneHeading },
        SuggestionEntry { trigger: "ext", phrase: "EXT. PARK - DAY", element_type: ElementType::SceneHeading },
        SuggestionEntry { trigger: "fade", phrase: "FADE IN:", element_type: ElementType::SceneHeading },
        SuggestionEntry { trigger: "cut", phrase: "CUT TO:", element_type: ElementType::SceneHeading },
        SuggestionEntry { trigger: "close", phrase: "CLOSE UP ON", element_type: ElementType::ShotDirection },
        SuggestionEntry { trigger: "wide", phrase: "WIDE SHOT OF", element_type: ElementType::ShotDirection },
        SuggestionEntry { trigger: "montage", phrase: "MONTAGE - VARIOUS", element_type: ElementType::Montage },
        SuggestionEntry { trigger: "super", phrase: "SUPER: LATER", element_type: ElementType::TextOnScreen },
        SuggestionEntry { trigger: "intercut", phrase: "INTERCUT - PHONE CALL", element_type: ElementType::Intercut },
    ];
}

/// 一条待确认的幽灵补全
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// 追加在已输入文本之后的剩余字符
    pub remainder: String,
    /// 接受后替换整行的规范短语
    pub phrase: String,
    pub element_type: ElementType,
}

/// 根据已输入的部分行给出补全
///
/// 触发词匹配规则：触发词以输入(小写、去空白)开头；输入已
/// 等于完整规范短语时不再补全。只取词典顺序中第一个命中，
/// 无命中或输入为空返回 None
pub fn suggest(partial_line: &str) -> Option<Suggestion> {
    let partial = partial_line.trim().to_lowercase();
    if partial.is_empty() {
        return None;
    }

    for entry in SUGGESTION_DICTIONARY.iter() {
        if entry.trigger.starts_with(&partial) && partial != entry.phrase.to_lowercase() {
            let remainder: String = entry.phrase.chars().skip(partial.chars().count()).collect();
            return Some(Suggestion {
                remainder,
                phrase: entry.phrase.to_string(),
                element_type: entry.element_type,
            });
        }
    }

    None
}
