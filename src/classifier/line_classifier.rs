use crate::models::{ElementType, ScriptElement};
use crate::utils::{is_blank_line, CLASSIFY_REGEX};

/// 分类配置
#[derive(Debug, Clone)]
pub struct ClassifyConf {
    /// 角色名行长度上限(开区间)，默认30，可按需放宽
    pub character_max_len: usize,
}

impl Default for ClassifyConf {
    fn default() -> Self {
        ClassifyConf {
            character_max_len: 30,
        }
    }
}

type Rule = fn(&str, &ClassifyConf) -> Option<ElementType>;

/// 有序规则表，自上而下求值，先中先得
///
/// 顺序即优先级：模式互相重叠(如 "INT. DAY" 同时满足场景标题
/// 与角色名形状)，靠前的规则先裁决
const RULES: &[Rule] = &[
    scene_heading_rule,
    transition_rule,
    parenthetical_rule,
    shot_direction_rule,
    voice_rule,
    text_on_screen_rule,
    montage_rule,
    intercut_rule,
    character_rule,
];

fn scene_heading_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if CLASSIFY_REGEX["scene_heading"].is_match(line) {
        Some(ElementType::SceneHeading)
    } else {
        None
    }
}

fn transition_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if CLASSIFY_REGEX["transition"].is_match(line) {
        Some(ElementType::Transition)
    } else {
        None
    }
}

fn parenthetical_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if line.starts_with('(') && line.ends_with(')') {
        Some(ElementType::Parenthetical)
    } else {
        None
    }
}

fn shot_direction_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if CLASSIFY_REGEX["shot_direction"].is_match(line) {
        Some(ElementType::ShotDirection)
    } else {
        None
    }
}

fn voice_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if CLASSIFY_REGEX["voice_over"].is_match(line) {
        Some(ElementType::VoiceOver)
    } else if CLASSIFY_REGEX["off_screen"].is_match(line) {
        Some(ElementType::OffScreen)
    } else if CLASSIFY_REGEX["off_camera"].is_match(line) {
        Some(ElementType::OffCamera)
    } else {
        None
    }
}

fn text_on_screen_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if CLASSIFY_REGEX["text_on_screen"].is_match(line) {
        Some(ElementType::TextOnScreen)
    } else {
        None
    }
}

fn montage_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if CLASSIFY_REGEX["montage"].is_match(line) {
        Some(ElementType::Montage)
    } else {
        None
    }
}

fn intercut_rule(line: &str, _conf: &ClassifyConf) -> Option<ElementType> {
    if CLASSIFY_REGEX["intercut"].is_match(line) {
        Some(ElementType::Intercut)
    } else {
        None
    }
}

fn character_rule(line: &str, conf: &ClassifyConf) -> Option<ElementType> {
    if is_character_shape(line, conf.character_max_len) {
        Some(ElementType::Character)
    } else {
        None
    }
}

/// 角色名形状: 整行已是全大写、长度在开区间(1, max_len)、不含句点
pub fn is_character_shape(line: &str, max_len: usize) -> bool {
    let trimmed = line.trim();
    let len = trimmed.chars().count();
    len > 1 && len < max_len && !trimmed.contains('.') && trimmed == trimmed.to_uppercase()
}

/// 对单行分类
///
/// 全函数：任何输入都恰好得到一个类型，兜底为 action。
/// 对话类型只能凭回看参数到达(前一非空行为角色/括注/对话)
pub fn classify(line: &str, previous: Option<ElementType>) -> ElementType {
    classify_with(line, previous, &ClassifyConf::default())
}

pub fn classify_with(line: &str, previous: Option<ElementType>, conf: &ClassifyConf) -> ElementType {
    let trimmed = line.trim();

    for rule in RULES {
        if let Some(element_type) = rule(trimmed, conf) {
            return element_type;
        }
    }

    match previous {
        Some(ElementType::Character)
        | Some(ElementType::Parenthetical)
        | Some(ElementType::Dialogue) => ElementType::Dialogue,
        _ => ElementType::Action,
    }
}

/// 对整篇文档逐行分类
///
/// 跳过空行，向后传递前一非空行的类型作为回看；
/// 偏移量为字节偏移，满足 end - start == text.len()
pub fn classify_document(text: &str) -> Vec<ScriptElement> {
    classify_document_with(text, &ClassifyConf::default())
}

pub fn classify_document_with(text: &str, conf: &ClassifyConf) -> Vec<ScriptElement> {
    let mut elements = Vec::new();
    let mut previous: Option<ElementType> = None;
    let mut offset = 0usize;

    for line in text.split('\n') {
        if !is_blank_line(line) {
            let element_type = classify_with(line, previous, conf);
            elements.push(ScriptElement::new(element_type, line.to_string(), offset));
            previous = Some(element_type);
        }
        offset += line.len() + 1; // 含换行符
    }

    elements
}
