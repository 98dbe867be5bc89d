use serde::{Deserialize, Serialize};
use std::fmt;

/// 剧本元素类型，封闭枚举
///
/// 核心五类(场景标题/动作/角色/对话)构成Tab循环序列，
/// 其余类型只能通过自动识别或显式选择到达，不参与循环
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    ShotDirection,
    Subheader,
    VoiceOver,
    OffScreen,
    OffCamera,
    TextOnScreen,
    Montage,
    Intercut,
    DualDialogue,
}

impl ElementType {
    /// 所有类型，便于遍历测试
    pub const ALL: [ElementType; 15] = [
        ElementType::SceneHeading,
        ElementType::Action,
        ElementType::Character,
        ElementType::Dialogue,
        ElementType::Parenthetical,
        ElementType::Transition,
        ElementType::ShotDirection,
        ElementType::Subheader,
        ElementType::VoiceOver,
        ElementType::OffScreen,
        ElementType::OffCamera,
        ElementType::TextOnScreen,
        ElementType::Montage,
        ElementType::Intercut,
        ElementType::DualDialogue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::SceneHeading => "scene-heading",
            ElementType::Action => "action",
            ElementType::Character => "character",
            ElementType::Dialogue => "dialogue",
            ElementType::Parenthetical => "parenthetical",
            ElementType::Transition => "transition",
            ElementType::ShotDirection => "shot-direction",
            ElementType::Subheader => "subheader",
            ElementType::VoiceOver => "voice-over",
            ElementType::OffScreen => "off-screen",
            ElementType::OffCamera => "off-camera",
            ElementType::TextOnScreen => "text-on-screen",
            ElementType::Montage => "montage",
            ElementType::Intercut => "intercut",
            ElementType::DualDialogue => "dual-dialogue",
        }
    }

    /// Tab循环的下一个类型
    ///
    /// 固定循环: scene-heading → action → character → dialogue → action，
    /// 循环外的类型按 action 归位
    pub fn cycle_next(&self) -> ElementType {
        match self {
            ElementType::SceneHeading => ElementType::Action,
            ElementType::Action => ElementType::Character,
            ElementType::Character => ElementType::Dialogue,
            ElementType::Dialogue => ElementType::Action,
            _ => ElementType::Action,
        }
    }

    /// 回车换行后下一行的默认类型(固定后继表)
    pub fn successor(&self) -> ElementType {
        match self {
            ElementType::SceneHeading => ElementType::Action,
            ElementType::Action => ElementType::Character,
            ElementType::Character => ElementType::Dialogue,
            ElementType::Dialogue => ElementType::Action,
            ElementType::Parenthetical => ElementType::Dialogue,
            ElementType::Transition => ElementType::SceneHeading,
            _ => ElementType::Action,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
