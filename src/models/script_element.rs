use serde::{Deserialize, Serialize};
use crate::models::element_type::ElementType;

/// 一条分类后的剧本行
///
/// 偏移量为全文UTF-8字节偏移(0起始，end不含)，
/// 不变量: end - start == text.len()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptElement {
    pub element_type: ElementType, // 元素类型
    pub text: String,              // 行原始文本
    pub start: usize,              // 起始偏移
    pub end: usize,                // 结束偏移
}

impl ScriptElement {
    pub fn new(element_type: ElementType, text: String, start: usize) -> Self {
        let end = start + text.len();
        ScriptElement {
            element_type,
            text,
            start,
            end,
        }
    }

    // 转换为HTML格式(用于预览)
    pub fn to_html(&self) -> String {
        let cleaned = self.text.trim();
        match self.element_type {
            ElementType::SceneHeading => format!("<div class=\"scene-heading\">{}</div>", cleaned),
            ElementType::Character => format!("<div class=\"character\">{}</div>", cleaned),
            ElementType::Dialogue => format!("<div class=\"dialogue\">{}</div>", cleaned),
            ElementType::Parenthetical => format!("<div class=\"parenthetical\">{}</div>", cleaned),
            ElementType::Action => format!("<div class=\"action\">{}</div>", cleaned),
            other => format!("<div class=\"scriptflow-{}\">{}</div>", other.as_str(), cleaned),
        }
    }
}

/// 交给导出渲染器的元素(仅类型+文本，不含偏移)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportElement {
    pub element_type: ElementType,
    pub text: String,
}

impl From<&ScriptElement> for ExportElement {
    fn from(el: &ScriptElement) -> Self {
        ExportElement {
            element_type: el.element_type,
            text: el.text.clone(),
        }
    }
}
