//! 宿主应用 API
//!
//! 这个模块提供宿主应用(浏览器端桥接)可以调用的JSON接口

use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

use crate::classifier::{classify_document, classify_document_with, ClassifyConf};
use crate::extractor::{extract_entities_with, extract_scenes_with};
use crate::models::{Character, Conf, ElementType, ExportElement, Location, Page, Scene, ScriptElement};
use crate::paginator::paginate;
use crate::utils::{estimate_page_count, word_count};

/// 文档统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStats {
    pub action_lines: usize,
    pub dialogue_lines: usize,
    pub word_count: usize,
    /// 轻量页数估算(存档元数据用)，与完整分页相互独立
    pub page_count_estimate: usize,
    pub parse_time_ms: u64,
}

/// 一次全量分析的输出：元素流、分页、场景与实体索引、统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptAnalysis {
    pub elements: Vec<ScriptElement>,
    pub pages: Vec<Page>,
    pub scenes: Vec<Scene>,
    pub characters: Vec<Character>,
    pub locations: Vec<Location>,
    pub stats: DocumentStats,
}

/// API层错误
///
/// 核心算法本身是全函数不会失败，唯一可失败面是JSON序列化
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 对全文跑一遍完整分析流水线
pub fn analyze_script(text: &str, conf: &Conf) -> ScriptAnalysis {
    let started = Instant::now();

    let classify_conf = ClassifyConf {
        character_max_len: conf.character_name_max_len,
    };
    let elements = classify_document_with(text, &classify_conf);
    let pages = paginate(&elements, conf);
    let scenes = extract_scenes_with(text, conf);
    let entities = extract_entities_with(text, &classify_conf);

    let action_lines = elements
        .iter()
        .filter(|el| el.element_type == ElementType::Action)
        .count();
    let dialogue_lines = elements
        .iter()
        .filter(|el| el.element_type == ElementType::Dialogue)
        .count();

    let stats = DocumentStats {
        action_lines,
        dialogue_lines,
        word_count: word_count(text),
        page_count_estimate: estimate_page_count(text),
        parse_time_ms: started.elapsed().as_millis() as u64,
    };

    ScriptAnalysis {
        elements,
        pages,
        scenes,
        characters: entities.characters,
        locations: entities.locations,
        stats,
    }
}

/// 分析剧本文本，返回JSON字符串
pub async fn analyze_script_text(text: String, conf: Option<Conf>) -> Result<String, ApiError> {
    let conf = conf.unwrap_or_default();
    let analysis = analyze_script(&text, &conf);
    Ok(serde_json::to_string(&analysis)?)
}

/// 交给导出渲染器的分类流(仅类型与文本，不含偏移)
pub fn export_elements(text: &str) -> Vec<ExportElement> {
    classify_document(text).iter().map(ExportElement::from).collect()
}

/// 生成HTML预览输出
pub fn generate_html(elements: &[ScriptElement]) -> String {
    let mut buffer = String::new();
    for element in elements {
        buffer.push_str(&element.to_html());
        buffer.push('\n');
    }
    buffer
}
