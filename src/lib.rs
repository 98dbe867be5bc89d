pub mod models;
pub mod utils;
pub mod classifier;
pub mod suggest;
pub mod editor;
pub mod paginator;
pub mod extractor;
pub mod api;

pub use models::{
    ElementType,
    ScriptElement,
    ExportElement,
    Scene,
    Character,
    Location,
    LocationKind,
    Page,
    Conf
};

pub use classifier::{
    classify,
    classify_document,
    ClassifyConf
};

pub use suggest::{suggest, Suggestion};

pub use editor::{
    EditorSession,
    EditorState,
    EditorEvent
};

pub use paginator::{paginate, PageBuffer};

pub use extractor::{
    extract_scenes,
    extract_entities,
    find_scene_at,
    EntityIndex
};

pub use api::{
    ScriptAnalysis,
    DocumentStats,
    ApiError,
    analyze_script,
    analyze_script_text,
    export_elements,
    generate_html
};

/// 分析剧本文本
///
/// # Arguments
///
/// * `script` - 剧本纯文本
/// * `config` - 排版配置
///
/// # Returns
///
/// 分析结果对象
pub fn analyze(script: &str, config: &Conf) -> ScriptAnalysis {
    api::analyze_script(script, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let config = Conf::default();
        let result = analyze("INT. ROOM - DAY\n\nHello, world!", &config);
        assert!(!result.elements.is_empty());
        assert_eq!(result.scenes.len(), 1);
        assert_eq!(result.pages.len(), 1);
    }
}
