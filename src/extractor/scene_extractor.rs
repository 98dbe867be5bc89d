use crate::models::{Conf, Scene};
use crate::utils::{word_count, CLASSIFY_REGEX, EXTRACT_REGEX};

/// 提取器的结构标题测试
///
/// 有意比行分类器的场景标题规则更宽：除 INT./EXT. 等前缀外，
/// SCENE/ACT/CHAPTER 编号、MONTAGE、FLASHBACK 以及转场形状的行
/// 也作为分段标记
pub fn is_structural_heading(trimmed: &str) -> bool {
    EXTRACT_REGEX["structural_heading"].is_match(trimmed)
        || CLASSIFY_REGEX["transition"].is_match(trimmed)
}

struct HeadingMark {
    offset: usize,
    line_end: usize,
    line_number: usize,
    text: String,
}

/// 扫描全文提取场景列表
///
/// 场景从一个标题行(含)延伸到下一个标题行之前；存在标题时
/// 场景划分覆盖全文(首个标题之前的引子并入第一个场景)；
/// 全文无标题且非空时合成唯一的 "Scene 1"
pub fn extract_scenes(document: &str) -> Vec<Scene> {
    extract_scenes_with(document, &Conf::default())
}

pub fn extract_scenes_with(document: &str, conf: &Conf) -> Vec<Scene> {
    let mut marks: Vec<HeadingMark> = Vec::new();
    let mut offset = 0usize;
    let mut line_number = 0usize;

    for line in document.split('\n') {
        line_number += 1;
        let trimmed = line.trim();
        if !trimmed.is_empty() && is_structural_heading(trimmed) {
            marks.push(HeadingMark {
                offset,
                line_end: offset + line.len(),
                line_number,
                text: trimmed.to_string(),
            });
        }
        offset += line.len() + 1;
    }

    let doc_len = document.len();
    let mut scenes = Vec::with_capacity(marks.len());

    if marks.is_empty() {
        if !document.is_empty() {
            // 无标题时合成单场景
            let mut scene = Scene::new("scene_1".to_string(), "Scene 1".to_string(), 0, 1);
            scene.end = doc_len;
            scene.body_text = document.to_string();
            scene.estimated_duration_sec = estimate_duration(&scene.body_text, conf);
            scenes.push(scene);
        }
        return scenes;
    }

    for (i, mark) in marks.iter().enumerate() {
        let start = if i == 0 { 0 } else { mark.offset };
        let end = if i + 1 < marks.len() {
            marks[i + 1].offset
        } else {
            doc_len
        };

        let id = format!("scene_{}", i + 1);
        let mut scene = Scene::new(id, mark.text.clone(), start, mark.line_number);
        scene.end = end;
        let body_start = (mark.line_end + 1).min(end);
        scene.body_text = document[body_start..end].to_string();
        scene.estimated_duration_sec = estimate_duration(&scene.body_text, conf);
        scenes.push(scene);
    }

    scenes
}

/// 场景时长估算(秒): max(正文词数/每页词数, 0.1页) × 每页秒数
fn estimate_duration(body: &str, conf: &Conf) -> f64 {
    let pages = word_count(body) as f64 / conf.words_per_page;
    pages.max(0.1) * conf.seconds_per_page
}

/// 线性扫描找出包含指定偏移的场景，越界返回 None
pub fn find_scene_at<'a>(scenes: &'a [Scene], offset: usize) -> Option<&'a Scene> {
    scenes.iter().find(|scene| scene.contains(offset))
}
