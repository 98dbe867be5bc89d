use serde::{Deserialize, Serialize};

/// 场景：从一个场景标题行(含)到下一个场景标题行之前的连续区间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,           // 会话内稳定id: scene_1, scene_2, ...
    pub heading: String,      // 标题行原始文本
    pub start: usize,         // 起始偏移
    pub end: usize,           // 结束偏移(不含)
    pub line_number: usize,   // 标题所在行号(1起始)
    pub body_text: String,    // 标题行之后的正文
    /// 预估时长(秒): max(正文词数/250, 0.1) × 60
    pub estimated_duration_sec: f64,
}

impl Scene {
    pub fn new(id: String, heading: String, start: usize, line_number: usize) -> Self {
        Scene {
            id,
            heading,
            start,
            end: start,
            line_number,
            body_text: String::new(),
            estimated_duration_sec: 0.0,
        }
    }

    /// 判断偏移是否落在本场景区间内
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}
