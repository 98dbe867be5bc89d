use serde::{Deserialize, Serialize};

/// 地点类别: 内景/外景/其他
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    #[serde(rename = "INT")]
    Interior,
    #[serde(rename = "EXT")]
    Exterior,
    #[serde(rename = "OTHER")]
    Other,
}

/// 地点实体，从场景标题的 `INT./EXT. 名称 - 时间` 模式解析
///
/// 去重键为解析出的名称原样字符串(区分大小写)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub kind: LocationKind,
    pub scenes: Vec<String>,
    pub scene_count: usize,
    pub first_appearance_offset: usize,
    pub time_of_day: Option<String>,
}

impl Location {
    pub fn new(
        id: String,
        name: String,
        kind: LocationKind,
        first_appearance_offset: usize,
        time_of_day: Option<String>,
    ) -> Self {
        Location {
            id,
            name,
            kind,
            scenes: Vec::new(),
            scene_count: 0,
            first_appearance_offset,
            time_of_day,
        }
    }
}
