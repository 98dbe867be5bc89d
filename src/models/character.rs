use serde::{Deserialize, Serialize};

/// 角色实体
///
/// 首次匹配角色名形状的行创建角色；之后每条同名行
/// 递增 dialogue_count，并把当前场景id去重后追加到 scenes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    /// 规范名：全大写，去掉 "(CONT'D)" 之类的尾部括注
    pub name: String,
    /// 出场场景id，有序去重
    pub scenes: Vec<String>,
    pub dialogue_count: usize,
    pub first_appearance_offset: usize,
}

impl Character {
    pub fn new(id: String, name: String, first_appearance_offset: usize) -> Self {
        Character {
            id,
            name,
            scenes: Vec::new(),
            dialogue_count: 0,
            first_appearance_offset,
        }
    }
}
