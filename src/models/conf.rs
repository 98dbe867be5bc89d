use serde::{Deserialize, Serialize};
use crate::models::element_type::ElementType;

/// 排版与识别配置
///
/// 交互式编辑与打印导出共用同一套分页算法，
/// 仅通过这组常量区分(每页行数/每行字符数/类型间距)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conf {
    /// 每页行预算
    pub lines_per_page: usize,
    /// 每行字符数(按字素计)
    pub chars_per_line: usize,
    /// 角色名行长度上限(开区间)，默认30
    pub character_name_max_len: usize,
    /// 每页词数，用于场景时长估算
    pub words_per_page: f64,
    /// 每页对应影片时长(秒)
    pub seconds_per_page: f64,
}

impl Conf {
    /// 交互式编辑器排版
    pub fn interactive() -> Self {
        Conf {
            lines_per_page: 55,
            chars_per_line: 61,
            character_name_max_len: 30,
            words_per_page: 250.0,
            seconds_per_page: 60.0,
        }
    }

    /// 打印导出排版(页边距不同，行预算与行宽略紧)
    pub fn print_export() -> Self {
        Conf {
            lines_per_page: 57,
            chars_per_line: 63,
            character_name_max_len: 30,
            words_per_page: 250.0,
            seconds_per_page: 60.0,
        }
    }

    /// 元素类型的固定间距补贴(行)
    pub fn spacing_for(&self, element_type: ElementType) -> usize {
        match element_type {
            ElementType::SceneHeading => 2,
            ElementType::Character => 1,
            ElementType::Action => 1,
            _ => 0,
        }
    }
}

impl Default for Conf {
    fn default() -> Self {
        Self::interactive()
    }
}
