use serde::{Deserialize, Serialize};
use crate::models::script_element::ScriptElement;

/// 分页结果中的一页
///
/// 不变量: 页码从1递增；所有页覆盖区间首尾相接可拼回全文；
/// 除末页外任何一页不超过配置的行预算(单个超大元素溢出除外)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub page_number: usize, // 1起始页码
    pub start: usize,
    pub end: usize,
    pub elements: Vec<ScriptElement>,
}

impl Page {
    pub fn new(page_number: usize) -> Self {
        Page {
            page_number,
            start: 0,
            end: 0,
            elements: Vec::new(),
        }
    }
}
