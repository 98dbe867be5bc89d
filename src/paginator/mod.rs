pub mod page_buffer;

pub use page_buffer::PageBuffer;

use crate::models::{Conf, Page, ScriptElement};
use crate::utils::grapheme_count;

/// 元素占用的排版行数
///
/// max(1, ceil(字素数 / 每行字符数)) 加上按类型的固定间距补贴
pub fn occupied_lines(element: &ScriptElement, conf: &Conf) -> usize {
    let width = conf.chars_per_line.max(1);
    let chars = grapheme_count(&element.text);
    let body = std::cmp::max(1, (chars + width - 1) / width);
    body + conf.spacing_for(element.element_type)
}

/// 贪心首次适应分页
///
/// 顺序消费元素，超出行预算且当前页非空时关页另起；
/// 不回看不重排，单个超大元素允许独占超限(不在元素内部切分)。
/// 空文档产出一张1号空页。
///
/// 页区间约定：只有元素流没有全文长度，末页 end 止于最后一个
/// 元素的 end；最后一个元素之后的尾部空白由知道全文长度的调用方
/// 并入末页([`PageBuffer::from_document`]切片时如此处理)。
pub fn paginate(elements: &[ScriptElement], conf: &Conf) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page::new(1);
    let mut current_line_count = 0usize;

    for element in elements {
        let occ = occupied_lines(element, conf);

        if !current.elements.is_empty() && current_line_count + occ > conf.lines_per_page {
            let next_number = current.page_number + 1;
            pages.push(current);
            current = Page::new(next_number);
            current_line_count = 0;
        }

        if current.elements.is_empty() {
            current.start = element.start;
        }
        current.end = element.end;
        current_line_count += occ;
        current.elements.push(element.clone());
    }

    if !current.elements.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    // 页区间首尾相接：页间空行间隙并入前一页
    if let Some(first) = pages.first_mut() {
        first.start = 0;
    }
    for i in 1..pages.len() {
        let boundary = pages[i]
            .elements
            .first()
            .map(|el| el.start)
            .unwrap_or(pages[i - 1].end);
        pages[i - 1].end = boundary;
        pages[i].start = boundary;
    }

    pages
}
