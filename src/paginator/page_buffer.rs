use crate::classifier::classify_document;
use crate::models::Conf;
use crate::paginator::paginate;

/// 交互式分页缓冲
///
/// 按页存放文档文本切片。整篇分页是全量重算；单页编辑走
/// 局部重排：只对该页文本跑同一分页算法，溢出部分前插到
/// 下一页已有内容，而不是从头重新编页码。
/// 不变量：所有页文本按序拼接恒等于全文。
pub struct PageBuffer {
    pages: Vec<String>,
    conf: Conf,
}

impl PageBuffer {
    /// 对整篇文档做全量分页并切片
    pub fn from_document(text: &str, conf: Conf) -> Self {
        let elements = classify_document(text);
        let pages = paginate(&elements, &conf);

        let mut slices = Vec::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            let start = page.start.min(text.len());
            let end = if i + 1 < pages.len() {
                pages[i + 1].start.min(text.len())
            } else {
                text.len() // 末页吃掉文档尾部空白
            };
            slices.push(text[start..end].to_string());
        }
        if slices.is_empty() {
            slices.push(String::new());
        }

        PageBuffer {
            pages: slices,
            conf,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_text(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(|s| s.as_str())
    }

    /// 拼回全文
    pub fn full_text(&self) -> String {
        self.pages.concat()
    }

    /// 替换某一页的内容并做局部重排
    ///
    /// 新内容单独分页后，首段留在原页位；溢出段前插到下一页
    /// (与其已有内容合并)；该页为末页时溢出段追加为新页。
    /// 越界索引是无操作。
    pub fn replace_page(&mut self, index: usize, new_text: String) {
        if index >= self.pages.len() {
            return;
        }

        let elements = classify_document(&new_text);
        let local_pages = paginate(&elements, &self.conf);

        if local_pages.len() <= 1 {
            self.pages[index] = new_text;
            return;
        }

        // 切分点取局部第二页首元素的起始偏移，落在行首
        let cut = local_pages[1].start.min(new_text.len());
        let kept = new_text[..cut].to_string();
        let overflow = new_text[cut..].to_string();

        self.pages[index] = kept;
        if index + 1 < self.pages.len() {
            let mut merged = overflow;
            merged.push_str(&self.pages[index + 1]);
            self.pages[index + 1] = merged;
        } else if !overflow.is_empty() {
            self.pages.push(overflow);
        }
    }
}
