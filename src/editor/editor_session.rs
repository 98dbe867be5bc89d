use crate::classifier::{classify_with, ClassifyConf};
use crate::models::ElementType;
use crate::suggest::{suggest, Suggestion};
use crate::utils::is_blank_line;

/// 每个打开文档的编辑状态(会话级，随文档关闭丢弃，不持久化)
#[derive(Debug, Clone)]
pub struct EditorState {
    /// 当前行的元素类型，作为显式状态机状态
    pub current_element_type: ElementType,
    /// 待确认的幽灵补全
    pub pending_suggestion: Option<Suggestion>,
    /// 光标位置(字节偏移)
    pub cursor: usize,
}

impl EditorState {
    pub fn new() -> Self {
        EditorState {
            current_element_type: ElementType::Action,
            pending_suggestion: None,
            cursor: 0,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// 编辑状态机的离散输入事件
///
/// 所有事件都不会失败：无法识别的输入等同于无操作
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// 可打印字符输入(打字/粘贴/语音转写统一走这里)
    Insert(String),
    Tab,
    Enter,
    Escape,
    /// 显式选择类型(菜单或快捷键)，绕过Tab循环，不改动已有文本
    SelectType(ElementType),
}

/// 编辑会话：唯一可变的事实源是文档文本加编辑状态
pub struct EditorSession {
    pub text: String,
    pub state: EditorState,
    conf: ClassifyConf,
}

impl EditorSession {
    pub fn new(text: String) -> Self {
        Self::with_conf(text, ClassifyConf::default())
    }

    pub fn with_conf(text: String, conf: ClassifyConf) -> Self {
        let cursor = text.len();
        let mut session = EditorSession {
            text,
            state: EditorState {
                current_element_type: ElementType::Action,
                pending_suggestion: None,
                cursor,
            },
            conf,
        };
        session.refresh();
        session
    }

    /// 处理一个键事件，驱动状态转移
    pub fn handle(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::Insert(s) => self.on_insert(&s),
            EditorEvent::Tab => self.on_tab(),
            EditorEvent::Enter => self.on_enter(),
            EditorEvent::Escape => {
                // 只清除幽灵补全，其余状态不动
                self.state.pending_suggestion = None;
            }
            EditorEvent::SelectType(element_type) => {
                self.state.current_element_type = element_type;
            }
        }
    }

    /// 语音转写文本按指定偏移插入，与打字输入同路径处理
    pub fn insert_dictated(&mut self, offset: usize, transcript: &str) {
        let mut clamped = offset.min(self.text.len());
        while !self.text.is_char_boundary(clamped) {
            clamped -= 1;
        }
        self.state.cursor = clamped;
        self.handle(EditorEvent::Insert(transcript.to_string()));
    }

    fn on_insert(&mut self, s: &str) {
        self.text.insert_str(self.state.cursor, s);
        self.state.cursor += s.len();
        self.refresh();
    }

    fn on_tab(&mut self) {
        if let Some(suggestion) = self.state.pending_suggestion.take() {
            // 有待确认补全时，Tab接受补全而不是切换类型：
            // 整行替换为规范短语并重新分类(短语可能属于别的类型)
            let (start, end) = self.current_line_span();
            self.text.replace_range(start..end, &suggestion.phrase);
            self.state.cursor = start + suggestion.phrase.len();
            let previous = self.previous_nonblank_type();
            self.state.current_element_type =
                classify_with(&suggestion.phrase, previous, &self.conf);
            return;
        }

        // 沿固定循环前进，并按新类型重排当前行大小写(内容变更)
        let next = self.state.current_element_type.cycle_next();
        let (start, end) = self.current_line_span();
        let reformatted = reformat_line(&self.text[start..end], next);
        self.text.replace_range(start..end, &reformatted);
        self.state.cursor = start + reformatted.len();
        self.state.current_element_type = next;
    }

    fn on_enter(&mut self) {
        // 先对刚完成的行定型，再按固定后继表决定下一行默认类型
        let (start, end) = self.current_line_span();
        let completed_line = self.text[start..end].to_string();
        let previous = self.previous_nonblank_type();
        let completed = classify_with(&completed_line, previous, &self.conf);

        self.text.insert(self.state.cursor, '\n');
        self.state.cursor += 1;
        self.state.current_element_type = completed.successor();
        self.state.pending_suggestion = None;
    }

    /// 重新分类当前行并刷新补全
    fn refresh(&mut self) {
        let (start, end) = self.current_line_span();
        let line = self.text[start..end].to_string();
        let previous = self.previous_nonblank_type();
        self.state.current_element_type = classify_with(&line, previous, &self.conf);
        self.state.pending_suggestion = if is_blank_line(&line) {
            None
        } else {
            suggest(&line)
        };
    }

    /// 光标所在行的区间(不含换行符)
    pub fn current_line_span(&self) -> (usize, usize) {
        let cursor = self.state.cursor.min(self.text.len());
        let start = match self.text[..cursor].rfind('\n') {
            Some(pos) => pos + 1,
            None => 0,
        };
        let end = match self.text[cursor..].find('\n') {
            Some(pos) => cursor + pos,
            None => self.text.len(),
        };
        (start, end)
    }

    pub fn current_line(&self) -> &str {
        let (start, end) = self.current_line_span();
        &self.text[start..end]
    }

    /// 当前行之前最近一处非空行的类型(回看)
    fn previous_nonblank_type(&self) -> Option<ElementType> {
        let (line_start, _) = self.current_line_span();
        let mut previous: Option<ElementType> = None;
        for line in self.text[..line_start].split('\n') {
            if !is_blank_line(line) {
                previous = Some(classify_with(line, previous, &self.conf));
            }
        }
        previous
    }
}

/// 按目标类型重排一行的大小写
///
/// 切到角色转大写，切到对话转小写，其余保持原样
fn reformat_line(line: &str, element_type: ElementType) -> String {
    match element_type {
        ElementType::Character => line.to_uppercase(),
        ElementType::Dialogue => line.to_lowercase(),
        _ => line.to_string(),
    }
}
