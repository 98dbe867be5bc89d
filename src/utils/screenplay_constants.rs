use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 行分类正则(与§分类规则一一对应)
    pub static ref CLASSIFY_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("scene_heading", Regex::new(r"(?i)^(INT\.|EXT\.|FADE IN:|FADE OUT:|CUT TO:)").unwrap());
        map.insert("transition", Regex::new(r"^[A-Z ]+(TO:|IN:|OUT:)$").unwrap());
        map.insert("shot_direction", Regex::new(r"(?i)^(CLOSE UP|WIDE SHOT|MEDIUM SHOT|TRACKING SHOT)").unwrap());
        map.insert("voice_over", Regex::new(r"\(V\.O\.\)$").unwrap());
        map.insert("off_screen", Regex::new(r"\(O\.S\.\)$").unwrap());
        map.insert("off_camera", Regex::new(r"\(O\.C\.\)$").unwrap());
        map.insert("text_on_screen", Regex::new(r"(?i)^(SUPER:|TITLE:|TEXT ON SCREEN)").unwrap());
        map.insert("montage", Regex::new(r"(?i)^(MONTAGE|SERIES OF SHOTS)").unwrap());
        map.insert("intercut", Regex::new(r"(?i)^(INTERCUT|BACK AND FORTH)").unwrap());
        map
    };

    // 结构提取正则
    pub static ref EXTRACT_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        // 提取器的标题测试有意比行分类器更宽，也在松散结构标记处分段
        map.insert("structural_heading", Regex::new(
            r"(?i)^(INT\.|EXT\.|FADE IN:|FADE OUT:|CUT TO:|(SCENE|ACT|CHAPTER)\s+\d+|MONTAGE|FLASHBACK)"
        ).unwrap());
        // 场景标题中的地点与时间: INT./EXT. 名称 - 时间
        map.insert("location", Regex::new(
            r"(?i)^(INT\.|EXT\.)\s+(.+?)(?:\s+-\s+(.+))?\s*$"
        ).unwrap());
        // 角色名尾部括注，如 (CONT'D)、(V.O.)
        map.insert("trailing_paren", Regex::new(r"^(.*?)\s*\([^)]*\)\s*$").unwrap());
        map
    };
}
