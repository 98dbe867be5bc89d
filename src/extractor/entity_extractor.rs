use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::{classify_with, ClassifyConf};
use crate::extractor::scene_extractor::is_structural_heading;
use crate::models::{Character, ElementType, Location, LocationKind};
use crate::utils::{strip_trailing_paren, EXTRACT_REGEX};

/// 实体索引：角色与地点，各自按首次出现顺序排列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIndex {
    pub characters: Vec<Character>,
    pub locations: Vec<Location>,
}

/// 扫描全文提取角色与地点
///
/// 场景id游标按遇到的标题行递增(scene_1, scene_2, ...)，
/// 与场景提取按位置对齐。角色行逐行独立重判(不带回看)：
/// 角色名形状之外还要求不被更靠前的规则认领，镜头指示、
/// 蒙太奇之类的全大写行不算角色
pub fn extract_entities(document: &str) -> EntityIndex {
    extract_entities_with(document, &ClassifyConf::default())
}

pub fn extract_entities_with(document: &str, conf: &ClassifyConf) -> EntityIndex {
    let mut characters: Vec<Character> = Vec::new();
    let mut character_index: HashMap<String, usize> = HashMap::new();
    let mut locations: Vec<Location> = Vec::new();
    let mut location_index: HashMap<String, usize> = HashMap::new();

    let mut scene_counter = 0usize;
    let mut offset = 0usize;

    for line in document.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            offset += line.len() + 1;
            continue;
        }

        if is_structural_heading(trimmed) {
            scene_counter += 1;
            let scene_id = format!("scene_{}", scene_counter);

            if let Some(caps) = EXTRACT_REGEX["location"].captures(trimmed) {
                let kind = if caps[1].to_uppercase().starts_with("INT") {
                    LocationKind::Interior
                } else {
                    LocationKind::Exterior
                };
                let name = caps[2].trim().to_string();
                let time_of_day = caps.get(3).map(|m| m.as_str().trim().to_string());

                // 去重键为名称原样字符串，区分大小写：
                // "Coffee Shop" 与 "COFFEE SHOP" 不合并
                let idx = match location_index.get(&name) {
                    Some(&i) => i,
                    None => {
                        let id = format!("loc_{}", locations.len() + 1);
                        locations.push(Location::new(id, name.clone(), kind, offset, time_of_day));
                        location_index.insert(name, locations.len() - 1);
                        locations.len() - 1
                    }
                };
                let location = &mut locations[idx];
                if !location.scenes.contains(&scene_id) {
                    location.scenes.push(scene_id.clone());
                }
                location.scene_count = location.scenes.len();
            }
        } else if classify_with(trimmed, None, conf) == ElementType::Character {
            // 规范名：去掉尾部括注(如 (CONT'D))，形状测试已保证全大写
            let canonical = strip_trailing_paren(trimmed);
            if !canonical.is_empty() {
                let scene_id = format!("scene_{}", scene_counter.max(1));
                let idx = match character_index.get(&canonical) {
                    Some(&i) => i,
                    None => {
                        let id = format!("char_{}", characters.len() + 1);
                        characters.push(Character::new(id, canonical.clone(), offset));
                        character_index.insert(canonical, characters.len() - 1);
                        characters.len() - 1
                    }
                };
                let character = &mut characters[idx];
                character.dialogue_count += 1;
                if !character.scenes.contains(&scene_id) {
                    character.scenes.push(scene_id);
                }
            }
        }

        offset += line.len() + 1;
    }

    EntityIndex {
        characters,
        locations,
    }
}
