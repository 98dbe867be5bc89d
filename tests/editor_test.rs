use scriptflow_rust::editor::{EditorEvent, EditorSession};
use scriptflow_rust::models::ElementType;
use scriptflow_rust::suggest::suggest;

#[test]
fn test_suggestion_dictionary_matching() {
    // 词典插入顺序先到先得："int" 命中 INT 短语而不是 intercut
    let hit = suggest("int").expect("int应有补全");
    assert_eq!(hit.phrase, "INT. COFFEE SHOP - DAY");
    assert_eq!(hit.element_type, ElementType::SceneHeading);

    // 更长的前缀落到 intercut，剩余字符从已输入长度截起
    let hit = suggest("inter").expect("inter应有补全");
    assert_eq!(hit.phrase, "INTERCUT - PHONE CALL");
    assert_eq!(hit.remainder, "CUT - PHONE CALL");

    // 匹配前小写并去空白
    assert!(suggest("  INT  ").is_some());

    // 无命中与空输入返回 None
    assert!(suggest("zzz").is_none());
    assert!(suggest("").is_none());
    assert!(suggest("   ").is_none());
    assert!(suggest("int. coffee shop - day").is_none(), "整行已是完整短语时不再补全");
}

#[test]
fn test_tab_cycle_order() {
    // 从场景标题出发，连按四次Tab: action, character, dialogue, action
    let mut session = EditorSession::new("INT. ROOM - DAY".to_string());
    assert_eq!(session.state.current_element_type, ElementType::SceneHeading);
    assert!(session.state.pending_suggestion.is_none());

    let mut observed = Vec::new();
    for _ in 0..4 {
        session.handle(EditorEvent::Tab);
        observed.push(session.state.current_element_type);
    }

    assert_eq!(
        observed,
        vec![
            ElementType::Action,
            ElementType::Character,
            ElementType::Dialogue,
            ElementType::Action,
        ],
        "Tab循环顺序应为 action → character → dialogue → action"
    );
}

#[test]
fn test_tab_cycle_reformats_case() {
    let mut session = EditorSession::new("anna".to_string());
    // "anna" 不是全大写，分类为 action
    assert_eq!(session.state.current_element_type, ElementType::Action);

    // action → character：整行转大写(内容变更，不只是显示)
    session.handle(EditorEvent::Tab);
    assert_eq!(session.state.current_element_type, ElementType::Character);
    assert_eq!(session.text, "ANNA");

    // character → dialogue：整行转小写
    session.handle(EditorEvent::Tab);
    assert_eq!(session.state.current_element_type, ElementType::Dialogue);
    assert_eq!(session.text, "anna");
}

#[test]
fn test_suggestion_accept_with_tab() {
    let mut session = EditorSession::new(String::new());
    session.handle(EditorEvent::Insert("int".to_string()));

    assert_eq!(session.state.current_element_type, ElementType::Action);
    let pending = session
        .state
        .pending_suggestion
        .clone()
        .expect("输入int后应有幽灵补全");
    assert_eq!(pending.phrase, "INT. COFFEE SHOP - DAY");
    assert_eq!(pending.remainder, ". COFFEE SHOP - DAY");

    // 有补全时Tab接受补全而不是切换类型
    session.handle(EditorEvent::Tab);
    assert_eq!(session.text, "INT. COFFEE SHOP - DAY");
    assert_eq!(
        session.state.current_element_type,
        ElementType::SceneHeading,
        "接受补全后应按短语重新分类"
    );
    assert!(session.state.pending_suggestion.is_none());
}

#[test]
fn test_escape_clears_suggestion_only() {
    let mut session = EditorSession::new(String::new());
    session.handle(EditorEvent::Insert("cl".to_string()));
    assert!(session.state.pending_suggestion.is_some());

    let before_type = session.state.current_element_type;
    session.handle(EditorEvent::Escape);
    assert!(session.state.pending_suggestion.is_none());
    assert_eq!(session.text, "cl", "Escape不应改动文本");
    assert_eq!(session.state.current_element_type, before_type);
}

#[test]
fn test_enter_successor_table() {
    let mut session = EditorSession::new("INT. ROOM - DAY".to_string());

    // scene-heading → action
    session.handle(EditorEvent::Enter);
    assert_eq!(session.state.current_element_type, ElementType::Action);

    // action → character
    session.handle(EditorEvent::Insert("Anna walks in.".to_string()));
    session.handle(EditorEvent::Enter);
    assert_eq!(session.state.current_element_type, ElementType::Character);

    // character → dialogue
    session.handle(EditorEvent::Insert("ANNA".to_string()));
    session.handle(EditorEvent::Enter);
    assert_eq!(session.state.current_element_type, ElementType::Dialogue);

    // dialogue → action
    session.handle(EditorEvent::Insert("Hello there.".to_string()));
    session.handle(EditorEvent::Enter);
    assert_eq!(session.state.current_element_type, ElementType::Action);

    assert_eq!(
        session.text,
        "INT. ROOM - DAY\nAnna walks in.\nANNA\nHello there.\n"
    );
}

#[test]
fn test_enter_after_parenthetical_and_transition() {
    let mut session = EditorSession::new("ANNA".to_string());
    session.handle(EditorEvent::Enter);
    session.handle(EditorEvent::Insert("(whispers)".to_string()));
    session.handle(EditorEvent::Enter);
    assert_eq!(
        session.state.current_element_type,
        ElementType::Dialogue,
        "括注之后默认回到对话"
    );

    let mut session = EditorSession::new("SMASH CUT TO:".to_string());
    session.handle(EditorEvent::Enter);
    assert_eq!(
        session.state.current_element_type,
        ElementType::SceneHeading,
        "转场之后默认进入场景标题"
    );
}

#[test]
fn test_select_type_bypasses_cycle() {
    let mut session = EditorSession::new("some prose".to_string());
    session.handle(EditorEvent::SelectType(ElementType::DualDialogue));
    assert_eq!(session.state.current_element_type, ElementType::DualDialogue);
    assert_eq!(session.text, "some prose", "显式选择类型不改动已有文本");
}

#[test]
fn test_dictated_text_insertion() {
    // 语音转写与打字输入同路径：按偏移插入后重新分类
    let mut session = EditorSession::new("INT. ROOM - DAY\n\n".to_string());
    session.insert_dictated(17, "Anna sits down.");

    assert_eq!(session.text, "INT. ROOM - DAY\n\nAnna sits down.");
    assert_eq!(session.state.cursor, session.text.len());
    assert_eq!(session.state.current_element_type, ElementType::Action);

    // 越界偏移收敛到文末，不会崩溃
    session.insert_dictated(9999, " She waits.");
    assert!(session.text.ends_with("Anna sits down. She waits."));
}
