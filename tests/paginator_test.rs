use scriptflow_rust::classifier::classify_document;
use scriptflow_rust::models::{Conf, ElementType, ScriptElement};
use scriptflow_rust::paginator::{occupied_lines, paginate, PageBuffer};

fn small_conf() -> Conf {
    Conf {
        lines_per_page: 6,
        chars_per_line: 61,
        ..Conf::interactive()
    }
}

#[test]
fn test_occupied_lines() {
    let conf = Conf {
        lines_per_page: 55,
        chars_per_line: 20,
        ..Conf::interactive()
    };

    // 正文行数 = max(1, ceil(字符数/行宽))，再加按类型的间距补贴
    let action = ScriptElement::new(ElementType::Action, "A".repeat(30), 0);
    assert_eq!(occupied_lines(&action, &conf), 2 + 1, "action间距补贴+1");

    let heading = ScriptElement::new(ElementType::SceneHeading, "INT. X - DAY".to_string(), 0);
    assert_eq!(occupied_lines(&heading, &conf), 1 + 2, "场景标题间距补贴+2");

    let character = ScriptElement::new(ElementType::Character, "ANNA".to_string(), 0);
    assert_eq!(occupied_lines(&character, &conf), 1 + 1);

    let dialogue = ScriptElement::new(ElementType::Dialogue, "hi".to_string(), 0);
    assert_eq!(occupied_lines(&dialogue, &conf), 1, "其余类型无间距补贴");

    let empty = ScriptElement::new(ElementType::Dialogue, String::new(), 0);
    assert_eq!(occupied_lines(&empty, &conf), 1, "空文本至少占一行");
}

#[test]
fn test_greedy_packing_and_budget() {
    // 每个action占2行(1正文+1间距)，预算6行 → 每页3个元素
    let text = "One.\nTwo.\nThree.\nFour.\nFive.\nSix.\nSeven.\n";
    let elements = classify_document(text);
    assert_eq!(elements.len(), 7);

    let conf = small_conf();
    let pages = paginate(&elements, &conf);

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].elements.len(), 3);
    assert_eq!(pages[1].elements.len(), 3);
    assert_eq!(pages[2].elements.len(), 1);

    // 页码从1起连续递增
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page_number, i + 1);
    }

    // 除末页外每页占用行数不超预算
    for page in &pages[..pages.len() - 1] {
        let total: usize = page.elements.iter().map(|el| occupied_lines(el, &conf)).sum();
        assert!(total <= conf.lines_per_page, "页{}超出行预算", page.page_number);
    }
}

#[test]
fn test_pagination_reconstruction() {
    let text = "INT. ROOM - DAY\n\nAnna enters.\n\nANNA\nHello.\n\nMARK\nHi.\n\nEXT. PARK - LATER\n\nThey walk.\n";
    let elements = classify_document(text);
    let pages = paginate(&elements, &small_conf());

    // 跨页拼接所有元素文本 == 输入元素文本拼接(无丢失无乱序)
    let from_pages: String = pages
        .iter()
        .flat_map(|p| p.elements.iter())
        .map(|el| el.text.as_str())
        .collect();
    let from_input: String = elements.iter().map(|el| el.text.as_str()).collect();
    assert_eq!(from_pages, from_input);

    // 页覆盖区间首尾相接
    assert_eq!(pages[0].start, 0);
    for i in 1..pages.len() {
        assert_eq!(pages[i - 1].end, pages[i].start, "页区间应相接无缝");
    }
}

#[test]
fn test_oversized_element_overflows_alone() {
    // 单个超大元素允许独占超限，不在元素内部切分
    let huge = ScriptElement::new(ElementType::Action, "x".repeat(1000), 0);
    let next = ScriptElement::new(ElementType::Action, "short".to_string(), 1001);
    let conf = small_conf();
    let pages = paginate(&[huge.clone(), next], &conf);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].elements.len(), 1);
    assert!(occupied_lines(&huge, &conf) > conf.lines_per_page);
}

#[test]
fn test_empty_document_single_page() {
    let pages = paginate(&[], &small_conf());
    assert_eq!(pages.len(), 1, "空文档应产出单张空页");
    assert_eq!(pages[0].page_number, 1);
    assert!(pages[0].elements.is_empty());
}

#[test]
fn test_page_buffer_roundtrip() {
    let text = "One.\nTwo.\nThree.\nFour.\nFive.\nSix.\n";
    let buffer = PageBuffer::from_document(text, small_conf());

    assert_eq!(buffer.page_count(), 2);
    assert_eq!(buffer.full_text(), text, "分页切片拼接应恒等于全文");
    assert_eq!(buffer.page_text(0), Some("One.\nTwo.\nThree.\n"));
    assert_eq!(buffer.page_text(1), Some("Four.\nFive.\nSix.\n"));
}

#[test]
fn test_page_buffer_local_splice() {
    let text = "One.\nTwo.\nThree.\nFour.\nFive.\nSix.\n";
    let mut buffer = PageBuffer::from_document(text, small_conf());

    // 编辑第一页使其超出预算：本页局部重排，溢出前插到下一页
    let edited = "One.\nExtra A.\nExtra B.\nTwo.\nThree.\n".to_string();
    buffer.replace_page(0, edited.clone());

    assert_eq!(buffer.page_count(), 2);
    assert_eq!(buffer.page_text(0), Some("One.\nExtra A.\nExtra B.\n"));
    assert_eq!(
        buffer.page_text(1),
        Some("Two.\nThree.\nFour.\nFive.\nSix.\n"),
        "溢出行应并入下一页已有内容之前"
    );

    // 拼接不变量保持
    let expected: String = format!("{}{}", edited, "Four.\nFive.\nSix.\n");
    assert_eq!(buffer.full_text(), expected);

    // 末页溢出时追加新页
    let tail = "Tail one.\nTail two.\nTail three.\nTail four.\n".to_string();
    buffer.replace_page(1, tail);
    assert_eq!(buffer.page_count(), 3);

    // 越界索引为无操作
    let before = buffer.full_text();
    buffer.replace_page(99, "ignored".to_string());
    assert_eq!(buffer.full_text(), before);
}
