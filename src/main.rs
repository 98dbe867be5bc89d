use scriptflow_rust::{analyze, generate_html, Conf};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <script_file>", args[0]);
        return;
    }

    let file_path = &args[1];

    match fs::read_to_string(file_path) {
        Ok(content) => {
            let config = Conf::default();
            let result = analyze(&content, &config);

            println!("分析完成！");
            println!("分析耗时: {}ms", result.stats.parse_time_ms);
            println!("元素数量: {}", result.elements.len());
            println!("页数: {}", result.pages.len());
            println!("场景数量: {}", result.scenes.len());
            println!("角色数量: {}", result.characters.len());
            println!("地点数量: {}", result.locations.len());

            let html = generate_html(&result.elements);
            let html_path = format!("{}.html", file_path);
            match fs::write(&html_path, html) {
                Ok(_) => println!("HTML预览已保存到: {}", html_path),
                Err(e) => println!("HTML预览保存失败: {}", e),
            }
        }
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
