use fountain_lex::{lex, parse, writer, Linter, ParseConf};
use std::env;
use std::fs;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <fountain_or_lex_file> [--lint]", args[0]);
        return;
    }

    let file_path = &args[1];

    match fs::read_to_string(file_path) {
        Ok(content) => {
            let conf = ParseConf::default();

            if file_path.ends_with(".lex") {
                // lex 还原为 Fountain
                let screenplay = lex::parse(&content);
                let out_path = format!("{}.fountain", file_path);
                fs::write(&out_path, writer::write_string(&screenplay, &conf)).unwrap();
                println!("Fountain 输出已保存到: {}", out_path);
                return;
            }

            let screenplay = parse(&content, &conf);
            println!("解析完成！共 {} 个元素", screenplay.len());

            if args.iter().any(|a| a == "--lint") {
                let mut linter = Linter::new();
                linter.lint(&screenplay);
                println!("{}", linter.format_findings());
            }

            let lex_path = format!("{}.lex", file_path);
            fs::write(&lex_path, lex::write_string(&screenplay)).unwrap();
            println!("lex 输出已保存到: {}", lex_path);
        }
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
