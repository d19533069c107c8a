use anyhow::{Context, Result};
use notion_blocks_config::Config;
use notion_blocks_engine::{
    Block, BlockDecoder, BlockType, DecodedPage, ImageProxy, RecordMap,
    decoding::inline::plain_text,
};
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <record-map.json> [page-id]", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(PathBuf::from(&args[1]), args.get(2).map(String::as_str)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(path: PathBuf, page_id: Option<&str>) -> Result<()> {
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!("No config file at {}", Config::config_path().display());
            Config::default()
        }
        Err(e) => {
            log::warn!("Ignoring config: {e}");
            Config::default()
        }
    };

    let bytes =
        std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let record_map = RecordMap::from_json(&bytes)
        .with_context(|| format!("parsing record map {}", path.display()))?;

    let decoder = BlockDecoder::new(ImageProxy::new(config.asset_host.as_str()));
    let decoded = match page_id {
        Some(id) => record_map.decode_page(id, &decoder),
        None => record_map.decode_root_page(&decoder),
    }
    .context("decoding page")?;

    log::info!(
        "Decoded page {} ({} blocks, {} failures)",
        decoded.page.id,
        decoded.page.root.walk().len(),
        decoded.failures.len()
    );

    for line in render(&decoded, config.max_depth) {
        println!("{line}");
    }
    Ok(())
}

fn render(decoded: &DecodedPage, max_depth: Option<usize>) -> Vec<String> {
    let page = &decoded.page;
    let mut lines = Vec::new();
    render_block(&page.root, 0, max_depth, &mut lines);

    for table in &page.tables {
        let name = table
            .collection
            .name_text()
            .unwrap_or_else(|| table.collection.id.clone());
        lines.push(format!(
            "table {name} / {} ({} rows)",
            table.collection_view.name,
            table.data.len()
        ));
        for row in &table.data {
            lines.push(format!("  - {}", row.title));
        }
    }

    if !page.users.is_empty() {
        let names: Vec<_> = page.users.iter().map(|u| u.display_name()).collect();
        lines.push(format!("users: {}", names.join(", ")));
    }

    for failure in &decoded.failures {
        lines.push(format!("failed: {failure}"));
    }
    lines
}

fn render_block(block: &Block, depth: usize, max_depth: Option<usize>, out: &mut Vec<String>) {
    if max_depth.is_some_and(|max| depth > max) {
        return;
    }
    let summary = summarize(block);
    let indent = "  ".repeat(depth);
    if summary.is_empty() {
        out.push(format!("{indent}{}", block.block_type));
    } else {
        out.push(format!("{indent}{}: {summary}", block.block_type));
    }
    for child in &block.children {
        render_block(child, depth + 1, max_depth, out);
    }
}

fn summarize(block: &Block) -> String {
    match block.block_type {
        BlockType::Page => block.title.clone(),
        BlockType::Code => {
            let first_line = block.code.lines().next().unwrap_or("");
            if block.code_language.is_empty() {
                first_line.to_string()
            } else {
                format!("[{}] {first_line}", block.code_language)
            }
        }
        BlockType::Todo => {
            let mark = if block.is_checked { "x" } else { " " };
            format!("[{mark}] {}", plain_text(&block.inline_content))
        }
        BlockType::Image => block.image_url.clone(),
        BlockType::Bookmark => {
            let target = if block.link.is_empty() { &block.source } else { &block.link };
            format!("{} <{target}>", plain_text(&block.inline_content))
        }
        BlockType::File => format!("{} ({})", block.source, block.file_size),
        _ => plain_text(&block.inline_content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notion_blocks_engine::{Page, RawBlock, decode_block};

    fn block(id: &str, block_type: &str, properties: serde_json::Value) -> Block {
        let raw: RawBlock = serde_json::from_value(serde_json::json!({
            "id": id,
            "type": block_type,
            "properties": properties,
        }))
        .unwrap();
        decode_block(&raw).unwrap()
    }

    fn decoded(root: Block) -> DecodedPage {
        DecodedPage {
            page: Page::new(root),
            failures: Vec::new(),
        }
    }

    #[test]
    fn renders_indented_outline() {
        let mut root = block("p", "page", serde_json::json!({"title": [["Notes"]]}));
        let mut toggle = block("t", "toggle", serde_json::json!({"title": [["More"]]}));
        toggle.children.push(block(
            "c",
            "to_do",
            serde_json::json!({"title": [["Pack"]], "checked": [["Yes"]]}),
        ));
        root.children.push(toggle);
        root.children.push(block("d", "divider", serde_json::json!({})));

        assert_eq!(
            render(&decoded(root), None),
            vec![
                "page: Notes",
                "  toggle: More",
                "    to_do: [x] Pack",
                "  divider",
            ]
        );
    }

    #[test]
    fn max_depth_limits_outline() {
        let mut root = block("p", "page", serde_json::json!({"title": [["Notes"]]}));
        root.children
            .push(block("t", "text", serde_json::json!({"title": [["hidden"]]})));

        assert_eq!(render(&decoded(root), Some(0)), vec!["page: Notes"]);
    }

    #[test]
    fn code_summary_shows_language_and_first_line() {
        let code = block(
            "c",
            "code",
            serde_json::json!({"title": [["fn main() {\n}"]], "language": [["Rust"]]}),
        );
        assert_eq!(summarize(&code), "[Rust] fn main() {");
    }
}
