use notion_blocks_engine::{
    Annotation, BlockDecoder, BlockFormat, BlockType, DecodeError, DecodedPage, ImageProxy,
    RecordMap, decoding::inline::plain_text,
};
use pretty_assertions::assert_eq;

const PAGE_ID: &str = "4c6a54c6-8d24-4d5d-a5a1-2b6c9e0b2a10";

fn load_fixture(name: &str) -> RecordMap {
    let bytes = std::fs::read(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    RecordMap::from_json(&bytes).unwrap()
}

fn decode_fixture() -> DecodedPage {
    load_fixture("page")
        .decode_page(PAGE_ID, &BlockDecoder::default())
        .unwrap()
}

#[test]
fn root_page_is_decoded() {
    let decoded = decode_fixture();
    let page = &decoded.page;

    assert_eq!(page.id, PAGE_ID);
    assert_eq!(page.title(), "Travel notes");
    assert_eq!(page.root.version, 42);
    assert_eq!(page.root.created_time, 1546300800000);

    let format = page.root.format.as_ref().and_then(BlockFormat::as_page).unwrap();
    assert!(format.page_full_width);
    assert_eq!(format.page_icon, "🧳");
    assert_eq!(
        format.page_cover_url,
        "https://www.notion.so/image/https%3A%2F%2Fwww.notion.so%2Fimages%2Fpage-cover%2Fmet_vincent_van_gogh_cradle.jpg"
    );
}

#[test]
fn children_keep_document_order_and_skip_failures() {
    let decoded = decode_fixture();
    let types: Vec<_> = decoded
        .page
        .root
        .children
        .iter()
        .map(|b| b.block_type.to_string())
        .collect();

    assert_eq!(
        types,
        vec![
            "text",
            "to_do",
            "image",
            "code",
            "toggle",
            "collection_view",
            "synced_block"
        ]
    );
}

#[test]
fn malformed_sibling_is_reported_not_fatal() {
    let decoded = decode_fixture();

    assert_eq!(decoded.failures.len(), 1);
    let failure = &decoded.failures[0];
    assert_eq!(failure.block_id(), "a0000000-0000-4000-8000-000000000005");
    match failure {
        DecodeError::Format { source, .. } => {
            assert_eq!(source.block_type, "column");
            assert!(source.payload.contains("half"));
        }
        other => panic!("expected a format failure, got {other:?}"),
    }
}

#[test]
fn inline_content_keeps_every_run() {
    let decoded = decode_fixture();
    let text = &decoded.page.root.children[0];

    assert_eq!(
        plain_text(&text.inline_content),
        "Packed by ‣, see the list"
    );
    assert_eq!(
        text.inline_content[1].user_mention(),
        Some("8b8e4d9a-1111-4111-8111-111111111111")
    );
    assert_eq!(
        text.inline_content[3].annotations,
        vec![
            Annotation::Bold,
            Annotation::Link("https://example.com/list".into())
        ]
    );
    assert!(matches!(text.format, Some(BlockFormat::Text(ref f)) if f.block_color == "gray"));
}

#[test]
fn typed_leaf_fields() {
    let decoded = decode_fixture();
    let children = &decoded.page.root.children;

    let todo = &children[1];
    assert!(todo.is_checked);

    let image = &children[2];
    assert_eq!(
        image.image_url,
        "https://www.notion.so/image/https%3A%2F%2Fimg.example.com%2Fa.png"
    );
    let image_format = image.format.as_ref().and_then(BlockFormat::as_image).unwrap();
    assert_eq!(image_format.image_url, image.image_url);

    let code = &children[3];
    assert_eq!(code.code, "let x = 1;");
    assert_eq!(code.code_language, "Rust");

    let unknown = &children[6];
    assert_eq!(
        unknown.block_type,
        BlockType::Other("synced_block".into())
    );
    assert!(unknown.format.is_none());
}

#[test]
fn nested_bookmark_keeps_structured_source() {
    let decoded = decode_fixture();
    let bookmark = decoded
        .page
        .find_block("a0000000-0000-4000-8000-000000000016")
        .unwrap();

    assert_eq!(bookmark.block_type, BlockType::Bookmark);
    assert_eq!(bookmark.source, "https://structured.example.com");
    assert_eq!(bookmark.link, "https://hotel.example.com");
    assert_eq!(bookmark.description, "Near the station");
    assert!(matches!(bookmark.format, Some(BlockFormat::Bookmark(_))));
}

#[test]
fn users_and_tables_are_attached() {
    let decoded = decode_fixture();
    let page = &decoded.page;

    let user = page
        .find_user("8b8e4d9a-1111-4111-8111-111111111111")
        .unwrap();
    assert_eq!(user.display_name(), "Ada Lovelace");

    assert_eq!(page.tables.len(), 1);
    let table = &page.tables[0];
    assert_eq!(table.collection.name_text().as_deref(), Some("Cities"));
    assert_eq!(table.collection_view.name, "All cities");
    let rows: Vec<_> = table.data.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(rows, vec!["Porto", "Lisbon"]);
}

#[test]
fn root_page_is_found_without_an_id() {
    let rm = load_fixture("page");
    assert_eq!(rm.root_page_id(), Some(PAGE_ID));
    let decoded = rm.decode_root_page(&BlockDecoder::default()).unwrap();
    assert_eq!(decoded.page.title(), "Travel notes");
}

#[test]
fn custom_proxy_applies_to_the_whole_tree() {
    let decoder = BlockDecoder::new(ImageProxy::new("https://notes.example.org"));
    let decoded = load_fixture("page").decode_page(PAGE_ID, &decoder).unwrap();
    let cover = decoded
        .page
        .root
        .format
        .as_ref()
        .and_then(BlockFormat::as_page)
        .unwrap();
    assert!(
        cover
            .page_cover_url
            .starts_with("https://notes.example.org/image/https%3A%2F%2Fnotes.example.org%2F")
    );
}

#[test]
fn blocks_decode_independently_across_threads() {
    let rm = load_fixture("page");
    let decoder = BlockDecoder::default();
    let raws: Vec<_> = rm.block.values().filter_map(|r| r.value.as_ref()).collect();

    let sequential: Vec<_> = raws.iter().map(|raw| decoder.decode(raw).ok()).collect();
    let decoder = &decoder;
    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = raws
            .iter()
            .map(|&raw| s.spawn(move || decoder.decode(raw).ok()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
