//! Document operation properties

use std::collections::HashSet;
use webshape_model::{
    project, Block, BlockTemplate, ContainerBlock, ContainerTag, ContentBlock, ContentData,
    ContentTag, Document, RandomIdGenerator, SequentialIdGenerator, Style, BLOCK_ID_ATTRIBUTE,
    SRC_ATTRIBUTE,
};

fn three_blocks() -> Document {
    Document::from_blocks(vec![
        ContainerBlock::new("a", ContainerTag::Div)
            .with_classes(["first"])
            .with_style(Style::new().with("height", "5px"))
            .into(),
        ContainerBlock::new("b", ContainerTag::Section)
            .with_style(Style::new().with("height", "10px").with("color", "red"))
            .with_child(ContentBlock::new("b-title", ContentTag::H1, ContentData::text("Title")))
            .into(),
        ContentBlock::new("c", ContentTag::Img, ContentData::text("photo.png"))
            .with_classes(["object-cover"])
            .into(),
    ])
    .expect("ids are unique")
}

fn assert_ids_in_projection(block: &Block, tree: &webshape_model::RenderTree) {
    let node = tree
        .find_block(block.id().as_str())
        .expect("every block is projected");
    assert_eq!(node.attribute(BLOCK_ID_ATTRIBUTE), Some(block.id().as_str()));
    for child in block.children() {
        assert_ids_in_projection(child, tree);
    }
}

#[test]
fn test_repeated_creation_yields_unique_ids() {
    let template = BlockTemplate::default();
    let mut ids = SequentialIdGenerator::new("/canvas");
    let mut doc = Document::default();

    for height in 0..50 {
        let (next, _) = doc
            .create_block(&mut ids, &template, height as f64)
            .expect("sequential ids never collide");
        doc = next;
    }

    let all = doc.block_ids();
    let unique: HashSet<_> = all.iter().collect();
    // root + 50 containers + 50 placeholder children
    assert_eq!(all.len(), 101);
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_random_generator_creation() {
    let mut ids = RandomIdGenerator;
    let (doc, id) = Document::empty()
        .create_block(&mut ids, &BlockTemplate::default(), 30.0)
        .unwrap();

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.blocks()[0].id(), &id);
}

#[test]
fn test_patch_locality() {
    let doc = three_blocks();

    let next = doc.patch_block_style("b", &Style::new().with("height", "99px"));

    assert_eq!(next.blocks()[0], doc.blocks()[0]);
    assert_eq!(next.blocks()[2], doc.blocks()[2]);
    assert_ne!(next.blocks()[1], doc.blocks()[1]);
    // Child of the patched block is untouched
    assert_eq!(
        next.find_block("b-title").unwrap(),
        doc.find_block("b-title").unwrap()
    );
}

#[test]
fn test_patch_unknown_id_is_noop() {
    let doc = three_blocks();

    let next = doc.patch_block_style("nonexistent", &Style::with_height(10.0));

    assert_eq!(next, doc);
}

#[test]
fn test_patch_merges_style() {
    let doc = three_blocks();

    let next = doc.patch_block_style("b", &Style::new().with("height", "20px"));

    let style = next.find_block("b").unwrap().style().unwrap();
    assert_eq!(style.get("height"), Some("20px"));
    assert_eq!(style.get("color"), Some("red"));
    assert_eq!(style.len(), 2);
}

#[test]
fn test_patch_block_without_style() {
    let doc = three_blocks();

    let next = doc.patch_block_style("c", &Style::with_height(64.0));

    assert_eq!(
        next.find_block("c").unwrap().style().unwrap().height_px(),
        Some(64.0)
    );
}

#[test]
fn test_projection_is_stable() {
    let doc = three_blocks();

    let first = project(&doc);
    let second = project(&doc);

    assert_eq!(first, second);
    for block in doc.blocks() {
        assert_ids_in_projection(block, &first);
    }
}

#[test]
fn test_projection_carries_payload() {
    let tree = project(&three_blocks());

    let title = tree.find_block("b-title").unwrap();
    assert_eq!(title.children(), [webshape_model::RenderNode::text("Title")]);

    let image = tree.find_block("c").unwrap();
    assert_eq!(image.attribute("class"), Some("object-cover"));
    assert_eq!(image.attribute(SRC_ATTRIBUTE), Some("photo.png"));
    assert!(image.children().is_empty());
}
