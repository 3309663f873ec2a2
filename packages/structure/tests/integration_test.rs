//! End-to-end tests for structure editing.
//!
//! Works on a small municipal regulation with one chapter holding two
//! articles.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use regelrecht_structure::config::parse_cursor_path;
use regelrecht_structure::document::{Node, Step, NUMBER_ATTR, RESOURCE_ATTR};
use regelrecht_structure::i18n::{KeyTranslator, TranslationCatalog};
use regelrecht_structure::{
    create_default_structures, insert_structure, move_structure, recalculate_all,
    remove_structure, Direction, EditorState, NodeKind, StructureError, StructureRegistry,
    Transaction,
};

const BESLUIT: &str = "http://data.lblod.info/besluiten/1";
const C1: &str = "http://data.lblod.info/chapters/c1";
const A1: &str = "http://data.lblod.info/articles/a1";
const A2: &str = "http://data.lblod.info/articles/a2";

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn besluit() -> EditorState {
    EditorState::from_markup(&load_fixture("besluit.xml")).unwrap()
}

fn insert(state: &EditorState, cursor: &str, name: &str) -> (EditorState, Transaction) {
    let registry = create_default_structures();
    let tx = insert_structure(
        state,
        &registry,
        &parse_cursor_path(cursor).unwrap(),
        name,
        None,
        &KeyTranslator,
    )
    .unwrap()
    .unwrap_or_else(|| panic!("no insertion point for {name} at {cursor}"));
    (state.apply(&tx).unwrap(), tx)
}

/// Displayed numbers of all nodes of `kind`, in document order.
fn numbers(state: &EditorState, kind: NodeKind) -> Vec<String> {
    state
        .doc()
        .descendants()
        .into_iter()
        .filter(|(_, n)| n.kind == kind)
        .map(|(_, n)| n.displayed_number().unwrap_or_default().to_string())
        .collect()
}

fn number_of(state: &EditorState, resource: &str) -> String {
    let path = state.doc().find_resource(resource).unwrap();
    state
        .doc()
        .node_at(&path)
        .unwrap()
        .displayed_number()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_insert_article_after_first_in_chapter() {
    let state = besluit();
    // cursor in the paragraph of article 1
    let (next, tx) = insert(&state, "0/1/0/1/0/1/0", "article");
    let created = tx.created_resource().unwrap();

    assert_eq!(numbers(&next, NodeKind::Article), vec!["1", "2", "3"]);
    assert_eq!(numbers(&next, NodeKind::Chapter), vec!["I"]);
    assert_eq!(number_of(&next, created), "2");
    assert_eq!(number_of(&next, A2), "3");

    // the new article sits between a1 and a2
    let path = next.doc().find_resource(created).unwrap();
    assert_eq!(path.to_string(), "/0/1/0/1/1");

    assert!(next.graph().contains(C1, "say:hasPart", created));
    assert!(next.graph().contains(created, "rdf:type", "say:Article"));
}

#[test]
fn test_insert_leaves_previous_state_untouched() {
    let state = besluit();
    let (next, _) = insert(&state, "0/1/0/1/0", "article");

    assert_eq!(numbers(&state, NodeKind::Article), vec!["1", "2"]);
    assert_eq!(numbers(&next, NodeKind::Article).len(), 3);
    assert_eq!(state, besluit());
}

#[test]
fn test_insert_is_one_transaction() {
    let state = besluit();
    let (_, tx) = insert(&state, "0/1/0/1/0", "article");

    let steps = tx.steps();
    assert!(matches!(steps[0], Step::ReplaceChildren { .. }));
    assert!(steps
        .iter()
        .any(|s| matches!(s, Step::AddProperty { property, .. } if property.object == tx.created_resource().unwrap())));
    // a2 moves from 2 to 3 in the same transaction
    assert!(steps.iter().any(|s| matches!(s, Step::SetAttr { value, .. } if value == "3")));
}

#[test]
fn test_articles_number_across_chapters() {
    let state = besluit();
    let (with_chapter, tx) = insert(&state, "0/1/0", "chapter");
    let chapter = tx.created_resource().unwrap().to_string();

    assert_eq!(numbers(&with_chapter, NodeKind::Chapter), vec!["I", "II"]);
    assert!(with_chapter.graph().contains(BESLUIT, "say:hasPart", &chapter));

    // the new chapter body only holds a placeholder paragraph, which is wrapped
    let (next, tx) = insert(&with_chapter, "0/1/1/1", "article");
    let article = tx.created_resource().unwrap();

    assert_eq!(numbers(&next, NodeKind::Article), vec!["1", "2", "3"]);
    assert_eq!(number_of(&next, article), "3");
    assert!(next.graph().contains(&chapter, "say:hasPart", article));

    let path = next.doc().find_resource(article).unwrap();
    assert_eq!(path.to_string(), "/0/1/1/1/0");
    let body = &next.doc().node_at(&path).unwrap().children[1];
    assert_eq!(body.kind, NodeKind::ArticleBody);
    assert_eq!(body.children[0].kind, NodeKind::Paragraph);
}

#[test]
fn test_insert_chapter_with_article_content_continues_numbering() {
    let state = besluit();
    let registry = create_default_structures();
    let moved_article = Node::new(NodeKind::Article)
        .with_attr(RESOURCE_ATTR, "http://data.lblod.info/articles/a3")
        .with_child(Node::new(NodeKind::StructureHeader).with_attr(NUMBER_ATTR, "1"))
        .with_child(Node::new(NodeKind::ArticleBody).with_child(Node::paragraph("Slotbepaling")));

    let tx = insert_structure(
        &state,
        &registry,
        &parse_cursor_path("0/1/0").unwrap(),
        "chapter",
        Some(vec![moved_article]),
        &KeyTranslator,
    )
    .unwrap()
    .unwrap();
    let next = state.apply(&tx).unwrap();

    assert_eq!(numbers(&next, NodeKind::Chapter), vec!["I", "II"]);
    assert_eq!(numbers(&next, NodeKind::Article), vec!["1", "2", "3"]);
    assert_eq!(number_of(&next, "http://data.lblod.info/articles/a3"), "3");
}

#[test]
fn test_sections_restart_per_chapter() {
    let state = besluit();
    let (next, _) = insert(&state, "0/1/0/1/1", "section");
    let (next, _) = insert(&next, "0/1/0", "chapter");
    let (next, _) = insert(&next, "0/1/1/1", "section");

    assert_eq!(numbers(&next, NodeKind::Chapter), vec!["I", "II"]);
    assert_eq!(numbers(&next, NodeKind::Section), vec!["I", "I"]);
}

#[test]
fn test_context_is_enforced() {
    let state = besluit();
    let registry = create_default_structures();

    // a subsection needs a section body
    let cursor = parse_cursor_path("0/1/0/1/0").unwrap();
    let tx = insert_structure(&state, &registry, &cursor, "subsection", None, &KeyTranslator)
        .unwrap();
    assert!(tx.is_none());

    // a section cannot go into the decision body directly
    let cursor = parse_cursor_path("0/0").unwrap();
    let tx = insert_structure(&state, &registry, &cursor, "section", None, &KeyTranslator).unwrap();
    assert!(tx.is_none());
}

#[test]
fn test_unknown_structure_is_rejected() {
    let state = besluit();
    let registry = create_default_structures();
    let cursor = parse_cursor_path("0/1").unwrap();

    let err = insert_structure(&state, &registry, &cursor, "paragraaf", None, &KeyTranslator)
        .unwrap_err();
    assert!(matches!(err, StructureError::UnknownStructure(name) if name == "paragraaf"));
}

#[test]
fn test_limited_registry() {
    let full = create_default_structures();
    let mut registry = StructureRegistry::new();
    registry.register(full.lookup("article").unwrap().clone());

    let state = besluit();
    let cursor = parse_cursor_path("0/1/0").unwrap();
    let err = insert_structure(&state, &registry, &cursor, "chapter", None, &KeyTranslator)
        .unwrap_err();
    assert!(matches!(err, StructureError::UnknownStructure(_)));
}

#[test]
fn test_predicate_anchor_uses_document_order() {
    let markup = r#"
        <doc>
          <besluit resource="http://data.lblod.info/besluiten/1">
            <link property="say:hasPart" href="http://data.lblod.info/chapters/c2"/>
            <link property="say:hasPart" href="http://data.lblod.info/chapters/c1"/>
            <besluit_title>Titel</besluit_title>
            <article_container property="say:body">
              <chapter resource="http://data.lblod.info/chapters/c1">
                <structure_header level="2" number="I"/>
                <chapter_body property="say:body"/>
              </chapter>
              <chapter resource="http://data.lblod.info/chapters/c2">
                <structure_header level="2" number="II"/>
                <chapter_body property="say:body"/>
              </chapter>
            </article_container>
          </besluit>
        </doc>"#;
    let state = EditorState::from_markup(markup.trim()).unwrap();

    // cursor in the decision title: no container above it
    let (next, tx) = insert(&state, "0/0", "article");
    let path = next.doc().find_resource(tx.created_resource().unwrap()).unwrap();
    assert_eq!(path.to_string(), "/0/1/0/1/0");
    assert_eq!(number_of(&next, tx.created_resource().unwrap()), "1");
}

#[test]
fn test_move_article_down_and_boundaries() {
    let state = besluit();
    let registry = create_default_structures();

    assert!(move_structure(&state, &registry, A1, Direction::Up)
        .unwrap()
        .is_none());
    assert!(move_structure(&state, &registry, A2, Direction::Down)
        .unwrap()
        .is_none());

    let tx = move_structure(&state, &registry, A1, Direction::Down)
        .unwrap()
        .unwrap();
    let next = state.apply(&tx).unwrap();
    assert_eq!(number_of(&next, A1), "2");
    assert_eq!(number_of(&next, A2), "1");
    assert_eq!(
        next.doc().find_resource(A2).unwrap().to_string(),
        "/0/1/0/1/0"
    );
}

#[test]
fn test_remove_chapter_prunes_graph() {
    let state = besluit();
    let registry = create_default_structures();

    let tx = remove_structure(&state, &registry, C1).unwrap().unwrap();
    let next = state.apply(&tx).unwrap();

    assert!(next.doc().find_resource(C1).is_none());
    assert!(next.doc().find_resource(A1).is_none());
    assert!(!next.graph().contains(BESLUIT, "say:hasPart", C1));
    assert!(next
        .graph()
        .match_pattern(Some(&format!(">{A1}")), None, None)
        .is_empty());
    assert!(next.graph().match_pattern(None, None, Some(A2)).is_empty());
}

#[test]
fn test_recalculate_repairs_numbers() {
    let markup = load_fixture("besluit.xml")
        .replace(r#"number="I""#, r#"number="IV""#)
        .replace(r#"number="2""#, r#"number="7""#);
    let state = EditorState::from_markup(&markup).unwrap();
    let registry = create_default_structures();

    let tx = recalculate_all(&state, &registry).unwrap();
    assert_eq!(tx.len(), 2);
    let next = state.apply(&tx).unwrap();
    assert_eq!(numbers(&next, NodeKind::Chapter), vec!["I"]);
    assert_eq!(numbers(&next, NodeKind::Article), vec!["1", "2"]);

    assert!(recalculate_all(&next, &registry).unwrap().is_empty());
}

#[test]
fn test_markup_round_trip_after_edits() {
    let state = besluit();
    let (next, _) = insert(&state, "0/1/0/1/0", "article");

    let reparsed = EditorState::from_markup(&next.to_markup()).unwrap();
    assert_eq!(reparsed, next);
}

#[test]
fn test_placeholders_are_translated() {
    let state = besluit();
    let registry = create_default_structures();
    let catalog = TranslationCatalog::from_yaml(
        "article-structure-plugin:\n  placeholder:\n    article:\n      heading: Opschrift\n      body: Voer tekst in\n",
    )
    .unwrap();

    let cursor = parse_cursor_path("0/1/0/1/1").unwrap();
    let tx = insert_structure(&state, &registry, &cursor, "article", None, &catalog)
        .unwrap()
        .unwrap();
    let next = state.apply(&tx).unwrap();
    assert!(next.to_markup().contains("Voer tekst in"));
    assert!(next.to_markup().contains("Opschrift"));
}
