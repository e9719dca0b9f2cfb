use super::*;
use pretty_assertions::assert_eq;

// === Rendering ===

#[test]
fn scalars_render_as_keywords() {
    assert_eq!(TypeNode::Int.to_string(), "INT");
    assert_eq!(TypeNode::Float.to_string(), "FLOAT");
    assert_eq!(TypeNode::Bool.to_string(), "BOOL");
    assert_eq!(TypeNode::String.to_string(), "STRING");
}

#[test]
fn name_renders_verbatim() {
    assert_eq!(TypeNode::name("Timestamp").to_string(), "Timestamp");
}

#[test]
fn array_rendering() {
    assert_eq!(TypeNode::array(TypeNode::Int, 3).to_string(), "ARRAY(3, INT)");
}

#[test]
fn map_rendering() {
    let map = TypeNode::map(TypeNode::String, TypeNode::Bool);
    assert_eq!(map.to_string(), "MAP[STRING]BOOL");
}

#[test]
fn slice_rendering() {
    assert_eq!(TypeNode::slice(TypeNode::Float).to_string(), "SLICE(FLOAT)");
}

#[test]
fn field_rendering() {
    let field = TypeNode::field("count", TypeNode::Int);
    assert_eq!(field.to_string(), "FIELD(count,INT)");
}

#[test]
fn nested_rendering() {
    let node = TypeNode::map(
        TypeNode::name("Key"),
        TypeNode::slice(TypeNode::array(TypeNode::Bool, 8)),
    );
    assert_eq!(node.to_string(), "MAP[Key]SLICE(ARRAY(8, BOOL))");
}

#[test]
fn struct_renders_sorted_field_names() {
    let mut fields = StructFields::new();
    fields.insert("zeta", TypeNode::Int);
    fields.insert("alpha", TypeNode::String);
    fields.insert("mid", TypeNode::slice(TypeNode::Float));
    let node = TypeNode::structure(fields);
    assert_eq!(node.to_string(), "STRUCT(alpha, mid, zeta)");
}

#[test]
fn empty_struct_rendering() {
    assert_eq!(
        TypeNode::structure(StructFields::new()).to_string(),
        "STRUCT()"
    );
}

// === Structure ===

#[test]
fn struct_duplicate_insert_is_reported() {
    let mut fields = StructFields::new();
    assert_eq!(fields.insert("x", TypeNode::Int), None);
    assert_eq!(fields.insert("x", TypeNode::Float), Some(TypeNode::Int));
    assert_eq!(fields.len(), 1);
    assert_eq!(fields.get("x"), Some(&TypeNode::Float));
}

#[test]
fn struct_fields_from_iterator() {
    let fields: StructFields = [("b", TypeNode::Bool), ("a", TypeNode::Int)]
        .into_iter()
        .collect();
    assert!(fields.contains("a"));
    assert!(!fields.is_empty());
    let names: Vec<&str> = fields.names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn children_follow_rendering_order() {
    let map = TypeNode::map(TypeNode::String, TypeNode::Int);
    assert_eq!(map.children(), vec![&TypeNode::String, &TypeNode::Int]);

    let fields: StructFields = [("y", TypeNode::Float), ("x", TypeNode::Bool)]
        .into_iter()
        .collect();
    let node = TypeNode::structure(fields);
    assert_eq!(node.children(), vec![&TypeNode::Bool, &TypeNode::Float]);

    assert!(TypeNode::Int.children().is_empty());
    assert!(TypeNode::name("T").children().is_empty());
}

#[test]
fn kind_names() {
    assert_eq!(TypeNode::array(TypeNode::Int, 1).kind_name(), "ARRAY");
    assert_eq!(TypeNode::field("f", TypeNode::Int).kind_name(), "FIELD");
    assert_eq!(TypeNode::name("T").kind_name(), "NAME");
    assert!(TypeNode::Bool.is_scalar());
    assert!(!TypeNode::slice(TypeNode::Bool).is_scalar());
}

#[test]
fn structural_equality() {
    let a = TypeNode::array(TypeNode::name("Point"), 4);
    let b = TypeNode::array(TypeNode::name("Point"), 4);
    let c = TypeNode::array(TypeNode::name("Point"), 5);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
