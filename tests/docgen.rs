use api_docgen::path_de::load_service;
use api_docgen::render::render;
use api_docgen::{assemble, resolve, DocOptions, Member, ServiceSpec, Template, TypeDef, TypeRegistry};
use serde_json::json;

fn service() -> ServiceSpec {
    let doc = json!({
        "types": [
            {"kind": "struct", "name": "User", "members": [
                {"name": "ID", "tag": "`json:\"id\"`", "type": {"kind": "primitive", "name": "int"}},
                {"name": "Name", "tag": "`json:\"name\"`", "type": {"kind": "primitive", "name": "string"}}
            ]},
            {"kind": "struct", "name": "Wrapper", "members": [
                {"name": "Items", "tag": "`json:\"items\"`", "comment": "// page of users",
                 "type": {"kind": "array", "name": "[]User", "value": {"kind": "struct", "name": "User"}}},
                {"name": "Total", "tag": "`json:\"total\"`", "comment": " total count",
                 "type": {"kind": "primitive", "name": "int"}}
            ]},
            {"kind": "struct", "name": "Tree", "members": [
                {"name": "Parent", "tag": "", "type": {"kind": "pointer", "name": "*Tree",
                    "inner": {"kind": "struct", "name": "Tree"}}},
                {"name": "Leaves", "tag": "", "type": {"kind": "map", "name": "map[string]Leaf",
                    "key": {"kind": "primitive", "name": "string"},
                    "value": {"kind": "struct", "name": "Leaf"}}}
            ]},
            {"kind": "struct", "name": "Leaf", "members": [
                {"name": "Owner", "tag": "", "type": {"kind": "struct", "name": "Tree"}}
            ]}
        ],
        "routes": [
            {"method": "get", "path": "/users/:id",
             "response_type": {"kind": "struct", "name": "User"},
             "doc": {"title": "Get user", "summary": " fetch one user "}},
            {"method": "get", "path": "/users",
             "request_type": {"kind": "struct", "name": "Wrapper"},
             "response_type": {"kind": "struct", "name": "Wrapper"},
             "doc": {"title": "List users"}}
        ]
    });
    load_service(&doc.to_string()).unwrap()
}

fn registry(spec: &ServiceSpec) -> TypeRegistry {
    TypeRegistry::new(spec.types.iter().cloned())
}

fn render_route(index: usize) -> String {
    let spec = service();
    let only = ServiceSpec { types: spec.types.clone(), routes: vec![spec.routes[index].clone()] };
    let template = Template::parse("{{.requestContent}}|{{.responseContent}}").unwrap();
    assemble(&only, &template, &DocOptions::default()).unwrap()
}

#[test]
fn user_response_renders_single_block() {
    let out = render_route(0);
    assert_eq!(
        out,
        "|\n\n```golang\ntype User struct {\n\tID int `json:\"id\"`\n\tName string `json:\"name\"`\n}\n```\n"
    );
}

#[test]
fn wrapper_references_user_by_name() {
    let spec = service();
    let wrapper = registry(&spec).lookup("Wrapper").cloned().unwrap();
    let set = resolve(&wrapper, &registry(&spec)).unwrap();
    assert_eq!(set.keys().collect::<Vec<_>>(), ["Wrapper", "User"]);

    let out = render_route(1);
    let (request, response) = out.split_once('|').unwrap();
    assert_eq!(request, response);
    assert!(request.contains("\tItems []User `json:\"items\"` // page of users\n"));
    assert!(request.contains("\tTotal int `json:\"total\"` // total count\n"));
    assert_eq!(request.matches("type User struct").count(), 1);
    assert!(!request.contains("type int"));
}

#[test]
fn mutual_cycle_renders_each_type_once() {
    let spec = service();
    let reg = registry(&spec);
    let tree = reg.lookup("Tree").cloned().unwrap();
    let set = resolve(&tree, &reg).unwrap();
    assert_eq!(set.keys().collect::<Vec<_>>(), ["Tree", "*Tree", "Leaf"]);
}

#[test]
fn whole_document_is_deterministic() {
    let template = Template::markdown().unwrap();
    let first = assemble(&service(), &template, &DocOptions::default()).unwrap();
    let second = assemble(&service(), &template, &DocOptions::default()).unwrap();
    assert_eq!(first, second);

    assert!(first.starts_with("### 1. Get user\n\nsummary: fetch one user\n"));
    assert!(first.contains("- Method: GET\n- Request: `-`\n- Response: `User`\n"));
    assert!(first.contains("### 2. List users"));
    assert!(first.find("### 1.").unwrap() < first.find("### 2.").unwrap());
}

#[test]
fn value_and_pointer_members_render_one_block_each() {
    let t = TypeDef::structure("T", vec![Member::new("N", TypeDef::primitive("int"), "")]);
    let s = TypeDef::structure(
        "S",
        vec![
            Member::new("Plain", TypeDef::reference("T"), ""),
            Member::new("Ptr", TypeDef::pointer(TypeDef::reference("T")), ""),
        ],
    );
    let reg = TypeRegistry::new([t, s.clone()]);
    let out = render(&resolve(&s, &reg).unwrap()).unwrap();
    assert_eq!(out.matches("type S struct").count(), 1);
    assert_eq!(out.matches("type T struct").count(), 2);
    assert!(out.contains("\tPlain T\n\tPtr *T\n"));
}

#[test]
fn unsupported_template_action_aborts_before_rendering() {
    let err = Template::parse("{{if .title}}T={{.title}}{{end}} {{ .uri | html }}\n").unwrap_err();
    assert_eq!(err.to_string(), "unsupported template action `{{if .title}}`");
}
