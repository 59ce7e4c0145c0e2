use outline_core::testing::{LineNumbers, SimpleNode};
use outline_core::{Binding, NodeKind, OutlineOption, SymKind, Symbol, collect_outline};
use pretty_assertions::assert_eq;

fn shallow() -> OutlineOption {
    OutlineOption::default()
}

fn deep() -> OutlineOption {
    OutlineOption::new().with_deep_scan(true)
}

fn outline(root: &SimpleNode, option: OutlineOption) -> Vec<Symbol> {
    collect_outline(root, &LineNumbers, option)
}

fn all_symbols(roots: &[Symbol]) -> Vec<&Symbol> {
    roots.iter().flat_map(|root| root.descendants()).collect()
}

fn assert_spans_nested(roots: &[Symbol]) {
    for symbol in all_symbols(roots) {
        assert!(symbol.start_line <= symbol.end_line, "{:?}", symbol.name);
        for member in &symbol.members {
            assert!(symbol.encloses(member), "{} !> {}", symbol.name, member.name);
        }
    }
}

/// ```text
///  1 class Animal {
///  2     var name: String
///  3     init(name: String) {
///  4         let tmp = name
///  5         func helper() {
///  6             var counter = 0
///  7         }
///  8         let after = 1
///  9     }
/// 10     func speak() {
/// 11         let sound = "..."
/// 12     }
/// 13     deinit {
/// 14     }
/// 15 }
/// ```
fn animal() -> SimpleNode {
    SimpleNode::root(vec![
        SimpleNode::decl(NodeKind::Class, "Animal", 1, 15).with_children(vec![
            SimpleNode::variable(Binding::new("name").with_annotation("String"), 2, 2),
            SimpleNode::initializer("(name: String)", 3, 9).with_children(vec![
                SimpleNode::other(3, 9).with_children(vec![
                    SimpleNode::variable(Binding::new("tmp").with_initializer("name"), 4, 4),
                    SimpleNode::decl(NodeKind::Function, "helper", 5, 7).with_children(vec![
                        SimpleNode::variable(Binding::new("counter").with_initializer("0"), 6, 6),
                    ]),
                    SimpleNode::variable(Binding::new("after").with_initializer("1"), 8, 8),
                ]),
            ]),
            SimpleNode::decl(NodeKind::Function, "speak", 10, 12).with_children(vec![
                SimpleNode::variable(Binding::new("sound").with_initializer("\"...\""), 11, 11),
            ]),
            SimpleNode::deinitializer(13, 14),
        ]),
    ])
}

#[test]
fn shallow_scan_treats_callables_as_leaves() {
    let symbols = outline(&animal(), shallow());
    assert_spans_nested(&symbols);

    assert_eq!(symbols.len(), 1);
    let class = &symbols[0];
    assert_eq!(class.kind, SymKind::Class);
    assert_eq!((class.start_line, class.end_line), (1, 15));
    assert_eq!(
        class.member_names(),
        vec!["name", "init(name: String)", "speak", "deinit"]
    );

    for symbol in all_symbols(&symbols) {
        if symbol.kind.is_callable() {
            assert!(symbol.members.is_empty(), "{} has members", symbol.name);
        }
    }
}

#[test]
fn deep_scan_suppresses_body_locals() {
    let symbols = outline(&animal(), deep());
    assert_spans_nested(&symbols);

    let class = &symbols[0];
    assert_eq!(
        class.member_names(),
        vec!["name", "init(name: String)", "speak", "deinit"]
    );

    let init = class.member("init(name: String)").unwrap();
    assert_eq!(init.kind, SymKind::Init);
    assert_eq!(init.member_names(), vec!["helper"]);
    assert!(init.members[0].members.is_empty());

    let names: Vec<_> = all_symbols(&symbols).iter().map(|s| s.name.as_str()).collect();
    for local in ["tmp", "counter", "after", "sound"] {
        assert!(!names.contains(&local), "{local} should be suppressed");
    }
    assert!(names.contains(&"name"));
}

#[test]
fn deep_scan_restores_state_after_nested_function() {
    // func outer() { func inner() {} }; struct Afterward { let kept = 1 }
    let root = SimpleNode::root(vec![
        SimpleNode::decl(NodeKind::Function, "outer", 1, 5).with_children(vec![
            SimpleNode::decl(NodeKind::Function, "inner", 2, 3),
            SimpleNode::variable(Binding::new("local"), 4, 4),
        ]),
        SimpleNode::decl(NodeKind::Struct, "Afterward", 6, 8).with_children(vec![
            SimpleNode::variable(Binding::new("kept"), 7, 7),
        ]),
        SimpleNode::variable(Binding::new("global"), 9, 9),
    ]);

    let symbols = outline(&root, deep());
    let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["outer", "Afterward", "global"]);
    assert_eq!(symbols[0].member_names(), vec!["inner"]);
    assert_eq!(symbols[1].member_names(), vec!["kept"]);
}

#[test]
fn deep_scan_type_nested_in_function_still_suppresses_variables() {
    // A struct declared inside a function body is collected, but its
    // properties are still inside the function body.
    let root = SimpleNode::root(vec![
        SimpleNode::decl(NodeKind::Function, "build", 1, 6).with_children(vec![
            SimpleNode::decl(NodeKind::Struct, "Local", 2, 5).with_children(vec![
                SimpleNode::variable(Binding::new("field"), 3, 3),
                SimpleNode::decl(NodeKind::Function, "method", 4, 4),
            ]),
        ]),
    ]);

    let symbols = outline(&root, deep());
    let local = symbols[0].member("Local").unwrap();
    assert_eq!(local.member_names(), vec!["method"]);
    assert_eq!(local.members[0].kind, SymKind::Func);
}

#[test]
fn source_order_is_preserved() {
    let root = SimpleNode::root(vec![
        SimpleNode::decl(NodeKind::Struct, "S", 1, 10).with_children(vec![
            SimpleNode::decl(NodeKind::Function, "b", 2, 2),
            SimpleNode::variable(Binding::new("a"), 3, 3),
            SimpleNode::decl(NodeKind::Enum, "E", 4, 6),
            SimpleNode::decl(NodeKind::Function, "c", 7, 9),
        ]),
        SimpleNode::decl(NodeKind::Protocol, "P", 11, 12),
    ]);

    let symbols = outline(&root, shallow());
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].member_names(), vec!["b", "a", "E", "c"]);
    assert_eq!(symbols[1].kind, SymKind::Protocol);
}

#[test]
fn overloaded_initializers_have_distinct_names() {
    let root = SimpleNode::root(vec![
        SimpleNode::decl(NodeKind::Struct, "Point", 1, 6).with_children(vec![
            SimpleNode::initializer("(x: Double, y: Double)", 2, 2),
            SimpleNode::initializer("  (polar r: Double, theta: Double) ", 3, 3),
            SimpleNode::initializer("()", 4, 4),
        ]),
    ]);

    let symbols = outline(&root, shallow());
    assert_eq!(
        symbols[0].member_names(),
        vec![
            "init(x: Double, y: Double)",
            "init(polar r: Double, theta: Double)",
            "init()"
        ]
    );
}

#[test]
fn extension_name_is_full_type_expression() {
    let root = SimpleNode::root(vec![
        SimpleNode::extension("  Array<Element> ", 1, 3),
        SimpleNode::extension("Swift.Dictionary<String, [Int]>", 4, 5),
    ]);

    let symbols = outline(&root, shallow());
    assert_eq!(symbols[0].kind, SymKind::Extension);
    assert_eq!(symbols[0].name, "Array<Element>");
    assert_eq!(symbols[1].name, "Swift.Dictionary<String, [Int]>");
}

#[test]
fn type_labels_follow_rule_priority() {
    let cases = [
        (Binding::new("a").with_annotation("Foo").with_initializer("Bar()"), Some("Foo")),
        (Binding::new("b").with_initializer("Baz()"), Some("Baz")),
        (Binding::new("c").with_initializer("1.5"), Some("Double")),
        (Binding::new("d").with_initializer("true"), Some("Bool")),
        (Binding::new("e").with_initializer("Color.red"), Some("Color")),
        (Binding::new("f").with_initializer("[1,2,3]"), Some("Array")),
        (Binding::new("g").with_initializer("[\"k\":\"v\"]"), Some("Dictionary")),
        (Binding::new("h").with_initializer("other"), None),
    ];

    let children = cases
        .iter()
        .enumerate()
        .map(|(i, (binding, _))| SimpleNode::variable(binding.clone(), i + 1, i + 1))
        .collect();
    let root = SimpleNode::root(children);

    let symbols = outline(&root, OutlineOption::new().with_show_type(true));
    let actual: Vec<_> = symbols.iter().map(|s| s.ty.as_deref()).collect();
    let expected: Vec<_> = cases.iter().map(|(_, ty)| *ty).collect();
    assert_eq!(actual, expected);
}

#[test]
fn protocols_and_enums_are_containers_in_both_modes() {
    let root = SimpleNode::root(vec![
        SimpleNode::decl(NodeKind::Protocol, "Vehicle", 1, 4).with_children(vec![
            SimpleNode::variable(Binding::new("wheels").with_annotation("Int"), 2, 2),
            SimpleNode::decl(NodeKind::Function, "drive", 3, 3),
        ]),
        SimpleNode::decl(NodeKind::Enum, "Direction", 5, 9).with_children(vec![
            SimpleNode::other(6, 6),
            SimpleNode::decl(NodeKind::Function, "flipped", 7, 8),
        ]),
    ]);

    for option in [shallow(), deep()] {
        let symbols = outline(&root, option);
        assert_eq!(symbols[0].member_names(), vec!["wheels", "drive"]);
        assert_eq!(symbols[1].member_names(), vec!["flipped"]);
    }
}

#[test]
fn empty_tree_yields_no_symbols() {
    let root = SimpleNode::root(Vec::new());
    assert!(outline(&root, shallow()).is_empty());
    assert!(outline(&root, deep()).is_empty());
}
