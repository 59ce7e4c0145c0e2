use outline_core::NodeKind;

define_lang! {
    Swift,
    (class_declaration, "class_declaration", NodeKind::Class),
    (protocol_declaration, "protocol_declaration", NodeKind::Protocol),
    (function_declaration, "function_declaration", NodeKind::Function),
    (protocol_function_declaration, "protocol_function_declaration", NodeKind::Function),
    (init_declaration, "init_declaration", NodeKind::Initializer),
    (deinit_declaration, "deinit_declaration", NodeKind::Deinitializer),
    (property_declaration, "property_declaration", NodeKind::Variable),
    (protocol_property_declaration, "protocol_property_declaration", NodeKind::Variable),
}

#[allow(non_upper_case_globals)]
impl LangSwift {
    pub const field_name: &'static str = "name";
    pub const field_value: &'static str = "value";
    pub const field_declaration_kind: &'static str = "declaration_kind";

    pub const pattern: &'static str = "pattern";
    pub const type_annotation: &'static str = "type_annotation";
    pub const user_type: &'static str = "user_type";
    pub const type_identifier: &'static str = "type_identifier";

    /// Refine a `class_declaration` by its introducing keyword.
    ///
    /// The grammar uses one node for classes, structs, actors, enums and
    /// extensions; the keyword is what tells them apart.
    pub fn declaration_kind(keyword: &str) -> Option<NodeKind> {
        match keyword {
            "class" => Some(NodeKind::Class),
            "struct" => Some(NodeKind::Struct),
            "actor" => Some(NodeKind::Actor),
            "enum" => Some(NodeKind::Enum),
            "extension" => Some(NodeKind::Extension),
            _ => None,
        }
    }
}
