//! Narrow type-checker seam over the parsed program.
//!
//! The pipeline only ever needs five queries: resolve a namespace export,
//! list a module's exports, fetch the declared type of an exported symbol,
//! enumerate the properties of a type, and print a type as a string. The
//! `TypeChecker` trait pins that seam; `ProgramChecker` implements it as a
//! best-effort walk over tree-sitter parse trees. Every lookup returns an
//! empty or absent result instead of failing.

use std::path::Path;
use tree_sitter::Node;

use super::parser::{node_text, SourceModule};
use super::ProgramContext;

/// Opaque handle to a type node inside the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef {
    pub(crate) module: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// One property of a resolved type.
#[derive(Debug, Clone)]
pub struct TypeProperty {
    pub name: String,
    pub optional: bool,
    pub doc: Option<String>,
    pub ty: TypeRef,
}

/// The checker interface the pipeline depends on. Implementations resolve
/// everything best-effort; absence of a signal is a valid terminal state.
pub trait TypeChecker {
    /// A type exported from a namespace declared anywhere in the program,
    /// e.g. `JSX` -> `IntrinsicElements`.
    fn resolve_namespace_export(&self, namespace: &str, export: &str) -> Option<TypeRef>;

    /// Names of the exported type declarations of a module.
    fn module_exports(&self, file: &Path) -> Vec<String>;

    /// The declared type of an exported symbol in a module.
    fn type_of_export(&self, file: &Path, name: &str) -> Option<TypeRef>;

    /// Properties of a type, resolving named references program-wide.
    fn properties_of_type(&self, ty: &TypeRef) -> Vec<TypeProperty>;

    /// Source-derived display string for a type, whitespace-normalized.
    fn type_to_string(&self, ty: &TypeRef) -> String;
}

/// Reference-chasing depth limit; guards against cyclic type aliases.
const MAX_RESOLVE_DEPTH: u8 = 8;

/// Tree-walking `TypeChecker` over a [`ProgramContext`].
pub struct ProgramChecker<'p> {
    program: &'p ProgramContext,
}

impl<'p> ProgramChecker<'p> {
    pub(crate) fn new(program: &'p ProgramContext) -> Self {
        Self { program }
    }

    fn node_at(&self, ty: &TypeRef) -> Option<(Node<'p>, &'p SourceModule)> {
        let module = self.program.modules().get(ty.module)?;
        let mut node = module
            .tree
            .root_node()
            .descendant_for_byte_range(ty.start, ty.end)?;
        // descendant_for_byte_range returns the smallest covering node; climb
        // back to the outermost node with the stored range.
        while let Some(parent) = node.parent() {
            if parent.start_byte() == ty.start && parent.end_byte() == ty.end {
                node = parent;
            } else {
                break;
            }
        }
        Some((node, module))
    }

    /// Module indices with non-declaration files first, matching the order
    /// the intrinsic-elements scan resolves symbols in.
    fn module_order(&self) -> Vec<usize> {
        let modules = self.program.modules();
        let mut order: Vec<usize> = (0..modules.len())
            .filter(|&i| !modules[i].is_declaration_file())
            .collect();
        order.extend((0..modules.len()).filter(|&i| modules[i].is_declaration_file()));
        order
    }

    fn resolve_type_name(&self, name: &str) -> Option<TypeRef> {
        for (idx, module) in self.program.modules().iter().enumerate() {
            for node in descendants(module.tree.root_node()) {
                if !matches!(
                    node.kind(),
                    "interface_declaration" | "type_alias_declaration"
                ) {
                    continue;
                }
                let Some(name_node) = node.child_by_field_name("name") else {
                    continue;
                };
                if node_text(&name_node, &module.source) == name {
                    return Some(type_ref(idx, &node));
                }
            }
        }
        None
    }

    fn resolve_and_recurse(&self, name: &str, depth: u8) -> Vec<TypeProperty> {
        self.resolve_type_name(last_segment(name))
            .map(|r| self.properties_with_depth(&r, depth.saturating_sub(1)))
            .unwrap_or_default()
    }

    fn properties_with_depth(&self, ty: &TypeRef, depth: u8) -> Vec<TypeProperty> {
        if depth == 0 {
            return Vec::new();
        }
        let Some((node, module)) = self.node_at(ty) else {
            return Vec::new();
        };
        match node.kind() {
            "interface_declaration" => node
                .child_by_field_name("body")
                .map(|body| self.members_of(body, ty.module, &module.source))
                .unwrap_or_default(),
            "interface_body" | "object_type" => {
                self.members_of(node, ty.module, &module.source)
            }
            "type_alias_declaration" => node
                .child_by_field_name("value")
                .map(|value| {
                    self.properties_with_depth(&type_ref(ty.module, &value), depth - 1)
                })
                .unwrap_or_default(),
            "type_identifier" | "nested_type_identifier" => {
                self.resolve_and_recurse(node_text(&node, &module.source), depth)
            }
            "generic_type" => node
                .child_by_field_name("name")
                .map(|name| {
                    self.resolve_and_recurse(node_text(&name, &module.source), depth)
                })
                .unwrap_or_default(),
            "intersection_type" => {
                let mut seen = std::collections::HashSet::new();
                let mut props = Vec::new();
                let mut cursor = node.walk();
                for part in node.named_children(&mut cursor) {
                    for prop in
                        self.properties_with_depth(&type_ref(ty.module, &part), depth - 1)
                    {
                        if seen.insert(prop.name.clone()) {
                            props.push(prop);
                        }
                    }
                }
                props
            }
            _ => Vec::new(),
        }
    }

    fn members_of(&self, body: Node<'p>, module_idx: usize, source: &str) -> Vec<TypeProperty> {
        let mut props = Vec::new();
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() != "property_signature" {
                continue;
            }
            let Some(name_node) = member.child_by_field_name("name") else {
                continue;
            };
            let Some(ty_node) = member
                .child_by_field_name("type")
                .and_then(|annotation| annotation.named_child(0))
            else {
                continue;
            };
            let name = unquote(node_text(&name_node, source)).to_string();
            props.push(TypeProperty {
                name,
                optional: has_optional_marker(&member),
                doc: doc_comment_for(&member, source),
                ty: type_ref(module_idx, &ty_node),
            });
        }
        props
    }
}

impl TypeChecker for ProgramChecker<'_> {
    fn resolve_namespace_export(&self, namespace: &str, export: &str) -> Option<TypeRef> {
        for idx in self.module_order() {
            let module = &self.program.modules()[idx];
            for node in descendants(module.tree.root_node()) {
                if !matches!(node.kind(), "internal_module" | "module") {
                    continue;
                }
                let Some(name_node) = node.child_by_field_name("name") else {
                    continue;
                };
                if node_text(&name_node, &module.source) != namespace {
                    continue;
                }
                let Some(body) = node.child_by_field_name("body") else {
                    continue;
                };
                if let Some(decl) = declaration_named(body, &module.source, export) {
                    return Some(type_ref(idx, &decl));
                }
            }
        }
        None
    }

    fn module_exports(&self, file: &Path) -> Vec<String> {
        let Some(idx) = self.program.module_index_for(file) else {
            return Vec::new();
        };
        let module = &self.program.modules()[idx];
        let root = module.tree.root_node();
        let mut names = Vec::new();
        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            if statement.kind() != "export_statement" {
                continue;
            }
            let Some(decl) = statement.child_by_field_name("declaration") else {
                continue;
            };
            if !matches!(
                decl.kind(),
                "interface_declaration" | "type_alias_declaration"
            ) {
                continue;
            }
            if let Some(name) = decl.child_by_field_name("name") {
                names.push(node_text(&name, &module.source).to_string());
            }
        }
        names
    }

    fn type_of_export(&self, file: &Path, name: &str) -> Option<TypeRef> {
        let idx = self.program.module_index_for(file)?;
        let module = &self.program.modules()[idx];
        let root = module.tree.root_node();
        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            if statement.kind() != "export_statement" {
                continue;
            }
            let Some(decl) = statement.child_by_field_name("declaration") else {
                continue;
            };
            let Some(name_node) = decl.child_by_field_name("name") else {
                continue;
            };
            if node_text(&name_node, &module.source) != name {
                continue;
            }
            return match decl.kind() {
                // The declared type of an alias is its right-hand side.
                "type_alias_declaration" => {
                    decl.child_by_field_name("value").map(|v| type_ref(idx, &v))
                }
                "interface_declaration" => Some(type_ref(idx, &decl)),
                _ => None,
            };
        }
        None
    }

    fn properties_of_type(&self, ty: &TypeRef) -> Vec<TypeProperty> {
        self.properties_with_depth(ty, MAX_RESOLVE_DEPTH)
    }

    fn type_to_string(&self, ty: &TypeRef) -> String {
        let Some((node, module)) = self.node_at(ty) else {
            return String::new();
        };
        let text = node_text(&node, &module.source);
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn type_ref(module: usize, node: &Node) -> TypeRef {
    TypeRef {
        module,
        start: node.start_byte(),
        end: node.end_byte(),
    }
}

/// All named descendants of a node, including the node itself.
fn descendants(root: Node) -> Vec<Node> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        for i in (0..node.named_child_count()).rev() {
            if let Some(child) = node.named_child(i) {
                stack.push(child);
            }
        }
    }
    out
}

/// Find an interface/type-alias/namespace declaration named `name` among the
/// direct statements of a namespace body, unwrapping `export` statements.
fn declaration_named<'t>(body: Node<'t>, source: &str, name: &str) -> Option<Node<'t>> {
    let mut cursor = body.walk();
    for statement in body.named_children(&mut cursor) {
        let decl = if statement.kind() == "export_statement" {
            match statement.child_by_field_name("declaration") {
                Some(decl) => decl,
                None => continue,
            }
        } else {
            statement
        };
        if !matches!(
            decl.kind(),
            "interface_declaration" | "type_alias_declaration" | "internal_module"
        ) {
            continue;
        }
        if let Some(name_node) = decl.child_by_field_name("name") {
            if node_text(&name_node, source) == name {
                return Some(decl);
            }
        }
    }
    None
}

fn has_optional_marker(member: &Node) -> bool {
    let mut cursor = member.walk();
    let has_marker = member.children(&mut cursor).any(|child| child.kind() == "?");
    has_marker
}

fn unquote(text: &str) -> &str {
    let text = text.trim();
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Last dotted segment of a type name (`React.ReactNode` -> `ReactNode`).
fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Resolve a printed type to a single string literal: either the type is a
/// literal itself or a union containing one. Anything else is "not found".
pub fn first_string_literal(text: &str) -> Option<String> {
    text.split('|')
        .map(str::trim)
        .find_map(|part| {
            let inner = unquote(part);
            if inner.len() != part.len() {
                Some(inner.to_string())
            } else {
                None
            }
        })
}

/// Extract the text of a `/** ... */` doc comment directly above a member.
fn doc_comment_for(member: &Node, source: &str) -> Option<String> {
    let sibling = member.prev_named_sibling()?;
    if sibling.kind() != "comment" {
        return None;
    }
    let text = node_text(&sibling, source);
    if !text.starts_with("/**") {
        return None;
    }
    clean_doc_comment(text)
}

fn clean_doc_comment(text: &str) -> Option<String> {
    let body = text
        .trim_start_matches("/**")
        .trim_end_matches("*/")
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}
