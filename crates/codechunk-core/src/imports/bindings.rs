//! Per-language import-binding extraction (§4.5).
//!
//! For a given import node, determines the set of names it introduces into
//! scope. Keyed by `(language, node.kind())` so that languages which reuse
//! the same grammar node-type string for different constructs — Java and Go
//! both call their import node `import_declaration` — never share a
//! dispatch arm (see `DESIGN.md`).

use tree_sitter::Node;

/// Wildcard sentinel: when present in a node's bindings, the import filter
/// must include every global import for that chunk.
pub const WILDCARD: &str = "*";

/// Bindings introduced by one import node: the bound names (possibly
/// including [`WILDCARD`]).
pub type Bindings = Vec<String>;

fn text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or_default().to_string()
}

fn last_path_segment(dotted: &str) -> String {
    dotted.rsplit(['.', ':', '/', '\\']).next().unwrap_or(dotted).to_string()
}

fn strip_quotes(literal: &str) -> &str {
    literal.trim_matches(|c| c == '"' || c == '\'' || c == '<' || c == '>')
}

fn basename_without_extension(path: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or(path);
    base.split('.').next().unwrap_or(base).to_string()
}

/// Extract the bound names introduced by `node`, an import node already
/// known to be of type `node.kind()` in the given `language`'s profile.
pub fn extract_bindings(language: &str, node: Node, source: &[u8]) -> Bindings {
    match (language, node.kind()) {
        ("python", "import_statement") => python_import_statement(node, source),
        ("python", "import_from_statement") => python_import_from_statement(node, source),
        ("javascript" | "typescript" | "tsx", "import_statement") => js_import_statement(node, source),
        ("rust", "use_declaration") => rust_use_declaration(node, source),
        ("rust", "extern_crate_declaration") => rust_extern_crate(node, source),
        ("go", "import_declaration") => go_import_declaration(node, source),
        ("java", "import_declaration") => java_import_declaration(node, source),
        ("c" | "c++", "preproc_include") => c_preproc_include(node, source),
        ("c" | "c++", "preproc_def") => c_preproc_def(node, source),
        ("c#", "using_directive") => csharp_using_directive(node, source),
        ("php", "use_declaration") => php_use_declaration(node, source),
        ("php", "include_expression" | "require_expression") => vec![WILDCARD.to_string()],
        _ => generic_fallback(node, source),
    }
}

fn python_dotted_root(node: Node, source: &[u8]) -> String {
    let full = text(node, source);
    full.split('.').next().unwrap_or(&full).trim().to_string()
}

fn python_import_statement(node: Node, source: &[u8]) -> Bindings {
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "dotted_name" => names.push(python_dotted_root(child, source)),
            "aliased_import" => {
                if let Some(alias) = child.child_by_field_name("alias") {
                    names.push(text(alias, source));
                }
            }
            _ => {}
        }
    }
    names
}

fn python_import_from_statement(node: Node, source: &[u8]) -> Bindings {
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "wildcard_import" => names.push(WILDCARD.to_string()),
            "*" => names.push(WILDCARD.to_string()),
            "aliased_import" => {
                if let Some(alias) = child.child_by_field_name("alias") {
                    names.push(text(alias, source));
                }
            }
            "dotted_name" | "identifier" => {
                // The first dotted_name after `from` is the module, not a binding;
                // only identifiers following `import` bind names. Distinguish by
                // checking this child comes after an `import` keyword sibling.
                if preceded_by_import_keyword(node, child) {
                    names.push(text(child, source));
                }
            }
            _ => {}
        }
    }
    names
}

fn preceded_by_import_keyword(parent: Node, target: Node) -> bool {
    let mut seen_import = false;
    let mut cursor = parent.walk();
    for child in parent.children(&mut cursor) {
        if child.kind() == "import" {
            seen_import = true;
        }
        if child.id() == target.id() {
            return seen_import;
        }
    }
    false
}

fn js_import_statement(node: Node, source: &[u8]) -> Bindings {
    let mut names = Vec::new();
    let Some(clause) = node.child_by_field_name("import_clause").or_else(|| find_child_kind(node, "import_clause"))
    else {
        return names;
    };
    let mut stack = vec![clause];
    while let Some(n) = stack.pop() {
        match n.kind() {
            "identifier" => names.push(text(n, source)),
            "namespace_import" => {
                if let Some(id) = find_child_kind(n, "identifier") {
                    names.push(text(id, source));
                }
            }
            "import_specifier" => {
                let bound = n.child_by_field_name("alias").or_else(|| n.child_by_field_name("name"));
                if let Some(id) = bound {
                    names.push(text(id, source));
                }
            }
            _ => {
                let mut cursor = n.walk();
                for child in n.children(&mut cursor) {
                    stack.push(child);
                }
            }
        }
    }
    names
}

fn find_child_kind(node: Node, kind: &str) -> Option<Node> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == kind)
}

fn rust_use_declaration(node: Node, source: &[u8]) -> Bindings {
    let mut names = Vec::new();
    if let Some(tree) = node.child_by_field_name("argument") {
        collect_rust_use_tree(tree, source, &mut names);
    }
    names
}

fn collect_rust_use_tree(node: Node, source: &[u8], names: &mut Bindings) {
    match node.kind() {
        "identifier" | "self" => names.push(text(node, source)),
        "use_as_clause" => {
            if let Some(alias) = node.child_by_field_name("alias") {
                names.push(text(alias, source));
            }
        }
        "use_wildcard" | "*" => names.push(WILDCARD.to_string()),
        "use_list" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                collect_rust_use_tree(child, source, names);
            }
        }
        "scoped_identifier" | "scoped_use_list" => {
            if let Some(name) = node.child_by_field_name("name") {
                collect_rust_use_tree(name, source, names);
            }
            if let Some(list) = node.child_by_field_name("list") {
                collect_rust_use_tree(list, source, names);
            }
            if node.child_by_field_name("name").is_none() && node.child_by_field_name("list").is_none() {
                // Leaf scoped path with no further structure: last segment only.
                names.push(last_path_segment(&text(node, source)));
            }
        }
        _ => {}
    }
}

fn rust_extern_crate(node: Node, source: &[u8]) -> Bindings {
    if let Some(alias) = node.child_by_field_name("alias") {
        return vec![text(alias, source)];
    }
    node.child_by_field_name("name").map(|n| vec![text(n, source)]).unwrap_or_default()
}

fn go_import_declaration(node: Node, source: &[u8]) -> Bindings {
    let mut names = Vec::new();
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        if n.kind() == "import_spec" {
            if let Some(name) = n.child_by_field_name("name") {
                let alias_text = text(name, source);
                if alias_text == "_" {
                    continue;
                }
                names.push(alias_text);
                continue;
            }
            if let Some(path) = n.child_by_field_name("path") {
                names.push(last_path_segment(strip_quotes(&text(path, source))));
            }
            continue;
        }
        let mut cursor = n.walk();
        for child in n.children(&mut cursor) {
            stack.push(child);
        }
    }
    names
}

fn java_import_declaration(node: Node, source: &[u8]) -> Bindings {
    let full = text(node, source);
    let full = full.trim_start_matches("import").trim_start_matches("static").trim().trim_end_matches(';').trim();
    if full.ends_with(".*") {
        return vec![WILDCARD.to_string()];
    }
    vec![last_path_segment(full)]
}

fn c_preproc_include(node: Node, source: &[u8]) -> Bindings {
    node.child_by_field_name("path")
        .map(|p| vec![basename_without_extension(strip_quotes(&text(p, source)))])
        .unwrap_or_default()
}

fn c_preproc_def(node: Node, source: &[u8]) -> Bindings {
    node.child_by_field_name("name").map(|n| vec![text(n, source)]).unwrap_or_default()
}

fn csharp_using_directive(node: Node, source: &[u8]) -> Bindings {
    if let Some(alias) = node.child_by_field_name("alias") {
        return vec![text(alias, source)];
    }
    node.child_by_field_name("name").map(|n| vec![last_path_segment(&text(n, source))]).unwrap_or_default()
}

fn php_use_declaration(node: Node, source: &[u8]) -> Bindings {
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for clause in node.named_children(&mut cursor) {
        if clause.kind() != "use_clause" {
            continue;
        }
        if let Some(alias) = clause.child_by_field_name("alias") {
            names.push(text(alias, source));
        } else if let Some(name) = clause.child_by_field_name("name") {
            names.push(last_path_segment(&text(name, source)));
        }
    }
    names
}

/// Best-effort default for languages without a dedicated binding rule:
/// take the text of the first identifier-shaped descendant.
fn generic_fallback(node: Node, source: &[u8]) -> Bindings {
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        if n.kind().contains("identifier") || n.kind() == "name" {
            return vec![text(n, source)];
        }
        let mut cursor = n.walk();
        for child in n.children(&mut cursor) {
            stack.push(child);
        }
    }
    Vec::new()
}
