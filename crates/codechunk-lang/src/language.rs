//! Language Profile Registry
//!
//! Defines [`LanguageProfile`], the per-language node-type table the
//! chunking pipeline uses to recognize imports, containers, and
//! identifiers in a parse tree, and [`LanguageRegistry`], which looks
//! profiles up by name or file extension.
//!
//! Profiles are registered for every language the distillation this crate
//! is built from recognized, but only the languages with an actual
//! tree-sitter grammar dependency in this workspace get
//! [`ParserStatus::TreeSitter`]; the rest fall back to
//! [`ParserStatus::Plaintext`] (line-based chunking). See
//! `DESIGN.md` at the workspace root for the full rationale.

use std::collections::HashMap;

/// How a language's source is chunked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserStatus {
    /// A tree-sitter grammar is available; the recursive AST splitter runs.
    TreeSitter,
    /// No grammar available; falls back to line-based chunking.
    Plaintext,
    /// Custom cell-based handling (Jupyter notebooks).
    Notebook,
}

/// Start/end markers used to locate a container's body when it has no
/// `body` field (e.g. Python's `:` or Ruby's trailing `end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockDelimiters {
    /// Token that opens a block, if the language uses punctuation for it.
    pub start: Option<&'static str>,
    /// Token that closes a block.
    pub end: Option<&'static str>,
}

/// The per-language node-type table driving import collection, container
/// walking, and identifier extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Canonical lowercase name, matching [`LanguageRegistry::by_name`] keys.
    pub name: &'static str,
    /// Parsing strategy for this language.
    pub status: ParserStatus,
    /// Tree-sitter node kinds that introduce imports/requires.
    pub import_types: &'static [&'static str],
    /// Tree-sitter node kinds that define a named scope a chunk can belong to.
    pub container_types: &'static [&'static str],
    /// Tree-sitter node kinds treated as identifiers when scanning import usage.
    pub identifier_types: &'static [&'static str],
    /// Tree-sitter node kinds representing a block body.
    pub block_like_types: &'static [&'static str],
    /// Node kinds the ancestor walk never climbs past.
    pub stop_at_types: &'static [&'static str],
    /// Single-line comment prefix, if any.
    pub comment_prefix: Option<&'static str>,
    /// Delimiters used to locate a container's body when it lacks a `body` field.
    pub block_delimiters: BlockDelimiters,
    /// Whether this is a general-purpose programming language (vs. markup/config).
    pub is_code_language: bool,
}

const BASE_IDENTIFIER_TYPES: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "property_identifier",
    "variable_name",
    "method_name",
    "function_name",
    "class_name",
    "namespace_name",
];

macro_rules! profile {
    (
        name: $name:expr,
        status: $status:expr,
        imports: $imports:expr,
        containers: $containers:expr,
        identifiers: $identifiers:expr,
        block_like: $block_like:expr,
        stop_at: $stop_at:expr,
        comment_prefix: $comment_prefix:expr,
        block_delimiters: ($start:expr, $end:expr),
        is_code_language: $is_code:expr $(,)?
    ) => {
        LanguageProfile {
            name: $name,
            status: $status,
            import_types: $imports,
            container_types: $containers,
            identifier_types: $identifiers,
            block_like_types: $block_like,
            stop_at_types: $stop_at,
            comment_prefix: $comment_prefix,
            block_delimiters: BlockDelimiters {
                start: $start,
                end: $end,
            },
            is_code_language: $is_code,
        }
    };
}

fn profiles() -> Vec<LanguageProfile> {
    vec![
        profile! {
            name: "python", status: ParserStatus::TreeSitter,
            imports: &["import_statement", "import_from_statement"],
            containers: &["class_definition", "function_definition"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name", "dotted_name"],
            block_like: &["block"], stop_at: &["module"],
            comment_prefix: Some("#"), block_delimiters: (Some(":"), None), is_code_language: true,
        },
        profile! {
            name: "javascript", status: ParserStatus::TreeSitter,
            imports: &["import_statement"],
            containers: &["class_declaration", "function_declaration", "method_definition", "arrow_function"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "shorthand_property_identifier"],
            block_like: &["statement_block"], stop_at: &["program"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "typescript", status: ParserStatus::TreeSitter,
            imports: &["import_statement"],
            containers: &["class_declaration", "function_declaration", "method_definition", "arrow_function",
                "interface_declaration", "module_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "shorthand_property_identifier", "enum_member"],
            block_like: &["statement_block", "object_type"], stop_at: &["program"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "tsx", status: ParserStatus::TreeSitter,
            imports: &["import_statement"],
            containers: &["class_declaration", "function_declaration", "method_definition", "arrow_function",
                "interface_declaration", "module_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "shorthand_property_identifier", "enum_member"],
            block_like: &["statement_block", "object_type"], stop_at: &["program"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "java", status: ParserStatus::TreeSitter,
            imports: &["import_declaration"],
            containers: &["class_declaration", "method_declaration", "constructor_declaration",
                "interface_declaration", "enum_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "scoped_identifier"],
            block_like: &["block"], stop_at: &["program"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "rust", status: ParserStatus::TreeSitter,
            imports: &["use_declaration", "extern_crate_declaration"],
            containers: &["function_item", "struct_item", "enum_item", "impl_item", "trait_item", "mod_item"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "metavariable"],
            block_like: &["block"], stop_at: &["source_file"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "go", status: ParserStatus::TreeSitter,
            imports: &["import_declaration", "import_spec"],
            containers: &["function_declaration", "method_declaration", "type_declaration", "type_spec",
                "struct_type"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "package_identifier"],
            block_like: &["block"], stop_at: &["source_file"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "ruby", status: ParserStatus::TreeSitter,
            imports: &["require_statement", "load_statement"],
            containers: &["class", "module", "method", "singleton_method"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "constant", "symbol"],
            block_like: &["block", "do_block", "body_statement"], stop_at: &["program"],
            comment_prefix: Some("#"), block_delimiters: (None, Some("end")), is_code_language: true,
        },
        profile! {
            name: "c", status: ParserStatus::TreeSitter,
            imports: &["preproc_include", "preproc_def"],
            containers: &["function_definition", "struct_specifier", "enum_specifier", "union_specifier"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "system_lib_string"],
            block_like: &["compound_statement"], stop_at: &["translation_unit"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "c#", status: ParserStatus::TreeSitter,
            imports: &["using_directive"],
            containers: &["class_declaration", "method_declaration", "interface_declaration",
                "struct_declaration", "enum_declaration", "namespace_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "generic_name"],
            block_like: &["block"], stop_at: &["compilation_unit"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "c++", status: ParserStatus::TreeSitter,
            imports: &["preproc_include", "preproc_def", "using_declaration", "namespace_alias_definition"],
            containers: &["function_definition", "class_specifier", "struct_specifier", "enum_specifier",
                "union_specifier", "namespace_definition", "template_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "namespace_identifier", "template_function", "template_type", "system_lib_string"],
            block_like: &["compound_statement"], stop_at: &["translation_unit"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "php", status: ParserStatus::TreeSitter,
            imports: &["use_declaration", "include_expression", "require_expression"],
            containers: &["class_declaration", "function_definition", "method_declaration",
                "trait_declaration", "interface_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "name", "property_name"],
            block_like: &["compound_statement"], stop_at: &["program"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "swift", status: ParserStatus::TreeSitter,
            imports: &["import_declaration"],
            containers: &["class_declaration", "function_declaration", "protocol_declaration", "struct_declaration", "enum_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name"],
            block_like: &["statement_block"], stop_at: &["source_file"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "kotlin", status: ParserStatus::TreeSitter,
            imports: &["import_header"],
            containers: &["class_declaration", "function_declaration", "object_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name"],
            block_like: &["function_body", "class_body"], stop_at: &["source_file"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        // --- Remaining languages have no tree-sitter grammar dependency in
        // this workspace; they register for extension/name lookup but chunk
        // via the line-based fallback. ---
        profile! {
            name: "html", status: ParserStatus::Plaintext,
            imports: &[], containers: &["element"],
            identifiers: &["attribute_name", "tag_name"],
            block_like: &[], stop_at: &["document"],
            comment_prefix: Some("<!--"), block_delimiters: (Some(">"), Some("</")), is_code_language: false,
        },
        profile! {
            name: "css", status: ParserStatus::Plaintext,
            imports: &["import_statement"],
            containers: &["rule_set", "media_statement", "keyframes_statement", "supports_statement"],
            identifiers: &["tag_name", "class_name", "id_selector", "attribute_name", "property_name", "unit"],
            block_like: &["block"], stop_at: &["stylesheet"],
            comment_prefix: Some("/*"), block_delimiters: (Some("{"), Some("}")), is_code_language: false,
        },
        profile! {
            name: "less", status: ParserStatus::Plaintext,
            imports: &["import_statement"],
            containers: &["rule_set", "mixin_definition", "media_statement"],
            identifiers: &["tag_name", "class_name", "id_selector", "attribute_name", "property_name", "unit", "variable_name"],
            block_like: &["block"], stop_at: &["stylesheet"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: false,
        },
        profile! {
            name: "shell", status: ParserStatus::Plaintext,
            imports: &[], containers: &["function_definition", "case_item"],
            identifiers: &["variable_name", "command_name"],
            block_like: &["compound_statement", "do_group"], stop_at: &["program"],
            comment_prefix: Some("#"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "dockerfile", status: ParserStatus::Plaintext,
            imports: &[], containers: &["instruction"],
            identifiers: &["image_name", "path", "env_variable"],
            block_like: &[], stop_at: &["source_file"],
            comment_prefix: Some("#"), block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "makefile", status: ParserStatus::Plaintext,
            imports: &["include_directive"], containers: &["rule"],
            identifiers: &["word", "variable_reference"],
            block_like: &["recipe"], stop_at: &["source_file"],
            comment_prefix: Some("#"), block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "powershell", status: ParserStatus::Plaintext,
            imports: &["using_statement"], containers: &["function_statement", "class_statement", "enum_statement"],
            identifiers: &["variable", "member_name", "command_name", "type_name"],
            block_like: &["script_block", "block_statement"], stop_at: &["program"],
            comment_prefix: Some("#"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "groovy", status: ParserStatus::Plaintext,
            imports: &["import_statement"],
            containers: &["class_declaration", "method_declaration", "constructor_declaration",
                "interface_declaration", "enum_declaration", "closure"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "capitalized_identifier", "closure_parameter"],
            block_like: &["block_statement", "closure_body"], stop_at: &["compilation_unit"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "hack", status: ParserStatus::Plaintext,
            imports: &["namespace_use_declaration"],
            containers: &["classish_declaration", "function_declaration", "methodish_declaration",
                "enum_declaration", "type_alias_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name", "name"],
            block_like: &["compound_statement"], stop_at: &["script"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "hcl", status: ParserStatus::Plaintext,
            imports: &[], containers: &["block"], identifiers: &["identifier"],
            block_like: &["body"], stop_at: &["config_file"],
            comment_prefix: Some("#"), block_delimiters: (Some("{"), Some("}")), is_code_language: false,
        },
        profile! {
            name: "julia", status: ParserStatus::Plaintext,
            imports: &["using_statement", "import_statement"],
            containers: &["function_definition", "macro_definition", "struct_definition", "module_definition"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name", "symbol"],
            block_like: &["block"], stop_at: &["source_file"],
            comment_prefix: Some("#"), block_delimiters: (None, Some("end")), is_code_language: true,
        },
        profile! {
            name: "odin", status: ParserStatus::Plaintext,
            imports: &["import_declaration"],
            containers: &["procedure_declaration", "struct_declaration", "enum_declaration", "union_declaration"],
            identifiers: &["identifier", "type_identifier", "field_identifier", "property_identifier",
                "variable_name", "method_name", "function_name", "class_name", "namespace_name",
                "package_identifier"],
            block_like: &["block_statement"], stop_at: &["source_file"],
            comment_prefix: Some("//"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "perl", status: ParserStatus::Plaintext,
            imports: &["use_statement", "require_statement"],
            containers: &["subroutine_definition", "package_declaration"],
            identifiers: &["bareword", "scalar_variable", "array_variable", "hash_variable"],
            block_like: &["block"], stop_at: &["program"],
            comment_prefix: Some("#"), block_delimiters: (Some("{"), Some("}")), is_code_language: true,
        },
        profile! {
            name: "pug", status: ParserStatus::Plaintext,
            imports: &["include_directive", "extends_directive"],
            containers: &["tag", "mixin_definition", "conditional", "each"],
            identifiers: &["tag_name", "class", "id"],
            block_like: &["block"], stop_at: &["source_file"],
            comment_prefix: Some("//"), block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "mermaid", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: Some("%%"), block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "markdown", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "sql", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: Some("--"), block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "jupyter notebook", status: ParserStatus::Notebook,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "actionscript", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "apex", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "asp", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "asp.net", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "awk", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "batchfile", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "classic asp", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "ejs", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "gherkin", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "handlebars", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "harbour", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "lookml", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "mdx", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "mustache", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
        profile! {
            name: "nsis", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "plpgsql", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "plsql", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "processing", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: true,
        },
        profile! {
            name: "procfile", status: ParserStatus::Plaintext,
            imports: &[], containers: &[], identifiers: &[], block_like: &[], stop_at: &[],
            comment_prefix: None, block_delimiters: (None, None), is_code_language: false,
        },
    ]
}

/// File extensions mapped to language names, matching the original
/// `EXTENSION_TO_LANGUAGE` table.
const EXTENSION_TO_LANGUAGE: &[(&str, &str)] = &[
    ("py", "python"), ("pyw", "python"),
    ("js", "javascript"), ("jsx", "javascript"), ("mjs", "javascript"),
    ("ts", "typescript"), ("tsx", "tsx"),
    ("java", "java"), ("groovy", "groovy"), ("gvy", "groovy"), ("gradle", "groovy"),
    ("kt", "kotlin"),
    ("cpp", "c++"), ("cc", "c++"), ("cxx", "c++"), ("c", "c"), ("h", "c"), ("hpp", "c++"),
    ("cs", "c#"),
    ("go", "go"), ("rb", "ruby"), ("php", "php"), ("rs", "rust"), ("swift", "swift"),
    ("html", "html"), ("htm", "html"), ("css", "css"), ("less", "less"),
    ("md", "markdown"),
    ("sh", "shell"), ("bash", "shell"), ("zsh", "shell"),
    ("jl", "julia"), ("hack", "hack"), ("hh", "hack"),
    ("hcl", "hcl"), ("tf", "hcl"),
    ("pl", "perl"), ("pm", "perl"),
    ("ps1", "powershell"), ("psm1", "powershell"), ("psd1", "powershell"),
    ("pug", "pug"), ("jade", "pug"),
    ("odin", "odin"),
    ("ipynb", "jupyter notebook"),
    ("mmd", "mermaid"), ("mermaid", "mermaid"),
    ("sql", "sql"), ("psql", "sql"), ("tsql", "sql"), ("pgsql", "sql"), ("plsql", "sql"),
    ("aspx", "asp.net"), ("ascx", "asp.net"), ("ashx", "asp.net"), ("asmx", "asp.net"),
    ("asp", "classic asp"),
    ("bat", "batchfile"), ("cmd", "batchfile"),
    ("hbs", "handlebars"), ("handlebars", "handlebars"),
    ("mustache", "mustache"),
    ("pde", "processing"),
    ("as", "actionscript"),
    ("mdx", "mdx"),
    ("lkml", "lookml"),
    ("prg", "harbour"),
    ("awk", "awk"),
    ("feature", "gherkin"),
    ("ejs", "ejs"),
    ("cls", "apex"), ("apex", "apex"),
    ("nsi", "nsis"),
];

/// Known filenames (lowercased, no extension) mapped to a language name.
const KNOWN_FILENAMES: &[(&str, &str)] = &[
    ("dockerfile", "dockerfile"),
    ("makefile", "makefile"),
    ("procfile", "procfile"),
    ("jenkinsfile", "groovy"),
    ("vagrantfile", "ruby"),
    ("gemfile", "ruby"),
    ("rakefile", "ruby"),
    ("brewfile", "ruby"),
];

/// Registry for language-profile lookup by name or file extension.
pub struct LanguageRegistry {
    profiles: HashMap<&'static str, LanguageProfile>,
}

impl LanguageRegistry {
    /// Build a registry containing every known language profile.
    pub fn new() -> Self {
        let profiles = profiles().into_iter().map(|p| (p.name, p)).collect();
        Self { profiles }
    }

    /// Look up a profile by its canonical lowercase name.
    pub fn by_name(&self, name: &str) -> Option<&LanguageProfile> {
        self.profiles.get(name.to_lowercase().as_str())
    }

    /// Determine the language name for a file path, checking known
    /// filenames (e.g. `Dockerfile`) before falling back to the extension.
    ///
    /// Mirrors `get_language_from_extension`: a filename matching a known
    /// name, or starting with `"{known_name}."`, wins over the extension.
    pub fn name_for_path(&self, file_path: &str) -> Option<&'static str> {
        let filename = std::path::Path::new(file_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())?;

        for &(known_name, language) in KNOWN_FILENAMES {
            if filename == known_name || filename.starts_with(&format!("{known_name}.")) {
                return Some(language);
            }
        }

        let extension = std::path::Path::new(file_path)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())?;
        EXTENSION_TO_LANGUAGE
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, lang)| *lang)
    }

    /// Look up a profile for a file path via [`Self::name_for_path`].
    pub fn by_path(&self, file_path: &str) -> Option<&LanguageProfile> {
        self.name_for_path(file_path).and_then(|name| self.by_name(name))
    }

    /// All registered language names.
    pub fn all_names(&self) -> Vec<&'static str> {
        self.profiles.keys().copied().collect()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
