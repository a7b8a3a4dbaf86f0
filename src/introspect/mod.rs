//! Type introspection over the component source tree.
//!
//! Builds a queryable program from an explicit file list, resolves the
//! intrinsic-element catalogue once, and answers per-component
//! default-element lookups through the [`TypeChecker`] seam. Program
//! construction is the only fatal step in the whole pipeline; every lookup
//! afterwards is best-effort.

pub mod checker;
pub mod intrinsics;
pub mod parser;

pub use checker::{first_string_literal, ProgramChecker, TypeChecker, TypeProperty, TypeRef};
pub use intrinsics::{intrinsic_props, resolve_intrinsic_elements};
pub use parser::{detect_variant, file_stem, node_text, parse_source, SourceModule};

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed view over a fixed set of source files. Created once per docgen
/// run, immutable afterward.
pub struct ProgramContext {
    root: PathBuf,
    modules: Vec<SourceModule>,
    intrinsic_elements: Option<TypeRef>,
}

impl ProgramContext {
    /// Read and parse every listed file. Relative paths are joined against
    /// `root`. An unreadable or unparsable file aborts the run.
    pub fn build(root: &Path, files: &[PathBuf]) -> Result<Self> {
        let mut modules = Vec::with_capacity(files.len());
        for file in files {
            let path = if file.is_absolute() {
                file.clone()
            } else {
                root.join(file)
            };
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read source file {}", path.display()))?;
            let variant = detect_variant(&path);
            modules.push(parse_source(&source, &path, variant)?);
        }

        let mut program = Self {
            root: root.to_path_buf(),
            modules,
            intrinsic_elements: None,
        };
        let intrinsic_elements = resolve_intrinsic_elements(&program.checker());
        program.intrinsic_elements = intrinsic_elements;
        debug!(
            "program built: {} modules, intrinsic elements {}",
            program.modules.len(),
            if program.intrinsic_elements.is_some() {
                "resolved"
            } else {
                "unavailable"
            }
        );
        Ok(program)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn modules(&self) -> &[SourceModule] {
        &self.modules
    }

    /// The resolved `JSX.IntrinsicElements` interface, when the program
    /// declares one.
    pub fn intrinsic_elements(&self) -> Option<&TypeRef> {
        self.intrinsic_elements.as_ref()
    }

    pub fn checker(&self) -> ProgramChecker<'_> {
        ProgramChecker::new(self)
    }

    /// Find a module by exact path, or by relative-path suffix: extraction
    /// tool output carries project-relative paths while the program stores
    /// the paths it was built with.
    pub fn module_index_for(&self, path: &Path) -> Option<usize> {
        self.modules
            .iter()
            .position(|module| module.path == path)
            .or_else(|| self.modules.iter().position(|module| module.path.ends_with(path)))
    }

    pub fn module_for(&self, path: &Path) -> Option<&SourceModule> {
        self.module_index_for(path).map(|idx| &self.modules[idx])
    }
}

/// Resolve a component's declared default element: an exported type named
/// exactly `${ComponentName}DefaultElement` in the component's own module
/// that statically resolves to a string literal, or to a union containing
/// one. No partial matches, no case folding, no other naming patterns.
pub fn default_element_name<C: TypeChecker + ?Sized>(
    checker: &C,
    file: &Path,
    component_name: &str,
) -> Option<String> {
    let export = format!("{component_name}DefaultElement");
    let ty = checker.type_of_export(file, &export)?;
    first_string_literal(&checker.type_to_string(&ty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        PathBuf::from(name)
    }

    #[test]
    fn test_build_fails_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ProgramContext::build(dir.path(), &[PathBuf::from("Missing.tsx")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_element_from_literal() {
        let dir = TempDir::new().unwrap();
        let file = write_file(
            &dir,
            "Button.tsx",
            "export type ButtonDefaultElement = 'button';\nexport const Button = () => null;\n",
        );
        let program = ProgramContext::build(dir.path(), &[file.clone()]).unwrap();
        let checker = program.checker();
        assert_eq!(
            default_element_name(&checker, &file, "Button"),
            Some("button".to_string())
        );
    }

    #[test]
    fn test_default_element_from_union() {
        let dir = TempDir::new().unwrap();
        let file = write_file(
            &dir,
            "Link.tsx",
            "export type LinkDefaultElement = HTMLAnchorElement | 'a';\n",
        );
        let program = ProgramContext::build(dir.path(), &[file.clone()]).unwrap();
        assert_eq!(
            default_element_name(&program.checker(), &file, "Link"),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_default_element_requires_exact_name() {
        let dir = TempDir::new().unwrap();
        let file = write_file(
            &dir,
            "Button.tsx",
            "export type ButtonDefaultTag = 'button';\n",
        );
        let program = ProgramContext::build(dir.path(), &[file.clone()]).unwrap();
        assert_eq!(default_element_name(&program.checker(), &file, "Button"), None);
    }

    #[test]
    fn test_default_element_non_literal_is_not_found() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "View.tsx", "export type ViewDefaultElement = string;\n");
        let program = ProgramContext::build(dir.path(), &[file.clone()]).unwrap();
        assert_eq!(default_element_name(&program.checker(), &file, "View"), None);
    }

    #[test]
    fn test_module_exports() {
        let dir = TempDir::new().unwrap();
        let file = write_file(
            &dir,
            "Tabs.tsx",
            "export type TabsDefaultElement = 'div';\nexport interface TabsProps { value?: string }\ntype Internal = number;\n",
        );
        let program = ProgramContext::build(dir.path(), &[file.clone()]).unwrap();
        let exports = program.checker().module_exports(&file);
        assert_eq!(exports, vec!["TabsDefaultElement", "TabsProps"]);
    }

    #[test]
    fn test_intrinsic_elements_resolution() {
        let dir = TempDir::new().unwrap();
        let jsx = write_file(
            &dir,
            "jsx.ts",
            r#"
namespace JSX {
  export interface IntrinsicElements {
    button: ButtonAttributes;
    a: AnchorAttributes;
  }
}

interface ButtonAttributes {
  /** Fired on activation. */
  onClick?: () => void;
  disabled?: boolean;
}

interface AnchorAttributes {
  href?: string;
}
"#,
        );
        let program = ProgramContext::build(dir.path(), &[jsx]).unwrap();
        let intrinsics = program.intrinsic_elements().copied().unwrap();
        let checker = program.checker();

        let bag = intrinsic_props(&checker, &intrinsics, "button").unwrap();
        let names: Vec<&str> = bag.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["onClick", "disabled"]);
        assert!(bag[0].optional);
        assert_eq!(bag[0].doc.as_deref(), Some("Fired on activation."));
        assert_eq!(checker.type_to_string(&bag[1].ty), "boolean");

        assert!(intrinsic_props(&checker, &intrinsics, "video").is_none());
    }

    #[test]
    fn test_intrinsics_absent_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "Plain.tsx", "export const Plain = () => null;\n");
        let program = ProgramContext::build(dir.path(), &[file]).unwrap();
        assert!(program.intrinsic_elements().is_none());
    }
}
