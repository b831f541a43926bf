use std::path::PathBuf;

use crate::normalize::normalize;
use crate::registry::AliasRegistry;

/// Outcome of rewriting one import specifier.
#[derive(Debug, PartialEq, Eq)]
pub enum Rewrite {
    /// The specifier matched a registered symbol; carries the substituted
    /// absolute path.
    Aliased(PathBuf),
    /// No symbol matched; the specifier flows unchanged to default module
    /// lookup.
    Passthrough,
}

/// Rewrite an import specifier against the registry.
///
/// A symbol matches when the specifier equals it exactly or continues with
/// `/` immediately after it (`utils/fmt` matches `utils`, `utilsx/fmt` does
/// not). Entries are scanned in registration order; first match wins. The
/// remainder after the symbol is joined onto the bound path and normalized,
/// so `@/a/../b` rewrites to `<src>/b`.
pub fn rewrite(specifier: &str, registry: &AliasRegistry) -> Rewrite {
    for entry in registry.entries() {
        if specifier == entry.symbol {
            return Rewrite::Aliased(entry.absolute_path.clone());
        }
        if let Some(rest) = specifier.strip_prefix(&entry.symbol) {
            if let Some(rest) = rest.strip_prefix('/') {
                return Rewrite::Aliased(normalize(&entry.absolute_path.join(rest)));
            }
        }
    }
    Rewrite::Passthrough
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn project_registry() -> AliasRegistry {
        let mut registry = AliasRegistry::with_base("/project");
        registry.register("@", "./src").unwrap();
        registry.register("components", "./src/components").unwrap();
        registry.register("assets", "./src/assets").unwrap();
        registry.register("utils", "./src/utils").unwrap();
        registry
    }

    #[test]
    fn bare_symbol_rewrites_to_bound_path() {
        let registry = project_registry();
        assert_eq!(
            rewrite("@", &registry),
            Rewrite::Aliased(PathBuf::from("/project/src"))
        );
        assert_eq!(
            rewrite("assets", &registry),
            Rewrite::Aliased(PathBuf::from("/project/src/assets"))
        );
    }

    #[test]
    fn symbol_prefix_substitutes_and_joins_remainder() {
        let registry = project_registry();
        assert_eq!(
            rewrite("@/views/Home.vue", &registry),
            Rewrite::Aliased(PathBuf::from("/project/src/views/Home.vue"))
        );
        assert_eq!(
            rewrite("components/NavBar", &registry),
            Rewrite::Aliased(PathBuf::from("/project/src/components/NavBar"))
        );
    }

    #[test]
    fn remainder_is_normalized() {
        let registry = project_registry();
        assert_eq!(
            rewrite("utils/fmt/../date", &registry),
            Rewrite::Aliased(PathBuf::from("/project/src/utils/date"))
        );
    }

    #[test]
    fn symbol_match_requires_full_segment() {
        let registry = project_registry();
        assert_eq!(rewrite("utilsx/fmt", &registry), Rewrite::Passthrough);
        assert_eq!(rewrite("@x/pkg", &registry), Rewrite::Passthrough);
    }

    #[test]
    fn unmatched_specifiers_pass_through() {
        let registry = project_registry();
        assert_eq!(rewrite("react", &registry), Rewrite::Passthrough);
        assert_eq!(rewrite("./local/module", &registry), Rewrite::Passthrough);
        assert_eq!(rewrite("../sibling", &registry), Rewrite::Passthrough);
    }

    #[test]
    fn first_registered_match_wins() {
        let mut registry = AliasRegistry::with_base("/project");
        registry.register("@", "./src").unwrap();
        registry.register("@/nested", "./elsewhere").unwrap();

        // `@` is scanned first, so the longer symbol never matches.
        assert_eq!(
            rewrite("@/nested/mod", &registry),
            Rewrite::Aliased(PathBuf::from("/project/src/nested/mod"))
        );
    }

    #[test]
    fn overwritten_symbol_resolves_to_latest_target() {
        let mut registry = project_registry();
        registry.register("@", "./app").unwrap();
        assert_eq!(
            rewrite("@/main.ts", &registry),
            Rewrite::Aliased(PathBuf::from("/project/app/main.ts"))
        );
    }

    #[test]
    fn empty_registry_passes_everything_through() {
        let registry = AliasRegistry::with_base(Path::new("/project"));
        assert_eq!(rewrite("@/anything", &registry), Rewrite::Passthrough);
    }
}
