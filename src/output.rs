use std::fmt;

use crate::registry::AliasRegistry;
use crate::resolve::Rewrite;

/// One rewritten specifier, ready for display.
pub struct ResolutionReport<'a> {
    pub specifier: &'a str,
    pub outcome: Rewrite,
}

impl fmt::Display for ResolutionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Rewrite::Aliased(path) => write!(f, "{}  ->  {}", self.specifier, path.display()),
            Rewrite::Passthrough => write!(f, "{}  (pass-through)", self.specifier),
        }
    }
}

/// Registry listing for `--list`: base directory, then one line per entry
/// in registration order.
pub struct RegistryListing<'a>(pub &'a AliasRegistry);

impl fmt::Display for RegistryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base: {}", self.0.base_dir().display())?;

        let width = self
            .0
            .entries()
            .map(|e| e.symbol.len())
            .max()
            .unwrap_or(0);
        for entry in self.0.entries() {
            writeln!(
                f,
                "{:<width$}  ->  {}",
                entry.symbol,
                entry.absolute_path.display()
            )?;
        }
        Ok(())
    }
}
