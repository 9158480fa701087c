use std::fmt;
use std::hash::{Hash, Hasher};

/// Descriptive metadata for one symbol universe.
#[derive(Debug)]
pub struct SymbolTypeInfo {
    /// Stable machine name, e.g. `animation_controller`
    pub name: &'static str,
    /// Human label used in hover output
    pub label: &'static str,
    pub description: &'static str,
    pub help_url: Option<&'static str>,
    /// Identifiers are `/`-separated paths (offered as a folder tree on completion)
    pub path_like: bool,
}

/// Discriminator for a symbol universe.
///
/// Equality and hashing go by the address of the backing `static`, so two
/// types never collide even if their names match.
#[derive(Clone, Copy)]
pub struct SymbolType(&'static SymbolTypeInfo);

impl SymbolType {
    pub const fn new(info: &'static SymbolTypeInfo) -> Self {
        Self(info)
    }

    pub fn info(self) -> &'static SymbolTypeInfo {
        self.0
    }

    pub fn name(self) -> &'static str {
        self.0.name
    }

    pub fn label(self) -> &'static str {
        self.0.label
    }

    pub fn is_path_like(self) -> bool {
        self.0.path_like
    }
}

impl PartialEq for SymbolType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for SymbolType {}

impl Hash for SymbolType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl fmt::Debug for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolType({})", self.0.name)
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label)
    }
}
