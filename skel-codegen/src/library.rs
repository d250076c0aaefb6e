/// A library name and the presentation forms derived from it.
///
/// The name is used verbatim as a directory name, upper-cased inside the
/// per-library `HPX_<NAME>_WITH_TESTS` option identifier, and underlined
/// with `=` in the docs index title. No character validation is performed;
/// a name the filesystem rejects surfaces as a directory-creation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryName {
    name: String,
}

impl LibraryName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name exactly as given on the command line.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Upper-cased token embedded in the CMake option identifier.
    pub fn option_token(&self) -> String {
        self.name.to_uppercase()
    }

    /// A rule of `=` characters matching the name's character count, used
    /// to over- and underline the docs index title.
    pub fn underline(&self) -> String {
        "=".repeat(self.name.chars().count())
    }
}
