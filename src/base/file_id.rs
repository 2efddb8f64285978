use std::fmt;

use smol_str::SmolStr;

/// Name of the file being rendered.
///
/// Opaque to the templater: it is only echoed into results and error
/// messages. Piped input uses [`FileId::STDIN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FileId(SmolStr);

impl FileId {
    pub const STDIN: &'static str = "stdin";

    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name.as_ref()))
    }

    pub fn stdin() -> Self {
        Self(SmolStr::new_static(Self::STDIN))
    }

    pub fn is_stdin(&self) -> bool {
        self.0 == Self::STDIN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::stdin()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FileId {
    fn from(name: String) -> Self {
        Self(SmolStr::from(name))
    }
}
