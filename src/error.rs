//! Crate-level error types.

use std::fmt;

/// Errors produced by the meshview crate.
///
/// Initialization errors (shading-language detection, shader compile/link,
/// scene-table overflow, missing resources) are fatal: the host should tear
/// the viewer down rather than retry.
#[derive(Debug)]
pub enum MeshviewError {
    /// A named resource could not be opened through the platform API.
    ResourceMissing(String),
    /// The driver-reported shading-language version matched no supported
    /// dialect.
    UnsupportedShadingLanguage(String),
    /// GL object creation failed (shader, program, buffer, vertex array).
    GlObject(String),
    /// A shader stage failed to compile.
    ShaderCompile {
        /// Stage name ("vertex" or "fragment").
        stage: &'static str,
        /// Driver info log.
        log: String,
    },
    /// The shader program failed to link.
    ShaderLink(String),
    /// An OBJ document could not be parsed into a usable mesh.
    MeshParse(String),
    /// A scene table reached its fixed capacity.
    SceneCapacity {
        /// Which table overflowed ("shader" or "mesh").
        table: &'static str,
        /// The table's capacity limit.
        limit: usize,
    },
    /// Options TOML parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for MeshviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceMissing(name) => {
                write!(f, "resource not found: {name}")
            }
            Self::UnsupportedShadingLanguage(version) => {
                write!(f, "unsupported shading language: {version}")
            }
            Self::GlObject(msg) => {
                write!(f, "GL object creation failed: {msg}")
            }
            Self::ShaderCompile { stage, log } => {
                write!(f, "{stage} shader compile failed: {log}")
            }
            Self::ShaderLink(log) => {
                write!(f, "shader program link failed: {log}")
            }
            Self::MeshParse(msg) => write!(f, "mesh parse error: {msg}"),
            Self::SceneCapacity { table, limit } => {
                write!(f, "scene {table} table full (limit {limit})")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MeshviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MeshviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
