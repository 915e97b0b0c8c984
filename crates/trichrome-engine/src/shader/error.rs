use std::fmt;

/// Pipeline stage a shader module belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failure while compiling shader modules or linking them into a pipeline.
///
/// The driver log is carried verbatim so callers can show the real diagnostic
/// instead of a generic message.
#[derive(Debug)]
pub enum ShaderError {
    /// A single shader module failed validation.
    Compile { stage: ShaderStage, log: String },
    /// A vertex/fragment pair failed to link into a render pipeline.
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ShaderError::*;
        match self {
            Compile { stage, log } => write!(f, "{stage} shader failed to compile: {log}"),
            Link { log } => write!(f, "pipeline link failed: {log}"),
        }
    }
}

impl std::error::Error for ShaderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_stage_and_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "unknown identifier 'colr'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fragment"));
        assert!(msg.contains("unknown identifier 'colr'"));
    }

    #[test]
    fn link_error_carries_log() {
        let err = ShaderError::Link {
            log: "entry point not found".to_string(),
        };
        assert!(err.to_string().contains("entry point not found"));
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
