use std::fmt;

/// Stage of a shader program build that produced a diagnostic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BuildStep {
    /// A single stage failed to parse or validate.
    ShaderCompile,
    /// The stages compiled but do not form a usable program.
    ProgramLink,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::ShaderCompile => f.write_str("shader compilation"),
            BuildStep::ProgramLink => f.write_str("shader link"),
        }
    }
}

/// Typed engine failures.
///
/// Both kinds are fatal for the demos: the runtime records them and
/// `Runtime::run` returns them to `main`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Event loop, window, surface, adapter or device creation failed.
    #[error("initialization failed: {what}")]
    Initialization {
        what: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Compile or link failure with the diagnostic text of the shader front-end.
    #[error("{step} unsuccessful ({label})\n{log}")]
    ShaderBuild {
        step: BuildStep,
        label: String,
        log: String,
    },
}

impl EngineError {
    pub fn initialization(what: &'static str, source: anyhow::Error) -> Self {
        EngineError::Initialization { what, source: source.into() }
    }

    pub fn shader_build(step: BuildStep, label: impl Into<String>, log: impl Into<String>) -> Self {
        EngineError::ShaderBuild { step, label: label.into(), log: log.into() }
    }

    /// Returns the build step for shader failures.
    pub fn build_step(&self) -> Option<BuildStep> {
        match self {
            EngineError::ShaderBuild { step, .. } => Some(*step),
            EngineError::Initialization { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_build_message_names_the_step() {
        let err = EngineError::shader_build(BuildStep::ProgramLink, "colored", "no fs_main");
        let msg = err.to_string();
        assert!(msg.starts_with("shader link unsuccessful (colored)"));
        assert!(msg.ends_with("no fs_main"));
        assert_eq!(err.build_step(), Some(BuildStep::ProgramLink));
    }

    #[test]
    fn initialization_keeps_source() {
        let err = EngineError::initialization("window", anyhow::anyhow!("no display"));
        assert_eq!(err.to_string(), "initialization failed: window");
        assert_eq!(err.build_step(), None);
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("no display"));
    }
}
