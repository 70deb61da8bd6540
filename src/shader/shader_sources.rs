use {
    crate::shader::{ShaderError, ShaderStage},
    std::path::{Path, PathBuf},
};

/// Where a stage's GLSL text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageSource {
    /// Read the full text of the file when the program is loaded.
    File(PathBuf),

    /// Source text already in memory, e.g. from `include_str!`.
    Inline(String),
}

impl StageSource {
    /// Produce the source text for the given stage.
    ///
    /// Unreadable files and empty text are both errors, so nothing empty is
    /// ever handed to the compiler. File contents are not required to be
    /// UTF-8: invalid sequences are replaced and left for the compiler to
    /// report.
    pub fn read(&self, stage: ShaderStage) -> Result<String, ShaderError> {
        let text = match self {
            StageSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| {
                    ShaderError::FileUnreadable {
                        stage,
                        path: path.clone(),
                        source,
                    }
                })?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
            StageSource::Inline(text) => text.clone(),
        };

        if text.is_empty() {
            return Err(ShaderError::EmptySource {
                stage,
                name: self.name(stage),
            });
        }
        Ok(text)
    }

    /// A name for this source suitable for diagnostics.
    pub fn name(&self, stage: ShaderStage) -> String {
        match self {
            StageSource::File(path) => path.display().to_string(),
            StageSource::Inline(_) => format!("<inline {} source>", stage),
        }
    }
}

impl From<PathBuf> for StageSource {
    fn from(path: PathBuf) -> Self {
        StageSource::File(path)
    }
}

impl From<&Path> for StageSource {
    fn from(path: &Path) -> Self {
        StageSource::File(path.to_owned())
    }
}

impl From<&str> for StageSource {
    /// Strings are treated as paths. Use `StageSource::Inline` for source
    /// text.
    fn from(path: &str) -> Self {
        StageSource::File(PathBuf::from(path))
    }
}

/// An ordered collection of the stages which make up one program.
///
/// Stages may be added in any order. `ShaderProgram::load` always compiles
/// them vertex first and fragment last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSources {
    stages: Vec<(ShaderStage, StageSource)>,
}

impl ShaderSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build sources from one optional path per stage, skipping every
    /// absent slot.
    pub fn from_optional_paths<P: AsRef<Path>>(
        vertex: Option<P>,
        tess_control: Option<P>,
        tess_evaluation: Option<P>,
        geometry: Option<P>,
        fragment: Option<P>,
    ) -> Self {
        let slots = [vertex, tess_control, tess_evaluation, geometry, fragment];
        let stages: Vec<(ShaderStage, StageSource)> = ShaderStage::ALL
            .iter()
            .zip(slots)
            .filter_map(|(stage, path)| {
                path.map(|path| (*stage, StageSource::from(path.as_ref())))
            })
            .collect();
        Self { stages }
    }

    /// Add a stage.
    pub fn stage(
        mut self,
        stage: ShaderStage,
        source: impl Into<StageSource>,
    ) -> Self {
        self.stages.push((stage, source.into()));
        self
    }

    pub fn vertex(self, source: impl Into<StageSource>) -> Self {
        self.stage(ShaderStage::Vertex, source)
    }

    pub fn tess_control(self, source: impl Into<StageSource>) -> Self {
        self.stage(ShaderStage::TessControl, source)
    }

    pub fn tess_evaluation(self, source: impl Into<StageSource>) -> Self {
        self.stage(ShaderStage::TessEvaluation, source)
    }

    pub fn geometry(self, source: impl Into<StageSource>) -> Self {
        self.stage(ShaderStage::Geometry, source)
    }

    pub fn fragment(self, source: impl Into<StageSource>) -> Self {
        self.stage(ShaderStage::Fragment, source)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Check that there is at least one stage and no stage kind repeats,
    /// then return the stages in pipeline order.
    pub fn ordered(
        &self,
    ) -> Result<Vec<(ShaderStage, &StageSource)>, ShaderError> {
        if self.stages.is_empty() {
            return Err(ShaderError::NoStages);
        }

        let mut ordered: Vec<(ShaderStage, &StageSource)> = self
            .stages
            .iter()
            .map(|(stage, source)| (*stage, source))
            .collect();
        ordered.sort_by_key(|(stage, _)| *stage);

        let duplicate = ordered
            .windows(2)
            .find(|pair| pair[0].0 == pair[1].0)
            .map(|pair| pair[0].0);
        if let Some(stage) = duplicate {
            return Err(ShaderError::DuplicateStage(stage));
        }

        Ok(ordered)
    }
}
