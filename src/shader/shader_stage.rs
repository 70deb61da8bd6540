use {gl::types::GLenum, std::fmt};

/// One compilable unit of a shader pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShaderStage {
    Vertex,
    TessControl,
    TessEvaluation,
    Geometry,
    Fragment,
}

impl ShaderStage {
    /// Every stage, in the order they are compiled and attached.
    pub const ALL: [ShaderStage; 5] = [
        ShaderStage::Vertex,
        ShaderStage::TessControl,
        ShaderStage::TessEvaluation,
        ShaderStage::Geometry,
        ShaderStage::Fragment,
    ];

    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::TessControl => gl::TESS_CONTROL_SHADER,
            ShaderStage::TessEvaluation => gl::TESS_EVALUATION_SHADER,
            ShaderStage::Geometry => gl::GEOMETRY_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    /// A human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::TessControl => "tessellation control",
            ShaderStage::TessEvaluation => "tessellation evaluation",
            ShaderStage::Geometry => "geometry",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::BTreeSet};

    #[test]
    fn all_is_sorted_in_pipeline_order() {
        let mut sorted = ShaderStage::ALL;
        sorted.sort();
        assert_eq!(sorted, ShaderStage::ALL);
    }

    #[test]
    fn stages_map_to_distinct_gl_enums() {
        let enums: BTreeSet<GLenum> =
            ShaderStage::ALL.iter().map(|stage| stage.gl_enum()).collect();
        assert_eq!(enums.len(), ShaderStage::ALL.len());
        assert_eq!(enums.len(), 5);
        assert_eq!(ShaderStage::Fragment.gl_enum(), gl::FRAGMENT_SHADER);
    }
}
